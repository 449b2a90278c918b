//! Recompute rules.
//!
//! Each rule is a pure function of its inputs and the dataset. A failing
//! guard returns [`Recompute::Suppressed`]; only a broken transform returns an
//! error.
//!
//! | Rule | Inputs | Guard |
//! |------|--------|-------|
//! | [`distribution`] | `dist-dropdown` | selection names a column |
//! | [`relationship`] | `x-axis-dropdown`, `y-axis-dropdown` | both set and known |
//! | [`categorical`] | `category-dropdown` | selection names a column |
//! | [`outcome`] | path | path is `/outcome` |
//! | [`page_content`] | path | none |

mod categorical;
mod distribution;
mod outcome;
mod page_content;
mod relationship;

use std::cmp::Ordering;

use voyage_model::{Dataset, Recompute, Suppression, WidgetId};

pub use categorical::categorical;
pub use distribution::distribution;
pub use outcome::outcome;
pub use page_content::page_content;
pub use relationship::relationship;

/// Resolve a selection to a column name, or the reason to suppress.
fn require_column<'a>(
    dataset: &Dataset,
    widget: WidgetId,
    selection: Option<&'a str>,
) -> Result<&'a str, Suppression> {
    let Some(column) = selection.filter(|c| !c.is_empty()) else {
        return Err(Suppression::MissingSelection { widget });
    };
    if !dataset.has_column(column) {
        return Err(Suppression::UnknownColumn {
            column: column.to_string(),
        });
    }
    Ok(column)
}

/// Order category labels: numeric labels first by value, then text labels.
fn compare_labels(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn suppressed<T>(reason: Suppression) -> crate::error::Result<Recompute<T>> {
    Ok(Recompute::Suppressed(reason))
}
