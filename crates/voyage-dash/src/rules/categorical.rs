use polars::prelude::{DataType, IntoLazy, col};
use voyage_model::schema::OUTCOME_COLUMN;
use voyage_model::values::{any_to_f64, display_value};
use voyage_model::{Axis, Bar, ChartData, ChartKind, ChartSpec, Dataset, Recompute, WidgetId};

use super::{compare_labels, require_column, suppressed};
use crate::error::Result;

const BAR_COLOR: &str = "blue";
const SUM_ALIAS: &str = "__outcome_sum";
const COUNT_ALIAS: &str = "__outcome_count";

/// Mean outcome per value of a categorical column.
///
/// Rows with a missing key are dropped and bars are ordered by key.
pub fn categorical(dataset: &Dataset, column: Option<&str>) -> Result<Recompute<ChartSpec>> {
    let column = match require_column(dataset, WidgetId::Category, column) {
        Ok(column) => column,
        Err(reason) => return suppressed(reason),
    };

    let bars = outcome_means(dataset, column)?;

    let spec = ChartSpec::new(
        ChartKind::Bar,
        Axis::linear(column),
        Axis::linear(OUTCOME_COLUMN).with_title(format!("Average {OUTCOME_COLUMN}")),
        ChartData::Bars { bars },
    )
    .with_title(format!(
        "Proportion of {OUTCOME_COLUMN} Passengers by {column}"
    ))
    .with_marker_color(BAR_COLOR);

    Ok(Recompute::Recomputed(spec))
}

/// Group by `column` and average the outcome in each group.
///
/// The mean is taken as sum over non-null count. Groups without a single
/// recorded outcome have no mean and get no bar.
pub fn outcome_means(dataset: &Dataset, column: &str) -> Result<Vec<Bar>> {
    let grouped = dataset
        .frame()
        .clone()
        .lazy()
        .filter(col(column).is_not_null())
        .group_by([col(column)])
        .agg([
            col(OUTCOME_COLUMN)
                .cast(DataType::Float64)
                .sum()
                .alias(SUM_ALIAS),
            col(OUTCOME_COLUMN).count().alias(COUNT_ALIAS),
        ])
        .collect()?;

    let keys = grouped.column(column)?;
    let sums = grouped.column(SUM_ALIAS)?;
    let counts = grouped.column(COUNT_ALIAS)?;

    let mut bars = Vec::with_capacity(grouped.height());
    for idx in 0..grouped.height() {
        let Some(label) = display_value(keys.get(idx)?) else {
            continue;
        };
        let count = any_to_f64(counts.get(idx)?).unwrap_or(0.0);
        if count == 0.0 {
            continue;
        }
        let sum = any_to_f64(sums.get(idx)?).unwrap_or(0.0);
        bars.push(Bar {
            label,
            value: sum / count,
        });
    }
    bars.sort_by(|a, b| compare_labels(&a.label, &b.label));

    Ok(bars)
}
