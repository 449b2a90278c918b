use voyage_model::{Axis, ChartData, ChartKind, ChartSpec, Dataset, Point, Recompute, WidgetId};

use super::{require_column, suppressed};
use crate::error::Result;

/// Scatter of two columns over rows where both values are present.
///
/// Suppressed while either axis is unset, so a cleared dropdown keeps the
/// last plot on screen.
pub fn relationship(
    dataset: &Dataset,
    x: Option<&str>,
    y: Option<&str>,
) -> Result<Recompute<ChartSpec>> {
    let x = match require_column(dataset, WidgetId::RelationshipX, x) {
        Ok(column) => column,
        Err(reason) => return suppressed(reason),
    };
    let y = match require_column(dataset, WidgetId::RelationshipY, y) {
        Ok(column) => column,
        Err(reason) => return suppressed(reason),
    };

    let xs = dataset.numeric_values(x)?;
    let ys = dataset.numeric_values(y)?;
    let points = xs
        .into_iter()
        .zip(ys)
        .filter_map(|pair| match pair {
            (Some(x), Some(y)) => Some(Point { x, y }),
            _ => None,
        })
        .collect();

    let spec = ChartSpec::new(
        ChartKind::Scatter,
        Axis::linear(x),
        Axis::linear(y),
        ChartData::Points { points },
    )
    .with_title(format!("Relationship between {x} and {y}"));

    Ok(Recompute::Recomputed(spec))
}
