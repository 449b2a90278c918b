use voyage_model::{Axis, ChartData, ChartKind, ChartSpec, Dataset, Recompute, WidgetId};

use super::{require_column, suppressed};
use crate::error::Result;

/// Histogram of one column with missing values dropped.
///
/// Values are coerced to f64; anything that does not parse counts as missing.
pub fn distribution(dataset: &Dataset, column: Option<&str>) -> Result<Recompute<ChartSpec>> {
    let column = match require_column(dataset, WidgetId::DistributionColumn, column) {
        Ok(column) => column,
        Err(reason) => return suppressed(reason),
    };

    let values: Vec<f64> = dataset
        .numeric_values(column)?
        .into_iter()
        .flatten()
        .collect();

    let spec = ChartSpec::new(
        ChartKind::Histogram,
        Axis::linear(column),
        Axis::linear("count"),
        ChartData::Values { values },
    )
    .with_autosize(true);

    Ok(Recompute::Recomputed(spec))
}
