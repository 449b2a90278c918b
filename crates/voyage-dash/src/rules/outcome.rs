use voyage_model::schema::{GROUP_COLUMN, OUTCOME_COLUMN};
use voyage_model::{
    Axis, BarMode, ChartData, ChartKind, ChartSpec, Dataset, Page, Recompute, StackSeries,
    Suppression,
};

use super::{compare_labels, suppressed};
use crate::error::Result;

/// Stacked outcome counts colored by home planet.
///
/// Only recomputes while the outcome page is showing. The outcome is plotted
/// on a category axis, so 0 and 1 are two discrete bars whatever the
/// column's numeric type.
pub fn outcome(dataset: &Dataset, path: &str) -> Result<Recompute<ChartSpec>> {
    if Page::Outcome.path() != Some(path) {
        return suppressed(Suppression::InactivePage);
    }
    for column in [OUTCOME_COLUMN, GROUP_COLUMN] {
        if !dataset.has_column(column) {
            return suppressed(Suppression::UnknownColumn {
                column: column.to_string(),
            });
        }
    }

    let outcomes = dataset.display_values(OUTCOME_COLUMN)?;
    let groups = dataset.display_values(GROUP_COLUMN)?;

    let mut categories: Vec<String> = outcomes.iter().flatten().cloned().collect();
    categories.sort_by(|a, b| compare_labels(a, b));
    categories.dedup();

    // Series keep first-appearance order.
    let mut series: Vec<StackSeries> = Vec::new();
    for (outcome, group) in outcomes.iter().zip(&groups) {
        let (Some(outcome), Some(group)) = (outcome, group) else {
            continue;
        };
        let Some(slot) = categories.iter().position(|c| c == outcome) else {
            continue;
        };
        let idx = match series.iter().position(|s| &s.group == group) {
            Some(idx) => idx,
            None => {
                series.push(StackSeries {
                    group: group.clone(),
                    counts: vec![0; categories.len()],
                });
                series.len() - 1
            }
        };
        series[idx].counts[slot] += 1;
    }

    let spec = ChartSpec::new(
        ChartKind::Histogram,
        Axis::category(OUTCOME_COLUMN),
        Axis::linear("count").with_title("Count"),
        ChartData::Stacked { categories, series },
    )
    .with_title("Transportation Status by Home Planet")
    .with_color_by(GROUP_COLUMN)
    .with_bar_mode(BarMode::Stack);

    Ok(Recompute::Recomputed(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use voyage_model::AxisType;

    fn voyage() -> Dataset {
        let frame = df! {
            "HomePlanet" => &[Some("Europa"), Some("Earth"), Some("Europa"), None, Some("Mars")],
            "Transported" => &[0i64, 1, 1, 0, 1],
        }
        .unwrap();
        Dataset::new(frame)
    }

    #[test]
    fn other_paths_are_suppressed() {
        for path in ["/", "/distribution", "/outcome/", ""] {
            assert_eq!(
                outcome(&voyage(), path).unwrap(),
                Recompute::Suppressed(Suppression::InactivePage)
            );
        }
    }

    #[test]
    fn outcome_axis_is_categorical() {
        let spec = outcome(&voyage(), "/outcome")
            .unwrap()
            .recomputed()
            .unwrap();
        assert_eq!(spec.x.axis_type, AxisType::Category);
        assert_eq!(spec.bar_mode, Some(BarMode::Stack));
        assert_eq!(spec.color_by.as_deref(), Some("HomePlanet"));
        assert_eq!(spec.y.title, "Count");

        let ChartData::Stacked { categories, series } = spec.data else {
            panic!("expected stacked data");
        };
        assert_eq!(categories, vec!["0", "1"]);
        let groups: Vec<_> = series.iter().map(|s| s.group.as_str()).collect();
        assert_eq!(groups, vec!["Europa", "Earth", "Mars"]);
        assert_eq!(series[0].counts, vec![1, 1]);
        assert_eq!(series[1].counts, vec![0, 1]);
        assert_eq!(series[2].counts, vec![0, 1]);
    }

    #[test]
    fn float_outcome_still_gives_two_bars() {
        let frame = df! {
            "HomePlanet" => &["Earth", "Mars"],
            "Transported" => &[0.0, 1.0],
        }
        .unwrap();
        let spec = outcome(&Dataset::new(frame), "/outcome")
            .unwrap()
            .recomputed()
            .unwrap();
        let ChartData::Stacked { categories, .. } = spec.data else {
            panic!("expected stacked data");
        };
        assert_eq!(categories, vec!["0", "1"]);
    }
}
