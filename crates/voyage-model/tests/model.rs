//! Tests for voyage-model types.

use std::collections::HashSet;

use voyage_model::{
    Axis, AxisType, Bar, ChartData, ChartKind, ChartSpec, Element, OutputId, Page, PageView,
    Selector, WidgetId,
};

#[test]
fn navigable_pages_have_unique_paths() {
    let paths: HashSet<_> = Page::navigable().iter().filter_map(Page::path).collect();
    assert_eq!(paths.len(), Page::navigable().len());
    assert_eq!(Page::NotFound.path(), None);
    assert!(!Page::navigable().contains(&Page::NotFound));
}

#[test]
fn category_axis_keeps_field_as_title() {
    let axis = Axis::category("Transported");
    assert_eq!(axis.title, "Transported");
    assert_eq!(axis.axis_type, AxisType::Category);

    let axis = Axis::linear("Transported").with_title("Average Transported");
    assert_eq!(axis.field, "Transported");
    assert_eq!(axis.title, "Average Transported");
}

#[test]
fn chart_spec_serializes() {
    let spec = ChartSpec::new(
        ChartKind::Bar,
        Axis::linear("VIP"),
        Axis::linear("Transported"),
        ChartData::Bars {
            bars: vec![Bar {
                label: "False".to_string(),
                value: 0.5,
            }],
        },
    )
    .with_marker_color("blue");
    let json = serde_json::to_value(&spec).expect("serialize spec");
    assert_eq!(json["kind"], "bar");
    assert_eq!(json["marker_color"], "blue");
    assert_eq!(json["data"]["shape"], "bars");
    let round: ChartSpec = serde_json::from_value(json).expect("deserialize spec");
    assert_eq!(round, spec);
}

#[test]
fn page_view_reports_mounted_outputs() {
    let view = PageView {
        page: Page::Distribution,
        elements: vec![
            Element::Heading {
                level: 1,
                text: "Distribution Analysis".to_string(),
            },
            Element::Selector(Selector {
                id: WidgetId::DistributionColumn,
                options: vec!["Age".to_string()],
                default: Some("Age".to_string()),
            }),
            Element::Graph {
                id: OutputId::DistributionPlot,
            },
        ],
    };
    assert!(view.has_widget(WidgetId::DistributionColumn));
    assert!(!view.has_widget(WidgetId::Category));
    assert!(view.has_output(OutputId::DistributionPlot));
    assert!(view.has_output(OutputId::PageContent));
    assert!(!view.has_output(OutputId::OutcomeGraph));
    assert!(view.table().is_none());
}
