//! View Builder: the static widget tree of each page.

use voyage_model::schema::{
    CATEGORICAL_COLUMNS, DEFAULT_CATEGORY, DEFAULT_DISTRIBUTION_COLUMN, DEFAULT_RELATIONSHIP_X,
    DEFAULT_RELATIONSHIP_Y, is_excluded,
};
use voyage_model::{Dataset, Element, OutputId, Page, PageView, Selector, WidgetId};

use crate::content;
use crate::error::Result;
use crate::table::build_table;

/// Build the widget tree for `page`.
///
/// Selector option lists are derived from the dataset schema at build time.
/// Only the dataset page can fail, while rendering its table.
pub fn build(page: Page, dataset: &Dataset) -> Result<PageView> {
    let elements = match page {
        Page::Home => vec![
            heading(1, content::HOME_TITLE),
            paragraph(content::HOME_WELCOME),
        ],
        Page::Overview => overview(),
        Page::DatasetView => vec![
            heading(1, content::DATASET_TITLE),
            Element::Table(build_table(dataset)?),
        ],
        Page::Distribution => vec![
            heading(1, content::DISTRIBUTION_TITLE),
            Element::Selector(selector(
                WidgetId::DistributionColumn,
                distribution_options(dataset),
                DEFAULT_DISTRIBUTION_COLUMN,
            )),
            Element::Graph {
                id: OutputId::DistributionPlot,
            },
        ],
        Page::Relationship => {
            let options = relationship_options(dataset);
            vec![
                heading(1, content::RELATIONSHIP_TITLE),
                Element::Selector(selector(
                    WidgetId::RelationshipX,
                    options.clone(),
                    DEFAULT_RELATIONSHIP_X,
                )),
                Element::Selector(selector(
                    WidgetId::RelationshipY,
                    options,
                    DEFAULT_RELATIONSHIP_Y,
                )),
                Element::Graph {
                    id: OutputId::RelationshipGraph,
                },
            ]
        }
        Page::Categorical => vec![
            heading(1, content::CATEGORICAL_TITLE),
            Element::Selector(selector(
                WidgetId::Category,
                categorical_options(),
                DEFAULT_CATEGORY,
            )),
            Element::Graph {
                id: OutputId::CategoricalGraph,
            },
        ],
        Page::Outcome => vec![
            heading(1, content::OUTCOME_TITLE),
            Element::Graph {
                id: OutputId::OutcomeGraph,
            },
        ],
        Page::NotFound => vec![Element::Notice {
            text: content::NOT_FOUND.to_string(),
        }],
    };

    Ok(PageView { page, elements })
}

/// Numeric columns, in file order.
pub fn distribution_options(dataset: &Dataset) -> Vec<String> {
    dataset.numeric_columns()
}

/// Numeric columns minus identifier, cabin, and name.
pub fn relationship_options(dataset: &Dataset) -> Vec<String> {
    dataset
        .numeric_columns()
        .into_iter()
        .filter(|name| !is_excluded(name))
        .collect()
}

/// The curated categorical columns. Fixed, not schema-derived.
pub fn categorical_options() -> Vec<String> {
    CATEGORICAL_COLUMNS.iter().map(|c| (*c).to_string()).collect()
}

/// Initial selection: the preferred column when offered, else the first
/// option, else nothing.
pub fn default_selection(options: &[String], preferred: &str) -> Option<String> {
    options
        .iter()
        .find(|option| option.as_str() == preferred)
        .or_else(|| options.first())
        .cloned()
}

fn selector(id: WidgetId, options: Vec<String>, preferred: &str) -> Selector {
    let default = default_selection(&options, preferred);
    Selector {
        id,
        options,
        default,
    }
}

fn overview() -> Vec<Element> {
    let mut elements = vec![heading(2, content::OVERVIEW_TITLE)];
    elements.extend(content::OVERVIEW_INTRO.iter().map(|text| paragraph(text)));
    elements.push(heading(3, content::OVERVIEW_VARIABLES_TITLE));
    elements.push(Element::List {
        items: content::OVERVIEW_VARIABLES
            .iter()
            .map(|item| (*item).to_string())
            .collect(),
    });
    elements.push(paragraph(content::OVERVIEW_OUTRO));
    elements
}

fn heading(level: u8, text: &str) -> Element {
    Element::Heading {
        level,
        text: text.to_string(),
    }
}

fn paragraph(text: &str) -> Element {
    Element::Paragraph {
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn dataset() -> Dataset {
        let frame = df! {
            "PassengerId" => &[1i64, 2],
            "HomePlanet" => &["Earth", "Mars"],
            "Age" => &[20.0, 30.0],
            "FoodCourt" => &[0.0, 12.0],
            "Name" => &["A", "B"],
            "Transported" => &[1i64, 0],
        }
        .unwrap();
        Dataset::new(frame)
    }

    #[test]
    fn default_prefers_named_column() {
        let options = vec!["Spa".to_string(), "Age".to_string()];
        assert_eq!(default_selection(&options, "Age").as_deref(), Some("Age"));
    }

    #[test]
    fn default_falls_back_to_first_option() {
        let options = vec!["Spa".to_string(), "VRDeck".to_string()];
        assert_eq!(default_selection(&options, "Age").as_deref(), Some("Spa"));
        assert_eq!(default_selection(&[], "Age"), None);
    }

    #[test]
    fn distribution_offers_every_numeric_column() {
        // A numeric identifier still shows up here; only scatter axes exclude it.
        assert_eq!(
            distribution_options(&dataset()),
            vec!["PassengerId", "Age", "FoodCourt", "Transported"]
        );
        assert_eq!(
            relationship_options(&dataset()),
            vec!["Age", "FoodCourt", "Transported"]
        );
    }

    #[test]
    fn relationship_page_has_two_selectors() {
        let view = build(Page::Relationship, &dataset()).unwrap();
        let selectors: Vec<_> = view.selectors().collect();
        assert_eq!(selectors.len(), 2);
        assert_eq!(selectors[0].default.as_deref(), Some("Age"));
        assert_eq!(selectors[1].default.as_deref(), Some("FoodCourt"));
        assert!(view.has_output(OutputId::RelationshipGraph));
    }

    #[test]
    fn categorical_options_are_curated() {
        let view = build(Page::Categorical, &dataset()).unwrap();
        let selector = view.selectors().next().unwrap();
        assert_eq!(
            selector.options,
            vec!["HomePlanet", "CryoSleep", "Destination", "VIP"]
        );
        assert_eq!(selector.default.as_deref(), Some("HomePlanet"));
    }

    #[test]
    fn not_found_has_no_widgets() {
        let view = build(Page::NotFound, &dataset()).unwrap();
        assert_eq!(view.selectors().count(), 0);
        assert_eq!(view.graphs().count(), 0);
        assert_eq!(
            view.elements,
            vec![Element::Notice {
                text: "404 Page Not Found".to_string()
            }]
        );
    }

    #[test]
    fn dataset_page_carries_table() {
        let view = build(Page::DatasetView, &dataset()).unwrap();
        let table = view.table().unwrap();
        assert_eq!(
            table.columns,
            vec!["HomePlanet", "Age", "FoodCourt", "Transported"]
        );
        assert_eq!(table.total_rows(), 2);
    }

    #[test]
    fn home_page_greets() {
        let view = build(Page::Home, &dataset()).unwrap();
        assert_eq!(
            view.elements,
            vec![
                Element::Heading {
                    level: 1,
                    text: "Home Page".to_string()
                },
                Element::Paragraph {
                    text: "Welcome to the multi-page Dash app exploration.".to_string()
                },
            ]
        );
    }
}
