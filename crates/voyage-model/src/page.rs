//! Navigable page descriptors.

use serde::{Deserialize, Serialize};

/// Resolved identity of a navigable page.
///
/// Derived fresh from the current path on every navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Landing page
    Home,
    /// Narrative description of the dataset and its variables
    Overview,
    /// Paginated raw table
    DatasetView,
    /// Univariate histogram with a column selector
    Distribution,
    /// Scatter plot with x/y selectors
    Relationship,
    /// Outcome mean per category
    Categorical,
    /// Stacked outcome counts by home planet
    Outcome,
    /// Any path outside the route table
    NotFound,
}

impl Page {
    /// Pages reachable from the navigation bar, in display order.
    pub const fn navigable() -> &'static [Page] {
        &[
            Self::Home,
            Self::Overview,
            Self::DatasetView,
            Self::Distribution,
            Self::Relationship,
            Self::Categorical,
            Self::Outcome,
        ]
    }

    /// The route path for this page. `NotFound` has none.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::Overview => Some("/dataset-overview"),
            Self::DatasetView => Some("/dataset"),
            Self::Distribution => Some("/distribution"),
            Self::Relationship => Some("/relationship"),
            Self::Categorical => Some("/categorical"),
            Self::Outcome => Some("/outcome"),
            Self::NotFound => None,
        }
    }

    /// Navigation bar label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Overview => "Dataset Overview",
            Self::DatasetView => "Dataset",
            Self::Distribution => "Distribution",
            Self::Relationship => "Relationship",
            Self::Categorical => "Categorical Analysis",
            Self::Outcome => "Outcome Analysis",
            Self::NotFound => "Not Found",
        }
    }
}
