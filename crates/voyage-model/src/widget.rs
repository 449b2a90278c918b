//! Declarative widget tree handed to the rendering collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::page::Page;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Interactive selector widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WidgetId {
    #[serde(rename = "dist-dropdown")]
    DistributionColumn,
    #[serde(rename = "x-axis-dropdown")]
    RelationshipX,
    #[serde(rename = "y-axis-dropdown")]
    RelationshipY,
    #[serde(rename = "category-dropdown")]
    Category,
}

impl WidgetId {
    pub const ALL: [WidgetId; 4] = [
        Self::DistributionColumn,
        Self::RelationshipX,
        Self::RelationshipY,
        Self::Category,
    ];

    /// Stable element id used by the renderer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DistributionColumn => "dist-dropdown",
            Self::RelationshipX => "x-axis-dropdown",
            Self::RelationshipY => "y-axis-dropdown",
            Self::Category => "category-dropdown",
        }
    }

    /// Look up a widget by its element id.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == id)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outputs that cells write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OutputId {
    #[serde(rename = "page-content")]
    PageContent,
    #[serde(rename = "dist-plot")]
    DistributionPlot,
    #[serde(rename = "relationship-graph")]
    RelationshipGraph,
    #[serde(rename = "categorical-transported-graph")]
    CategoricalGraph,
    #[serde(rename = "outcome-graph")]
    OutcomeGraph,
}

impl OutputId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PageContent => "page-content",
            Self::DistributionPlot => "dist-plot",
            Self::RelationshipGraph => "relationship-graph",
            Self::CategoricalGraph => "categorical-transported-graph",
            Self::OutcomeGraph => "outcome-graph",
        }
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ELEMENTS
// =============================================================================

/// A dropdown over column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selector {
    pub id: WidgetId,
    pub options: Vec<String>,
    /// Initial selection; None when there are no options.
    pub default: Option<String>,
}

/// Paginated table with windowing done by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub columns: Vec<String>,
    /// Cell text per row, aligned with `columns`. Missing values are empty.
    pub rows: Vec<Vec<String>>,
    pub page_size: usize,
}

impl TableView {
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of pages; an empty table still has one (empty) page.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    /// Rows on the given zero-based page. Out-of-range pages are empty.
    pub fn page(&self, index: usize) -> &[Vec<String>] {
        let start = index.saturating_mul(self.page_size).min(self.rows.len());
        let end = start.saturating_add(self.page_size).min(self.rows.len());
        &self.rows[start..end]
    }
}

/// One node of the static widget tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    List { items: Vec<String> },
    Selector(Selector),
    /// Placeholder filled by a chart cell.
    Graph { id: OutputId },
    Table(TableView),
    Notice { text: String },
}

/// The widget tree of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageView {
    pub page: Page,
    pub elements: Vec<Element>,
}

impl PageView {
    /// Selector widgets on this page, in tree order.
    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.elements.iter().filter_map(|e| match e {
            Element::Selector(selector) => Some(selector),
            _ => None,
        })
    }

    /// Graph placeholders on this page, in tree order.
    pub fn graphs(&self) -> impl Iterator<Item = OutputId> + '_ {
        self.elements.iter().filter_map(|e| match e {
            Element::Graph { id } => Some(*id),
            _ => None,
        })
    }

    pub fn table(&self) -> Option<&TableView> {
        self.elements.iter().find_map(|e| match e {
            Element::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn has_widget(&self, id: WidgetId) -> bool {
        self.selectors().any(|s| s.id == id)
    }

    pub fn has_output(&self, id: OutputId) -> bool {
        id == OutputId::PageContent || self.graphs().any(|g| g == id)
    }
}
