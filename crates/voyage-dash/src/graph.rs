//! The cell table: which output depends on which inputs, and how it is
//! recomputed.
//!
//! Five independent nodes with no shared outputs and no cycles. The
//! [`crate::Session`] dispatcher walks this table in order.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, warn};
use voyage_model::{ChartSpec, Dataset, OutputId, PageView, Recompute, Suppression, WidgetId};

use crate::error::Result;
use crate::rules;

/// An upstream input of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputId {
    /// The current navigation path.
    Path,
    /// A selector value.
    Widget(WidgetId),
}

/// Current input values handed to a rule.
#[derive(Debug, Clone, Copy)]
pub struct Inputs<'a> {
    pub path: &'a str,
    pub selections: &'a BTreeMap<WidgetId, Option<String>>,
}

impl Inputs<'_> {
    pub fn selection(&self, widget: WidgetId) -> Option<&str> {
        self.selections.get(&widget).and_then(|v| v.as_deref())
    }
}

/// What a cell writes to its output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "spec", rename_all = "snake_case")]
pub enum Rendered {
    Page(PageView),
    Chart(ChartSpec),
}

impl Rendered {
    pub fn as_chart(&self) -> Option<&ChartSpec> {
        match self {
            Self::Chart(spec) => Some(spec),
            Self::Page(_) => None,
        }
    }

    pub fn as_page(&self) -> Option<&PageView> {
        match self {
            Self::Page(view) => Some(view),
            Self::Chart(_) => None,
        }
    }
}

type RuleFn = fn(&Dataset, &Inputs<'_>) -> Result<Recompute<Rendered>>;

/// An output with its declared inputs and recompute rule.
pub struct Cell {
    pub output: OutputId,
    pub inputs: &'static [InputId],
    rule: RuleFn,
}

impl Cell {
    /// Returns true if any declared input is in `changed`.
    pub fn depends_on(&self, changed: &BTreeSet<InputId>) -> bool {
        self.inputs.iter().any(|input| changed.contains(input))
    }

    /// Run the rule. A transform error keeps the prior output, like a guard.
    pub fn evaluate(&self, dataset: &Dataset, inputs: &Inputs<'_>) -> Recompute<Rendered> {
        match (self.rule)(dataset, inputs) {
            Ok(outcome) => {
                match &outcome {
                    Recompute::Recomputed(_) => debug!(output = %self.output, "Recomputed"),
                    Recompute::Suppressed(reason) => {
                        debug!(output = %self.output, %reason, "Suppressed");
                    }
                }
                outcome
            }
            Err(error) => {
                warn!(output = %self.output, %error, "Recompute failed, keeping prior output");
                Recompute::Suppressed(Suppression::Failed {
                    message: error.to_string(),
                })
            }
        }
    }
}

static CELLS: [Cell; 5] = [
    Cell {
        output: OutputId::PageContent,
        inputs: &[InputId::Path],
        rule: page_content_cell,
    },
    Cell {
        output: OutputId::DistributionPlot,
        inputs: &[InputId::Widget(WidgetId::DistributionColumn)],
        rule: distribution_cell,
    },
    Cell {
        output: OutputId::RelationshipGraph,
        inputs: &[
            InputId::Widget(WidgetId::RelationshipX),
            InputId::Widget(WidgetId::RelationshipY),
        ],
        rule: relationship_cell,
    },
    Cell {
        output: OutputId::CategoricalGraph,
        inputs: &[InputId::Widget(WidgetId::Category)],
        rule: categorical_cell,
    },
    Cell {
        output: OutputId::OutcomeGraph,
        inputs: &[InputId::Path],
        rule: outcome_cell,
    },
];

/// Every cell, page content first.
pub fn cells() -> &'static [Cell] {
    &CELLS
}

/// The cell writing to `output`.
pub fn cell(output: OutputId) -> &'static Cell {
    // Every OutputId has exactly one row in CELLS.
    match output {
        OutputId::PageContent => &CELLS[0],
        OutputId::DistributionPlot => &CELLS[1],
        OutputId::RelationshipGraph => &CELLS[2],
        OutputId::CategoricalGraph => &CELLS[3],
        OutputId::OutcomeGraph => &CELLS[4],
    }
}

fn page_content_cell(dataset: &Dataset, inputs: &Inputs<'_>) -> Result<Recompute<Rendered>> {
    Ok(rules::page_content(dataset, inputs.path)?.map(Rendered::Page))
}

fn distribution_cell(dataset: &Dataset, inputs: &Inputs<'_>) -> Result<Recompute<Rendered>> {
    let column = inputs.selection(WidgetId::DistributionColumn);
    Ok(rules::distribution(dataset, column)?.map(Rendered::Chart))
}

fn relationship_cell(dataset: &Dataset, inputs: &Inputs<'_>) -> Result<Recompute<Rendered>> {
    let x = inputs.selection(WidgetId::RelationshipX);
    let y = inputs.selection(WidgetId::RelationshipY);
    Ok(rules::relationship(dataset, x, y)?.map(Rendered::Chart))
}

fn categorical_cell(dataset: &Dataset, inputs: &Inputs<'_>) -> Result<Recompute<Rendered>> {
    let column = inputs.selection(WidgetId::Category);
    Ok(rules::categorical(dataset, column)?.map(Rendered::Chart))
}

fn outcome_cell(dataset: &Dataset, inputs: &Inputs<'_>) -> Result<Recompute<Rendered>> {
    Ok(rules::outcome(dataset, inputs.path)?.map(Rendered::Chart))
}
