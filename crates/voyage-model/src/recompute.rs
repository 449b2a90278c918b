//! Outcome of evaluating one cell.

use serde::{Deserialize, Serialize};

use crate::widget::WidgetId;

/// Either a fresh value for the output, or a decision to leave the previously
/// rendered output exactly as it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Recompute<T> {
    Recomputed(T),
    Suppressed(Suppression),
}

impl<T> Recompute<T> {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed(_))
    }

    pub fn recomputed(self) -> Option<T> {
        match self {
            Self::Recomputed(value) => Some(value),
            Self::Suppressed(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Recompute<U> {
        match self {
            Self::Recomputed(value) => Recompute::Recomputed(f(value)),
            Self::Suppressed(reason) => Recompute::Suppressed(reason),
        }
    }
}

/// Why a cell kept its prior output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Suppression {
    /// A required selector is unset.
    MissingSelection { widget: WidgetId },
    /// A selection no longer names a column of the dataset.
    UnknownColumn { column: String },
    /// The cell only renders on a different page.
    InactivePage,
    /// The transform failed; the prior output is kept.
    Failed { message: String },
}

impl std::fmt::Display for Suppression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSelection { widget } => write!(f, "no selection for {widget}"),
            Self::UnknownColumn { column } => write!(f, "unknown column '{column}'"),
            Self::InactivePage => f.write_str("output is not on the current page"),
            Self::Failed { message } => write!(f, "recompute failed: {message}"),
        }
    }
}
