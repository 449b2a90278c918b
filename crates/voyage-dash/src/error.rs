//! Error types for recompute rules.

use thiserror::Error;
use voyage_model::ModelError;

/// Failures inside a rule's transform.
///
/// Guards never produce these; they report a
/// [`Suppression`](voyage_model::Suppression) instead.
#[derive(Debug, Error)]
pub enum DashError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for DashError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for rule evaluation.
pub type Result<T> = std::result::Result<T, DashError>;
