//! Error types for dataset access.

use thiserror::Error;

/// Errors raised while reading values out of a [`crate::Dataset`].
#[derive(Debug, Error)]
pub enum ModelError {
    /// Column not found in the dataset.
    #[error("column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ModelError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for dataset access.
pub type Result<T> = std::result::Result<T, ModelError>;
