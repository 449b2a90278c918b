//! Dataset Provider: load the passenger table once at startup.

use std::path::Path;

use polars::prelude::{DataFrame, DataType};
use tracing::{debug, info};

use voyage_model::Dataset;
use voyage_model::dataset::is_numeric_type;
use voyage_model::schema::OUTCOME_COLUMN;

use crate::csv::{check_file_size, read_csv_frame, validate_dataframe_shape, validate_encoding};
use crate::error::{IngestError, Result};

/// Load and validate the dataset at `path`.
///
/// Any failure here is fatal for the host: there is no partial mode.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let mut df = read_csv_frame(path)?;
    validate_dataframe_shape(&df, path)?;
    coerce_outcome(&mut df, path)?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded dataset"
    );
    Ok(Dataset::new(df))
}

/// Store the outcome column as 0/1 integers.
///
/// Booleans and floats are cast to Int64; integer columns are left alone.
/// Every passenger must have an outcome.
pub fn coerce_outcome(df: &mut DataFrame, path: &Path) -> Result<()> {
    let column = df
        .column(OUTCOME_COLUMN)
        .map_err(|_| IngestError::MissingColumn {
            column: OUTCOME_COLUMN.to_string(),
            path: path.to_path_buf(),
        })?;

    let missing = column.null_count();
    if missing > 0 {
        return Err(IngestError::MissingValues {
            column: OUTCOME_COLUMN.to_string(),
            count: missing,
            path: path.to_path_buf(),
        });
    }

    let dtype = column.dtype().clone();
    let coerced = match &dtype {
        DataType::Boolean | DataType::Float32 | DataType::Float64 => {
            column.cast(&DataType::Int64)?
        }
        other if is_numeric_type(other) => return Ok(()),
        other => {
            return Err(IngestError::UnsupportedColumnType {
                column: OUTCOME_COLUMN.to_string(),
                dtype: other.to_string(),
                path: path.to_path_buf(),
            });
        }
    };

    debug!(from = %dtype, "Coerced outcome column to Int64");
    df.with_column(coerced)?;
    Ok(())
}
