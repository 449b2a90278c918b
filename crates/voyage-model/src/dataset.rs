//! The immutable passenger table.

use std::sync::Arc;

use polars::prelude::{Column, DataFrame, DataType};

use crate::error::{ModelError, Result};
use crate::values::{any_to_f64, display_value};

/// Read-only view over the loaded passenger table.
///
/// The frame is loaded once and shared between sessions. There is no mutable
/// access: every transform works on values copied out of the frame.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: Arc<DataFrame>,
}

impl Dataset {
    /// Wrap a loaded frame.
    pub fn new(frame: DataFrame) -> Self {
        Self {
            frame: Arc::new(frame),
        }
    }

    /// Borrow the underlying frame.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Column names in file order.
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Returns true if the dataset has a column with exactly this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.frame.column(name).is_ok()
    }

    /// Data type of a column, if present.
    pub fn column_type(&self, name: &str) -> Option<DataType> {
        self.frame.column(name).ok().map(|c| c.dtype().clone())
    }

    /// Returns true if the column holds integer or floating-point values.
    pub fn is_numeric(&self, name: &str) -> bool {
        self.column_type(name).is_some_and(|dtype| is_numeric_type(&dtype))
    }

    /// Numeric column names in file order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.frame
            .get_columns()
            .iter()
            .filter(|c| is_numeric_type(c.dtype()))
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Values of a column coerced to f64; nulls and unparsable values are None.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let column = self.column(name)?;
        let mut values = Vec::with_capacity(column.len());
        for idx in 0..column.len() {
            values.push(any_to_f64(column.get(idx)?));
        }
        Ok(values)
    }

    /// Values of a column as display strings; nulls are None.
    pub fn display_values(&self, name: &str) -> Result<Vec<Option<String>>> {
        let column = self.column(name)?;
        let mut values = Vec::with_capacity(column.len());
        for idx in 0..column.len() {
            values.push(display_value(column.get(idx)?));
        }
        Ok(values)
    }

    fn column(&self, name: &str) -> Result<&Column> {
        self.frame
            .column(name)
            .map_err(|_| ModelError::ColumnNotFound {
                column: name.to_string(),
            })
    }
}

/// Returns true for integer and floating-point dtypes.
pub fn is_numeric_type(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
