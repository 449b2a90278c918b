//! Passenger dataset loading.
//!
//! This crate is the Dataset Provider: it reads one CSV file into an
//! immutable [`voyage_model::Dataset`] at process start.
//!
//! # Checks
//!
//! - **File**: exists, under [`MAX_CSV_FILE_SIZE`], not UTF-16
//! - **Shape**: at least one row, no blank column names
//! - **Outcome**: the `Transported` column exists and is stored as 0/1
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use voyage_ingest::load_dataset;
//!
//! let dataset = load_dataset(Path::new("train.csv"))?;
//! println!("{} passengers", dataset.height());
//! ```

mod csv;
mod error;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_csv_frame,
    validate_dataframe_shape, validate_encoding,
};

// === Loading ===
pub use loader::{coerce_outcome, load_dataset};
