//! Integration tests for dataset loading.

use std::io::Write;
use std::path::{Path, PathBuf};

use polars::prelude::DataType;
use tempfile::NamedTempFile;
use voyage_ingest::{IngestError, load_dataset};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/passengers.csv")
}

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn loads_passenger_fixture() {
    let dataset = load_dataset(&fixture()).expect("load fixture");

    assert_eq!(dataset.height(), 12);
    assert_eq!(dataset.column_names().len(), 14);
    assert_eq!(dataset.column_type("Transported"), Some(DataType::Int64));
    assert_eq!(
        dataset.numeric_columns(),
        vec![
            "Age",
            "RoomService",
            "FoodCourt",
            "ShoppingMall",
            "Spa",
            "VRDeck",
            "Transported"
        ]
    );
}

#[test]
fn outcome_values_are_zero_or_one() {
    let dataset = load_dataset(&fixture()).unwrap();
    let values = dataset.numeric_values("Transported").unwrap();
    let ones = values.iter().filter(|v| **v == Some(1.0)).count();
    let zeros = values.iter().filter(|v| **v == Some(0.0)).count();
    assert_eq!((zeros, ones), (4, 8));
}

#[test]
fn missing_cells_load_as_nulls() {
    let dataset = load_dataset(&fixture()).unwrap();
    let ages = dataset.numeric_values("Age").unwrap();
    assert_eq!(ages.iter().filter(|v| v.is_none()).count(), 1);
    let planets = dataset.display_values("HomePlanet").unwrap();
    assert_eq!(planets[11], None);
}

#[test]
fn missing_file_is_fatal() {
    let result = load_dataset(Path::new("/no/such/train.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn missing_outcome_column_is_fatal() {
    let file = create_temp_csv("PassengerId,Age\n0001_01,39\n");
    let result = load_dataset(file.path());
    match result {
        Err(IngestError::MissingColumn { column, .. }) => assert_eq!(column, "Transported"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn header_only_file_is_fatal() {
    let file = create_temp_csv("PassengerId,Transported\n");
    assert!(load_dataset(file.path()).is_err());
}

#[test]
fn blank_outcome_cell_is_fatal() {
    let file = create_temp_csv("PassengerId,Age,Transported\n0001_01,39,True\n0002_01,24,\n");
    let result = load_dataset(file.path());
    match result {
        Err(IngestError::MissingValues { column, count, .. }) => {
            assert_eq!((column.as_str(), count), ("Transported", 1));
        }
        other => panic!("expected MissingValues, got {other:?}"),
    }
}
