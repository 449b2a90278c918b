//! Integration tests for settings loading.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use voyage_cli::config::{DEFAULT_DATASET, Settings, SettingsError};
use voyage_cli::logging::{LogFormat, LogLevel};

fn settings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn reads_dataset_and_output_sections() {
    let file = settings_file("[dataset]\npath = \"data/train.csv\"\n\n[output]\npretty = true\n");
    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.dataset.path, Some(PathBuf::from("data/train.csv")));
    assert!(settings.output.pretty);
}

#[test]
fn missing_sections_take_defaults() {
    let file = settings_file("[output]\npretty = true\n");
    let settings = Settings::load_from(file.path()).unwrap();
    assert_eq!(settings.dataset.path, None);
    assert_eq!(settings.logging.level, None);
    assert_eq!(settings.dataset_path(None), PathBuf::from(DEFAULT_DATASET));
}

#[test]
fn unparsable_file_is_a_parse_error() {
    let file = settings_file("[dataset\npath = ");
    let error = Settings::load_from(file.path()).unwrap_err();
    assert!(matches!(error, SettingsError::Parse { .. }), "{error}");
    assert!(!error.is_missing());
}

#[test]
fn missing_file_is_reported_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let error = Settings::load_from(&dir.path().join("settings.toml")).unwrap_err();
    assert!(matches!(error, SettingsError::NotFound { .. }), "{error}");
    assert!(error.is_missing());
}

#[test]
fn reads_logging_section() {
    let file = settings_file("[logging]\nlevel = \"debug\"\nformat = \"json\"\n");
    let settings = Settings::load_from(file.path()).unwrap();
    assert_eq!(settings.logging.level, Some(LogLevel::Debug));
    assert_eq!(settings.logging.format, Some(LogFormat::Json));
}

#[test]
fn unknown_log_level_is_rejected() {
    let file = settings_file("[logging]\nlevel = \"loud\"\n");
    assert!(matches!(
        Settings::load_from(file.path()),
        Err(SettingsError::Parse { .. })
    ));
}

#[test]
fn command_line_dataset_wins() {
    let file = settings_file("[dataset]\npath = \"from-settings.csv\"\n");
    let settings = Settings::load_from(file.path()).unwrap();
    assert_eq!(
        settings.dataset_path(Some(Path::new("from-cli.csv"))),
        PathBuf::from("from-cli.csv")
    );
    assert_eq!(settings.dataset_path(None), PathBuf::from("from-settings.csv"));
}
