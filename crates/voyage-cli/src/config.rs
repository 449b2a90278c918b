//! User settings persisted as TOML.
//!
//! Stored in the platform config directory unless `--config` names a file:
//! - Linux: ~/.config/voyage/settings.toml
//! - macOS: ~/Library/Application Support/org.voyage.voyage/settings.toml
//! - Windows: %APPDATA%/voyage/voyage/config/settings.toml

use std::path::{Path, PathBuf};
use std::{fs, io};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::{LogFormat, LogLevel};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "voyage";
const APP_NAME: &str = "voyage";
const CONFIG_FILENAME: &str = "settings.toml";

/// Dataset used when neither the command line nor the settings name one.
pub const DEFAULT_DATASET: &str = "train.csv";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dataset: DatasetSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    /// Passenger CSV file.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Pretty-print JSON documents. Session lines are always compact.
    pub pretty: bool,
}

/// Logging defaults; command-line flags take precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: Option<LogLevel>,
    pub format: Option<LogFormat>,
}

/// Why settings could not be loaded. Callers fall back to defaults.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no config directory could be determined")]
    NoConfigDir,

    #[error("no settings file at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SettingsError {
    /// Running without a settings file is normal.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NoConfigDir | Self::NotFound { .. })
    }
}

impl Settings {
    /// Load from `explicit` when given, else from the platform config dir.
    ///
    /// Nothing is logged here; settings are read before the subscriber is
    /// installed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&settings_path().ok_or(SettingsError::NoConfigDir)?),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SettingsError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Dataset path: command line, then settings, then [`DEFAULT_DATASET`].
    pub fn dataset_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.dataset.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
    }
}

/// Platform settings file, if a home directory can be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
