//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! The libraries only emit events; this module installs the subscriber.
//!
//! # Log Levels
//!
//! - `error`: fatal startup failures
//! - `warn`: ignored events, failed rules, unreadable settings
//! - `info`: dataset load, navigation
//! - `debug`: every cell evaluation and its outcome

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::LoggingSettings;

/// Crates whose events follow the configured level.
const OWN_CRATES: [&str; 4] = ["voyage_cli", "voyage_dash", "voyage_ingest", "voyage_model"];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter`.
    pub use_env_filter: bool,
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// When set, logs are appended to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Log level named on the command line or in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Level and format for one run.
    ///
    /// The level comes from `--log-level`, then `-v`/`-q`, then the
    /// `[logging]` settings. With none of them `RUST_LOG` applies over the
    /// warn default. The format comes from `--log-format`, then settings.
    pub fn resolve(
        level: Option<LogLevel>,
        verbosity: Option<LevelFilter>,
        format: Option<LogFormat>,
        settings: &LoggingSettings,
    ) -> Self {
        let level_filter = level
            .map(LogLevel::filter)
            .or(verbosity)
            .or_else(|| settings.level.map(LogLevel::filter));
        Self {
            level_filter: level_filter.unwrap_or(LevelFilter::WARN),
            use_env_filter: level_filter.is_none(),
            format: format.or(settings.format).unwrap_or_default(),
            ..Self::default()
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config.level_filter, config.use_env_filter);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_target(config.with_target)
                .with_span_events(fmt::format::FmtSpan::CLOSE);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
    }
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Build the filter: our crates at `level`, everything else at warn.
fn build_env_filter(level: LevelFilter, use_env: bool) -> EnvFilter {
    if use_env && let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(OWN_CRATES.iter().map(|krate| format!("{krate}={level}")));
    EnvFilter::new(directives.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_crates_follow_configured_level() {
        let filter = build_env_filter(LevelFilter::DEBUG, false).to_string();
        for krate in OWN_CRATES {
            assert!(filter.contains(&format!("{krate}=debug")), "{filter}");
        }
    }

    fn logging(level: Option<LogLevel>, format: Option<LogFormat>) -> LoggingSettings {
        LoggingSettings { level, format }
    }

    #[test]
    fn nothing_set_defers_to_rust_log() {
        let config = LogConfig::resolve(None, None, None, &LoggingSettings::default());
        assert!(config.use_env_filter);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn settings_level_applies_without_flags() {
        let settings = logging(Some(LogLevel::Debug), Some(LogFormat::Json));
        let config = LogConfig::resolve(None, None, None, &settings);
        assert!(!config.use_env_filter);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn flags_override_settings() {
        let settings = logging(Some(LogLevel::Debug), Some(LogFormat::Json));

        let config = LogConfig::resolve(None, Some(LevelFilter::ERROR), None, &settings);
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert_eq!(config.format, LogFormat::Json);

        let config = LogConfig::resolve(
            Some(LogLevel::Trace),
            Some(LevelFilter::ERROR),
            Some(LogFormat::Compact),
            &settings,
        );
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn quiet_level_renders_as_off() {
        let filter = build_env_filter(LevelFilter::OFF, false).to_string();
        assert!(filter.contains("voyage_dash=off"), "{filter}");
    }
}
