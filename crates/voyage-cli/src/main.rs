//! Voyage dashboard CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::{info, warn};
use voyage_cli::config::{LoggingSettings, Settings, SettingsError};
use voyage_cli::logging::{LogConfig, init_logging};

mod cli;
mod commands;

use crate::cli::{Cli, Command};
use crate::commands::{load, run_chart, run_page, run_routes, run_session, run_table};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let loaded = Settings::load(cli.config.as_deref());
    let logging = loaded
        .as_ref()
        .map(|settings| settings.logging)
        .unwrap_or_default();
    if let Err(error) = init_logging(&log_config(&cli, &logging)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = settings_or_default(loaded);
    let exit_code = match run(cli, &settings) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli, settings: &Settings) -> anyhow::Result<()> {
    let pretty = settings.output.pretty;
    let dataset_path = settings.dataset_path(cli.dataset.as_deref());

    match cli.command {
        Command::Routes => {
            run_routes();
            Ok(())
        }
        Command::Page(args) => run_page(load(&dataset_path)?, &args.path, pretty),
        Command::Chart(command) => run_chart(&load(&dataset_path)?, command, pretty),
        Command::Table(args) => run_table(&load(&dataset_path)?, &args),
        Command::Session(args) => run_session(load(&dataset_path)?, &args),
    }
}

/// Flags first, then the `[logging]` settings.
fn log_config(cli: &Cli, settings: &LoggingSettings) -> LogConfig {
    let verbosity = cli
        .verbosity
        .is_present()
        .then(|| cli.verbosity.tracing_level_filter());
    let mut config = LogConfig::resolve(cli.log_level, verbosity, cli.log_format, settings);
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

/// Report how settings loaded, now that logging is up.
fn settings_or_default(loaded: Result<Settings, SettingsError>) -> Settings {
    match loaded {
        Ok(settings) => {
            info!("Loaded settings");
            settings
        }
        Err(error) if error.is_missing() => {
            info!(%error, "Using default settings");
            Settings::default()
        }
        Err(error) => {
            warn!(%error, "Unusable settings file, using defaults");
            Settings::default()
        }
    }
}
