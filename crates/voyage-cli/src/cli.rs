//! CLI argument definitions for the voyage dashboard host.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use voyage_cli::logging::{LogFormat, LogLevel};

#[derive(Parser)]
#[command(
    name = "voyage",
    version,
    about = "Spaceship passenger dashboard - routes, views, and charts from one CSV",
    long_about = "Explore the spaceship passenger dataset.\n\n\
                  Resolves dashboard routes, renders page widget trees and chart\n\
                  specifications as JSON, and replays interaction scripts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Passenger CSV file (overrides the settings file).
    #[arg(long = "dataset", value_name = "PATH", global = true)]
    pub dataset: Option<PathBuf>,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q and the settings file).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Log output format (default: settings file, else pretty).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the navigation bar routes.
    Routes,

    /// Navigate a fresh session to PATH and print every cell update.
    Page(PageArgs),

    /// Evaluate one chart rule directly.
    #[command(subcommand)]
    Chart(ChartCommand),

    /// Print one page of the dataset table.
    Table(TableArgs),

    /// Replay an interaction script, one JSON line per event.
    Session(SessionArgs),
}

#[derive(Args)]
pub struct PageArgs {
    /// Navigation path, e.g. /distribution.
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Subcommand)]
pub enum ChartCommand {
    /// Histogram of one numeric column.
    Distribution {
        /// Column to plot (default: the page's default selection).
        #[arg(long)]
        column: Option<String>,
    },

    /// Scatter of two numeric columns.
    Relationship {
        /// X axis column (default: the page's default selection).
        #[arg(long)]
        x: Option<String>,
        /// Y axis column (default: the page's default selection).
        #[arg(long)]
        y: Option<String>,
    },

    /// Mean outcome per category.
    Categorical {
        /// Categorical column (default: the page's default selection).
        #[arg(long)]
        column: Option<String>,
    },

    /// Stacked outcome counts by home planet.
    Outcome {
        /// Current path; the chart is suppressed anywhere but /outcome.
        #[arg(long, default_value = "/outcome")]
        path: String,
    },
}

#[derive(Args)]
pub struct TableArgs {
    /// One-based page number.
    #[arg(long = "page", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

#[derive(Args)]
pub struct SessionArgs {
    /// Script file (default: stdin).
    #[arg(long = "script", value_name = "FILE")]
    pub script: Option<PathBuf>,
}
