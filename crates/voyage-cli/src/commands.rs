use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use voyage_cli::render::{data_table, page_footer, routes_table};
use voyage_cli::script::parse_script;
use voyage_dash::table::build_table;
use voyage_dash::view::{
    categorical_options, default_selection, distribution_options, relationship_options,
};
use voyage_dash::{Event, Session, nav_links, rules};
use voyage_ingest::load_dataset;
use voyage_model::schema::{
    DEFAULT_CATEGORY, DEFAULT_DISTRIBUTION_COLUMN, DEFAULT_RELATIONSHIP_X, DEFAULT_RELATIONSHIP_Y,
};
use voyage_model::Dataset;

use crate::cli::{ChartCommand, SessionArgs, TableArgs};

pub fn load(path: &Path) -> Result<Dataset> {
    let _span = info_span!("load", path = %path.display()).entered();
    load_dataset(path).with_context(|| format!("load dataset {}", path.display()))
}

pub fn run_routes() {
    println!("{}", routes_table(&nav_links()));
}

pub fn run_page(dataset: Dataset, path: &str, pretty: bool) -> Result<()> {
    let mut session = Session::new(dataset);
    let updates = session.apply(Event::Navigate(path.to_string()));
    print_json(&updates, pretty)
}

pub fn run_chart(dataset: &Dataset, command: ChartCommand, pretty: bool) -> Result<()> {
    let outcome = match command {
        ChartCommand::Distribution { column } => {
            let column = column.or_else(|| {
                default_selection(&distribution_options(dataset), DEFAULT_DISTRIBUTION_COLUMN)
            });
            rules::distribution(dataset, column.as_deref())?
        }
        ChartCommand::Relationship { x, y } => {
            let options = relationship_options(dataset);
            let x = x.or_else(|| default_selection(&options, DEFAULT_RELATIONSHIP_X));
            let y = y.or_else(|| default_selection(&options, DEFAULT_RELATIONSHIP_Y));
            rules::relationship(dataset, x.as_deref(), y.as_deref())?
        }
        ChartCommand::Categorical { column } => {
            let column =
                column.or_else(|| default_selection(&categorical_options(), DEFAULT_CATEGORY));
            rules::categorical(dataset, column.as_deref())?
        }
        ChartCommand::Outcome { path } => rules::outcome(dataset, &path)?,
    };
    print_json(&outcome, pretty)
}

pub fn run_table(dataset: &Dataset, args: &TableArgs) -> Result<()> {
    let view = build_table(dataset)?;
    let page = args.page.saturating_sub(1) as usize;
    println!("{}", data_table(&view, page));
    println!("{}", page_footer(&view, page));
    Ok(())
}

/// Replay a script; each event's updates go out as one JSON line.
pub fn run_session(dataset: Dataset, args: &SessionArgs) -> Result<()> {
    let text = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read script {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read script from stdin")?;
            text
        }
    };
    let events = parse_script(&text)?;
    info!(events = events.len(), "Replaying script");

    let mut session = Session::new(dataset);
    for event in events {
        let updates = session.apply(event);
        println!("{}", serde_json::to_string(&updates)?);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
