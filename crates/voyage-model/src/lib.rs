//! Domain types for the voyage passenger dashboard.
//!
//! This crate holds the vocabulary shared by the loader, the recompute engine,
//! and the host binary:
//!
//! - [`dataset`]: the immutable passenger table ([`Dataset`])
//! - [`schema`]: fixed column policy (identifier, outcome, curated categories)
//! - [`page`]: navigable page descriptors ([`Page`])
//! - [`widget`]: declarative widget tree handed to the renderer
//! - [`chart`]: renderer-agnostic chart specifications
//! - [`recompute`]: the `Recomputed`/`Suppressed` outcome of a cell evaluation
//! - [`values`]: Polars `AnyValue` conversion helpers

pub mod chart;
pub mod dataset;
pub mod error;
pub mod page;
pub mod recompute;
pub mod schema;
pub mod values;
pub mod widget;

pub use chart::{Axis, AxisType, Bar, BarMode, ChartData, ChartKind, ChartSpec, Point, StackSeries};
pub use dataset::Dataset;
pub use error::{ModelError, Result};
pub use page::Page;
pub use recompute::{Recompute, Suppression};
pub use widget::{Element, OutputId, PageView, Selector, TableView, WidgetId};
