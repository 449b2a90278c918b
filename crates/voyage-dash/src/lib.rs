//! Routing, view building, and the reactive recompute engine.
//!
//! - [`router`]: path to page resolution and the navigation bar
//! - [`view`]: static widget tree per page, selector options and defaults
//! - [`table`]: the paginated dataset table
//! - [`rules`]: the five recompute rules
//! - [`graph`]: the cell table binding rules to inputs and outputs
//! - [`session`]: per-session dispatcher driving the cells from events
//!
//! Rendering is left to the host. Everything here produces plain data
//! ([`voyage_model::PageView`], [`voyage_model::ChartSpec`]).

pub mod content;
pub mod error;
pub mod graph;
pub mod router;
pub mod rules;
pub mod session;
pub mod table;
pub mod view;

pub use error::{DashError, Result};
pub use graph::{Cell, InputId, Inputs, Rendered, cell, cells};
pub use router::{NavLink, nav_links, resolve};
pub use session::{CellUpdate, Event, Session};
pub use view::build;
