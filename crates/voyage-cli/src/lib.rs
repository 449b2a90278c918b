//! CLI library components for the voyage dashboard host.

pub mod config;
pub mod logging;
pub mod render;
pub mod script;
