//! CLI library components for the Edition transformation pipeline.

pub mod config;
pub mod fixtures;
pub mod logging;
pub mod pipeline;
