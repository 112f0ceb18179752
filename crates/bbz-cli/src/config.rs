//! TOML configuration for the transformation pipeline.
//!
//! ```toml
//! [work]
//! relationship_type_id = 10
//! context_role = "target"
//! ```
//!
//! Sections that are left out keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bbz_transform::TransformOptions;
use tracing::debug;

/// Load options from `path`, or the defaults when no path is given.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid TOML for
/// [`TransformOptions`].
pub fn load_options(path: Option<&Path>) -> Result<TransformOptions> {
    let Some(path) = path else {
        return Ok(TransformOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let options = parse_options(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(options)
}

pub fn parse_options(text: &str) -> Result<TransformOptions, toml::de::Error> {
    toml::from_str(text)
}
