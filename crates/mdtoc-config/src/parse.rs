//! Configuration file parsing.
//!
//! Parses a `.mdtoc.toml` file into a `RawConfig` that keeps every field
//! optional, so defaults can be applied afterwards.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// TOC rendering section.
    pub toc: Option<RawTocSettings>,
    /// Sweep section.
    pub sweep: Option<RawSweepSettings>,
}

/// Raw TOC rendering settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTocSettings {
    /// Header line of the TOC block.
    pub header: Option<String>,
    /// Spaces per nesting level.
    pub indent: Option<usize>,
}

/// Raw sweep settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSweepSettings {
    /// Glob patterns, relative to the sweep root, selecting files to process.
    pub include: Option<Vec<String>>,
    /// Glob patterns excluding files that would otherwise match.
    pub exclude: Option<Vec<String>>,
}

/// Parses a TOML string into a raw configuration.
pub fn parse_config(content: &str) -> Result<RawConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Reads and parses a configuration file.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
