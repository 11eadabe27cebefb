//! Configuration system for mdtoc.
//!
//! mdtoc reads an optional `.mdtoc.toml`. The nearest file found walking up from
//! the starting directory is used, and its directory becomes the sweep root.
//! Without a config file every setting takes its default, which inserts a
//! `## Table of Contents` block into each `Day_*/*.md` file under the starting
//! directory.

#![warn(missing_docs)]

mod discovery;
mod error;
mod parse;
mod patterns;
mod templates;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, find_config_file};
pub use error::ConfigError;
use mdtoc_document::{DEFAULT_HEADER, DEFAULT_INDENT, TocStyle};
pub use parse::{
    RawConfig, RawSweepSettings, RawTocSettings, parse_config, parse_config_file,
};
pub use patterns::CompiledPatterns;
use serde::Serialize;
pub use templates::config_template;
use tracing::debug;

/// Default include pattern for the sweep.
pub const DEFAULT_INCLUDE: &str = "Day_*/*.md";

/// Fully resolved configuration for one mdtoc invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// TOC rendering settings.
    pub toc: TocSettings,
    /// Which files the sweep touches.
    pub sweep: SweepSettings,
    /// The config file these settings came from, if any.
    pub config_file: Option<PathBuf>,
    /// Directory the sweep patterns are relative to.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toc: TocSettings::default(),
            sweep: SweepSettings::default(),
            config_file: None,
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Loads configuration for a sweep starting at `start`.
    ///
    /// Uses the nearest `.mdtoc.toml` at or above `start`; its directory becomes
    /// the sweep root. Returns defaults rooted at `start` when no file is found.
    pub fn load(start: &Path) -> Result<Self, ConfigError> {
        match find_config_file(start) {
            Some(path) => Self::load_file(&path),
            None => {
                debug!(start = %start.display(), "no config file found, using defaults");
                Ok(Self::rooted_at(start))
            }
        }
    }

    /// Default settings with no config file, sweeping `root`.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            ..Self::default()
        }
    }

    /// Loads configuration from a specific file, rooted at its directory.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config file");
        let raw = parse_config_file(path)?;
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_raw(raw, Some(path.to_path_buf()), root)
    }

    /// Applies defaults to a raw configuration and validates the result.
    pub fn from_raw(
        raw: RawConfig,
        config_file: Option<PathBuf>,
        root: PathBuf,
    ) -> Result<Self, ConfigError> {
        let raw_toc = raw.toc.unwrap_or_default();
        let raw_sweep = raw.sweep.unwrap_or_default();
        let defaults = Self::default();

        let toc = TocSettings {
            header: raw_toc.header.unwrap_or(defaults.toc.header),
            indent: raw_toc.indent.unwrap_or(defaults.toc.indent),
        };
        toc.validate()?;

        let sweep = SweepSettings {
            include: raw_sweep.include.unwrap_or(defaults.sweep.include),
            exclude: raw_sweep.exclude.unwrap_or(defaults.sweep.exclude),
        };

        Ok(Self {
            toc,
            sweep,
            config_file,
            root,
        })
    }

    /// Returns the TOC rendering style for these settings.
    pub fn toc_style(&self) -> TocStyle {
        TocStyle {
            header: self.toc.header.clone(),
            indent: self.toc.indent,
        }
    }

    /// Compiles the sweep's include/exclude patterns.
    pub fn compile_patterns(&self) -> Result<CompiledPatterns, ConfigError> {
        CompiledPatterns::compile(&self.sweep)
    }

    /// Serializes the effective settings in `.mdtoc.toml` format.
    pub fn settings_to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&SerializableSettings {
            toc: &self.toc,
            sweep: &self.sweep,
        })
    }
}

/// Settings controlling how the TOC block is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocSettings {
    /// Header line, also used to detect an existing TOC.
    pub header: String,
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for TocSettings {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl TocSettings {
    /// Rejects values that would produce a broken or undetectable TOC.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.indent == 0 {
            return Err(ConfigError::InvalidSetting {
                key: "toc.indent",
                message: "must be at least 1".to_string(),
            });
        }
        if self.header.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                key: "toc.header",
                message: "must not be empty".to_string(),
            });
        }
        if self.header.contains('\n') {
            return Err(ConfigError::InvalidSetting {
                key: "toc.header",
                message: "must be a single line".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings selecting the files a sweep processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepSettings {
    /// Root-relative glob patterns of files to process.
    pub include: Vec<String>,
    /// Root-relative glob patterns of files to skip.
    pub exclude: Vec<String>,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            include: vec![DEFAULT_INCLUDE.to_string()],
            exclude: Vec::new(),
        }
    }
}

/// Borrowed view of the settings for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// TOC section.
    toc: &'a TocSettings,
    /// Sweep section.
    sweep: &'a SweepSettings,
}
