//! Include/exclude pattern compilation and matching.
//!
//! Patterns are matched against paths relative to the sweep root. `*` never
//! crosses a path separator, so `Day_*/*.md` only matches files directly inside
//! a `Day_*` directory.
//!
//! Include patterns also yield directory prefixes, so a walk can prune
//! directories that no include pattern could reach.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};

use crate::{ConfigError, SweepSettings};

/// Compiled glob patterns for efficient file matching.
#[derive(Debug)]
pub struct CompiledPatterns {
    /// Compiled include patterns.
    include: GlobSet,
    /// Compiled exclude patterns.
    exclude: GlobSet,
    /// Directory prefixes of each include pattern.
    dirs: Vec<DirPrefix>,
}

/// The directories one include pattern can descend through.
#[derive(Debug)]
struct DirPrefix {
    /// Matchers for the first 1, 2, ... components of the pattern.
    levels: Vec<GlobMatcher>,
    /// Component index from which any depth may match (a `**` component).
    open_at: Option<usize>,
}

impl DirPrefix {
    /// Splits a pattern into per-depth directory matchers.
    fn compile(pattern: &str) -> Result<Self, ConfigError> {
        // Alternation can hide separators; do not prune such patterns
        if pattern.contains('{') {
            return Ok(Self {
                levels: Vec::new(),
                open_at: Some(0),
            });
        }

        let parts: Vec<&str> = pattern.split('/').collect();
        let open_at = parts.iter().position(|part| part.contains("**"));
        let dir_parts = parts.len().saturating_sub(1);
        let depth = open_at.map_or(dir_parts, |open| open.min(dir_parts));

        let levels = (1..=depth)
            .map(|n| compile_glob(&parts[..n].join("/")).map(|g| g.compile_matcher()))
            .collect::<Result<_, _>>()?;
        Ok(Self { levels, open_at })
    }

    /// Checks if a root-relative directory may contain matching files.
    fn admits(&self, dir: &Path) -> bool {
        let depth = dir.components().count();
        if depth == 0 {
            return true;
        }
        match self.open_at {
            Some(0) => true,
            Some(open) if depth > open => {
                let prefix: PathBuf = dir.components().take(open).collect();
                self.levels[open - 1].is_match(prefix)
            }
            _ => self
                .levels
                .get(depth - 1)
                .is_some_and(|level| level.is_match(dir)),
        }
    }
}

impl CompiledPatterns {
    /// Compiles the sweep's include/exclude patterns.
    pub fn compile(settings: &SweepSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            include: build_set(&settings.include, "include")?,
            exclude: build_set(&settings.exclude, "exclude")?,
            dirs: settings
                .include
                .iter()
                .map(|pattern| DirPrefix::compile(pattern))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Checks if a root-relative directory could hold a file an include
    /// pattern selects.
    ///
    /// For `Day_*/*.md` only `Day_*` directories directly under the root
    /// qualify. A `**` component admits every directory below its prefix.
    pub fn may_contain(&self, dir: &Path) -> bool {
        self.dirs.iter().any(|prefix| prefix.admits(dir))
    }

    /// Checks if a root-relative path should be processed.
    ///
    /// A file matches if it matches at least one include pattern and no
    /// exclude pattern.
    pub fn matches(&self, path: &Path) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }
}

/// Builds a glob set from a list of patterns.
fn build_set(patterns: &[String], kind: &str) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern)?);
    }
    builder.build().map_err(|e| ConfigError::InvalidPattern {
        pattern: format!("<combined {kind} patterns>"),
        source: e,
    })
}

/// Compiles a single glob pattern.
fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })
}
