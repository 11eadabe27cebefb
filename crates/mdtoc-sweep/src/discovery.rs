//! File discovery for a sweep.
//!
//! Walks the sweep root and returns the files selected by the compiled
//! patterns. Symlinks are followed. Hidden entries are skipped, and so are
//! directories no include pattern can reach.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use mdtoc_config::CompiledPatterns;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::SweepError;

/// Discovers all files under `root` that the patterns select.
///
/// Patterns are matched against paths relative to `root`. Returned paths are
/// joined onto `root` and sorted. A root that cannot be read is an error;
/// unreadable entries below it (permission denied, dangling links, link
/// loops) are logged and skipped.
pub fn discover_files(
    root: &Path,
    patterns: &CompiledPatterns,
) -> Result<Vec<PathBuf>, SweepError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || should_descend(root, e, patterns));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(SweepError::walk(root, e)),
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(rel_path) = entry.path().strip_prefix(root) else {
            continue;
        };

        if patterns.matches(rel_path) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Decides whether a non-root entry is visited.
///
/// Files are always visited (and matched later); directories only when an
/// include pattern can reach inside them.
fn should_descend(root: &Path, entry: &DirEntry, patterns: &CompiledPatterns) -> bool {
    if is_hidden(entry.file_name()) {
        return false;
    }
    if !entry.file_type().is_dir() {
        return true;
    }
    entry
        .path()
        .strip_prefix(root)
        .is_ok_and(|rel| patterns.may_contain(rel))
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
