//! Configuration file discovery.
//!
//! Walks up the directory tree from a starting point and stops at the first
//! `.mdtoc.toml`. Only the nearest file is used; there is no merging.

use std::path::{Path, PathBuf};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".mdtoc.toml";

/// Finds the nearest configuration file at or above `start`.
///
/// Returns `None` if no `.mdtoc.toml` exists between `start` and the
/// filesystem root.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}
