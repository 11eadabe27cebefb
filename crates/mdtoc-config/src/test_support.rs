//! Scratch course directories for unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary course tree that `.mdtoc.toml` files can be dropped into.
pub struct TestDir {
    /// Owned temp dir, removed on drop.
    root: TempDir,
}

impl TestDir {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory relative to the root.
    pub fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a `.mdtoc.toml` with default content in the given subdirectory.
    pub fn create_config(&self, rel_path: &str) -> PathBuf {
        self.create_config_with_content(rel_path, "# test config\n")
    }

    /// Writes a `.mdtoc.toml` at the root.
    pub fn create_config_at_root(&self) -> PathBuf {
        self.create_config_with_content("", "# root config\n")
    }

    /// Writes a `.mdtoc.toml` with custom contents in the given subdirectory.
    pub fn create_config_with_content(&self, rel_path: &str, content: &str) -> PathBuf {
        let dir = self.create_dir(rel_path);
        let config = dir.join(CONFIG_FILENAME);
        fs::write(&config, content).unwrap();
        config
    }
}
