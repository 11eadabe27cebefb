//! Error types for the mdtoc-sweep crate.

use std::{
    io,
    path::{Path, PathBuf},
};

use mdtoc_config::ConfigError;
use mdtoc_document::DocumentError;
use thiserror::Error;

/// Errors that stop a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The sweep root could not be walked.
    #[error("failed to walk {path}: {source}")]
    Walk {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A matched file could not be processed.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The sweep patterns could not be compiled.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SweepError {
    /// Creates a `Walk` error from a walkdir error.
    pub(crate) fn walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
        Self::Walk { path, source }
    }
}
