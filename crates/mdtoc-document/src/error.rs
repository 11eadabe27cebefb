//! Error types for document processing.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading or rewriting a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write a file back.
    #[error("failed to write file {path}: {source}")]
    WriteFile {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
