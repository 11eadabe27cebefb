//! Directory sweep for mdtoc.
//!
//! Discovers the markdown files selected by the configured patterns under the
//! sweep root and inserts a table of contents into each one, reporting
//! progress through a [`SweepReporter`].

#![warn(missing_docs)]

mod discovery;
mod error;
mod sweep;

pub use discovery::discover_files;
pub use error::SweepError;
pub use sweep::{SilentReporter, SweepReporter, SweepStats, Sweeper};
