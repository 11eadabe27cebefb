//! mdtoc: table-of-contents insertion for markdown course notes.
//!
//! Sweeps a directory for lesson files (by default `Day_*/*.md`), builds a
//! table of contents from each file's heading lines, and inserts it after the
//! title exactly once. The `cli` module holds the argument definitions and
//! command implementations behind the `mdtoc` binary.

#![warn(missing_docs)]

pub mod cli;
