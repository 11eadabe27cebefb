//! Heading extraction and table-of-contents insertion for mdtoc.
//!
//! This crate holds the pure document transforms used by the `mdtoc` binary:
//! - Heading extraction from lines that start with `#`
//! - Anchor derivation for TOC links
//! - TOC block rendering with configurable header and indentation
//! - One-shot insertion of the TOC after the first top-level heading
//! - Line-ending normalization so rewritten files use `\n` throughout

#![warn(missing_docs)]

mod anchor;
mod error;
mod heading;
mod insert;
mod newline;
mod process;
mod toc;

pub use anchor::anchor_for;
pub use error::DocumentError;
pub use heading::{Heading, extract_headings};
pub use insert::{Insertion, insert_toc, insertion_point};
pub use newline::normalize_newlines;
pub use process::{InsertOutcome, WriteMode, process_file};
pub use toc::{DEFAULT_HEADER, DEFAULT_INDENT, TocStyle, render_toc};
