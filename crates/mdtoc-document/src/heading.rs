//! Heading extraction.
//!
//! A heading is any line whose first character is `#`. There is no awareness of
//! fenced code blocks, setext headings or escaped hashes.

use crate::anchor::anchor_for;

/// A heading line extracted from a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading `#` characters (always at least 1).
    pub level: usize,
    /// Heading text with the leading hashes and surrounding whitespace removed.
    pub text: String,
    /// Link anchor derived from `text`.
    pub anchor: String,
}

impl Heading {
    /// Parses a single line, returning `None` unless it starts with `#`.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with('#') {
            return None;
        }

        let level = line.chars().take_while(|&c| c == '#').count();
        let text = line.trim_start_matches('#').trim().to_string();
        let anchor = anchor_for(&text);

        Some(Self {
            level,
            text,
            anchor,
        })
    }

    /// Returns true for a top-level heading (exactly one leading `#`).
    pub fn is_top_level(&self) -> bool {
        self.level == 1
    }
}

/// Extracts all headings from markdown content, in document order.
pub fn extract_headings(content: &str) -> Vec<Heading> {
    content.split('\n').filter_map(Heading::parse).collect()
}
