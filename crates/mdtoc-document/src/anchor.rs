//! Link anchors for TOC entries.
//!
//! The rules are deliberately narrow:
//! - Lowercase the text
//! - Replace each space with a hyphen
//! - Delete `:`, `?`, `(`, `)`, `/` and `,`
//!
//! Everything else (other punctuation, non-ASCII letters, repeated hyphens) is
//! kept as-is. Duplicate anchors are not disambiguated.

/// Characters removed from heading text when deriving an anchor.
const STRIPPED: &[char] = &[':', '?', '(', ')', '/', ','];

/// Derives the link anchor for a heading's text.
pub fn anchor_for(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect()
}
