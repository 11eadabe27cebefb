//! Table-of-contents rendering.

use crate::heading::Heading;

/// Default TOC header line. Its presence in a document marks the TOC as inserted.
pub const DEFAULT_HEADER: &str = "## Table of Contents";

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Rendering options for a TOC block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocStyle {
    /// Header line emitted at the top of the block.
    pub header: String,
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for TocStyle {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl TocStyle {
    /// Formats one TOC entry for a heading.
    ///
    /// A level-1 heading has no indentation; each further level adds one
    /// indentation unit.
    pub fn entry(&self, heading: &Heading) -> String {
        let indent = " ".repeat(self.indent * heading.level.saturating_sub(1));
        format!("{indent}- [{}](#{})", heading.text, heading.anchor)
    }
}

/// Renders the TOC block: the header, a blank line, then one entry per heading.
///
/// With no headings the block is the header followed by a single newline.
pub fn render_toc(headings: &[Heading], style: &TocStyle) -> String {
    let mut lines = Vec::with_capacity(headings.len() + 1);
    lines.push(format!("{}\n", style.header));
    lines.extend(headings.iter().map(|h| style.entry(h)));
    lines.join("\n")
}
