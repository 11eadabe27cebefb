//! One-shot TOC insertion into document text.

use tracing::debug;

use crate::{Heading, extract_headings, render_toc, toc::TocStyle};

/// A document rewritten with a TOC block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// The new document content.
    pub content: String,
    /// Line index the TOC block was inserted before.
    pub line: usize,
    /// Number of TOC entries.
    pub entries: usize,
}

/// Returns the line index just after the first top-level heading.
///
/// A top-level heading starts with `#` but not `##`. Returns 0 when the
/// document has none, so the TOC goes at the very top.
pub fn insertion_point(lines: &[&str]) -> usize {
    lines
        .iter()
        .position(|line| Heading::parse(line).is_some_and(|h| h.is_top_level()))
        .map_or(0, |idx| idx + 1)
}

/// Inserts a TOC into `content`, or returns `None` if the header line is already present.
///
/// Headings are extracted from the full original content, so the document
/// title appears as the first entry. The title line itself stays in place.
pub fn insert_toc(content: &str, style: &TocStyle) -> Option<Insertion> {
    if content.contains(&style.header) {
        return None;
    }

    let headings = extract_headings(content);
    let toc = render_toc(&headings, style);

    let lines: Vec<&str> = content.split('\n').collect();
    let line = insertion_point(&lines);
    debug!(line, entries = headings.len(), "inserting table of contents");

    let (before, after) = lines.split_at(line);
    let content = format!("{}\n\n{}\n\n{}", before.join("\n"), toc, after.join("\n"));

    Some(Insertion {
        content,
        line,
        entries: headings.len(),
    })
}
