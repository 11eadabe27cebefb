//! File-level TOC insertion.

use std::{fs, path::Path};

use tracing::debug;

use crate::{DocumentError, insert::insert_toc, newline::normalize_newlines, toc::TocStyle};

/// Whether a processed file is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Overwrite the file with the new content.
    #[default]
    Write,
    /// Compute the outcome without touching the file.
    DryRun,
}

/// Result of processing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A TOC was inserted (or would be, in dry-run mode).
    Inserted {
        /// Number of TOC entries.
        entries: usize,
    },
    /// The file already contains the TOC header; nothing was done.
    AlreadyPresent,
}

impl InsertOutcome {
    /// Returns true if the file was (or would be) modified.
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

/// Reads a markdown file, inserts a TOC once, and writes it back.
///
/// The whole file is read into memory and rewritten in one go, with line
/// endings normalized to `\n`. Read and write failures are returned as errors;
/// an existing TOC is [`InsertOutcome::AlreadyPresent`] and leaves the file
/// untouched.
pub fn process_file(
    path: &Path,
    style: &TocStyle,
    mode: WriteMode,
) -> Result<InsertOutcome, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let content = normalize_newlines(&content);

    let Some(insertion) = insert_toc(&content, style) else {
        debug!(path = %path.display(), "table of contents already present");
        return Ok(InsertOutcome::AlreadyPresent);
    };

    if mode == WriteMode::Write {
        fs::write(path, &insertion.content).map_err(|source| DocumentError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(InsertOutcome::Inserted {
        entries: insertion.entries,
    })
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use tempfile::TempDir;

    use super::*;

    /// Writes `content` to `name` inside the temp dir.
    fn write_doc(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_process_inserts_and_writes() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "day.md", "# Day 1\n## Goals\nLearn.");

        let outcome = process_file(&path, &TocStyle::default(), WriteMode::Write).unwrap();
        assert_eq!(outcome, InsertOutcome::Inserted { entries: 2 });

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "# Day 1\n\n## Table of Contents\n\n- [Day 1](#day-1)\n  - [Goals](#goals)\n\n## Goals\nLearn."
        );
    }

    #[test]
    fn test_second_run_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "day.md", "# Day 2\n## Notes\n");
        let style = TocStyle::default();

        assert!(
            process_file(&path, &style, WriteMode::Write)
                .unwrap()
                .is_inserted()
        );
        let after_first = fs::read_to_string(&path).unwrap();

        let outcome = process_file(&path, &style, WriteMode::Write).unwrap();
        assert_eq!(outcome, InsertOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let original = "# Title\n## Part\n";
        let path = write_doc(&dir, "doc.md", original);

        let outcome = process_file(&path, &TocStyle::default(), WriteMode::DryRun).unwrap();
        assert!(outcome.is_inserted());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_crlf_file_rewritten_with_lf() {
        let dir = TempDir::new().unwrap();
        let path = write_doc(&dir, "windows.md", "# Title\r\nintro\r\n## Sec\r\n");

        let outcome = process_file(&path, &TocStyle::default(), WriteMode::Write).unwrap();
        assert_eq!(outcome, InsertOutcome::Inserted { entries: 2 });
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Title\n\n## Table of Contents\n\n- [Title](#title)\n  - [Sec](#sec)\n\nintro\n## Sec\n"
        );
    }

    #[test]
    fn test_crlf_file_with_toc_left_alone() {
        let dir = TempDir::new().unwrap();
        let original = "# Title\r\n\r\n## Table of Contents\r\n";
        let path = write_doc(&dir, "done.md", original);

        let outcome = process_file(&path, &TocStyle::default(), WriteMode::Write).unwrap();
        assert_eq!(outcome, InsertOutcome::AlreadyPresent);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");

        let err = process_file(&path, &TocStyle::default(), WriteMode::Write).unwrap_err();
        assert!(matches!(err, DocumentError::ReadFile { .. }));
        assert!(err.to_string().contains("missing.md"));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = process_file(&path, &TocStyle::default(), WriteMode::Write).unwrap_err();
        assert!(matches!(err, DocumentError::ReadFile { .. }));
    }
}
