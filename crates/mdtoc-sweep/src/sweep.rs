//! The sweep driver: discover, then insert a TOC into each file.

use std::path::{Path, PathBuf};

use mdtoc_config::{CompiledPatterns, Config};
use mdtoc_document::{InsertOutcome, TocStyle, WriteMode, process_file};
use tracing::debug;

use crate::{SweepError, discover_files};

/// Counts collected over one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Files selected by the patterns.
    pub files_matched: usize,
    /// Files that received (or would receive) a TOC.
    pub files_updated: usize,
    /// Files skipped because a TOC was already present.
    pub files_skipped: usize,
}

/// Callback for reporting sweep progress.
pub trait SweepReporter {
    /// Called after a TOC was inserted into a file.
    fn on_file_updated(&mut self, path: &Path, entries: usize);

    /// Called when a file already had a TOC.
    fn on_file_skipped(&mut self, path: &Path);

    /// Called once every matched file has been processed.
    fn on_complete(&mut self, stats: &SweepStats);
}

/// A no-op reporter.
pub struct SilentReporter;

impl SweepReporter for SilentReporter {
    fn on_file_updated(&mut self, _path: &Path, _entries: usize) {}
    fn on_file_skipped(&mut self, _path: &Path) {}
    fn on_complete(&mut self, _stats: &SweepStats) {}
}

/// Runs TOC insertion over every file a configuration selects.
pub struct Sweeper {
    /// Directory the patterns are relative to.
    root: PathBuf,
    /// Compiled include/exclude patterns.
    patterns: CompiledPatterns,
    /// TOC rendering style.
    style: TocStyle,
    /// Whether files are written back.
    mode: WriteMode,
}

impl Sweeper {
    /// Creates a sweeper for the given configuration.
    ///
    /// Returns an error if the sweep patterns fail to compile.
    pub fn new(config: &Config, mode: WriteMode) -> Result<Self, SweepError> {
        Ok(Self {
            root: config.root.clone(),
            patterns: config.compile_patterns()?,
            style: config.toc_style(),
            mode,
        })
    }

    /// Returns the sweep root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Processes every matched file in path order.
    ///
    /// Stops at the first file that cannot be read or written; files handled
    /// before the failure keep their new content.
    pub fn run<R: SweepReporter>(&self, reporter: &mut R) -> Result<SweepStats, SweepError> {
        let files = discover_files(&self.root, &self.patterns)?;
        debug!(root = %self.root.display(), matched = files.len(), "discovered files");

        let mut stats = SweepStats {
            files_matched: files.len(),
            ..SweepStats::default()
        };

        for path in &files {
            match process_file(path, &self.style, self.mode)? {
                InsertOutcome::Inserted { entries } => {
                    stats.files_updated += 1;
                    reporter.on_file_updated(path, entries);
                }
                InsertOutcome::AlreadyPresent => {
                    stats.files_skipped += 1;
                    reporter.on_file_skipped(path);
                }
            }
        }

        reporter.on_complete(&stats);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    /// Test reporter that records all events.
    #[derive(Default)]
    struct TestReporter {
        /// Recorded events in order.
        events: Vec<String>,
    }

    impl SweepReporter for TestReporter {
        fn on_file_updated(&mut self, path: &Path, entries: usize) {
            self.events.push(format!(
                "updated: {} ({} entries)",
                file_name(path),
                entries
            ));
        }

        fn on_file_skipped(&mut self, path: &Path) {
            self.events.push(format!("skipped: {}", file_name(path)));
        }

        fn on_complete(&mut self, stats: &SweepStats) {
            self.events.push(format!(
                "complete: {}/{}",
                stats.files_updated, stats.files_matched
            ));
        }
    }

    /// Returns the final path component as a string.
    fn file_name(path: &Path) -> String {
        path.file_name().unwrap().to_string_lossy().into_owned()
    }

    /// Writes a file (and parents) under the temp root.
    fn write(temp: &TempDir, rel_path: &str, content: &str) -> PathBuf {
        let path = temp.path().join(rel_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Default configuration rooted at the temp dir.
    fn config_for(temp: &TempDir) -> Config {
        Config::rooted_at(temp.path())
    }

    #[test]
    fn sweep_updates_matching_files() {
        let temp = TempDir::new().unwrap();
        let a = write(&temp, "Day_01/a.md", "# A\n## One\n");
        let b = write(&temp, "Day_02/b.md", "# B\n");
        let readme = write(&temp, "README.md", "# Readme\n");

        let sweeper = Sweeper::new(&config_for(&temp), WriteMode::Write).unwrap();
        let mut reporter = TestReporter::default();
        let stats = sweeper.run(&mut reporter).unwrap();

        assert_eq!(
            stats,
            SweepStats {
                files_matched: 2,
                files_updated: 2,
                files_skipped: 0,
            }
        );
        assert_eq!(
            reporter.events,
            vec![
                "updated: a.md (2 entries)",
                "updated: b.md (1 entries)",
                "complete: 2/2",
            ]
        );
        assert!(fs::read_to_string(a).unwrap().contains("## Table of Contents"));
        assert!(fs::read_to_string(b).unwrap().contains("## Table of Contents"));
        assert_eq!(fs::read_to_string(readme).unwrap(), "# Readme\n");
    }

    #[test]
    fn second_sweep_skips_everything() {
        let temp = TempDir::new().unwrap();
        let a = write(&temp, "Day_01/a.md", "# A\n");
        let sweeper = Sweeper::new(&config_for(&temp), WriteMode::Write).unwrap();

        sweeper.run(&mut SilentReporter).unwrap();
        let after_first = fs::read_to_string(&a).unwrap();

        let mut reporter = TestReporter::default();
        let stats = sweeper.run(&mut reporter).unwrap();

        assert_eq!(stats.files_updated, 0);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(
            reporter.events,
            vec!["skipped: a.md", "complete: 0/1"]
        );
        assert_eq!(fs::read_to_string(&a).unwrap(), after_first);
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let temp = TempDir::new().unwrap();
        let a = write(&temp, "Day_01/a.md", "# A\n");

        let sweeper = Sweeper::new(&config_for(&temp), WriteMode::DryRun).unwrap();
        let stats = sweeper.run(&mut SilentReporter).unwrap();

        assert_eq!(stats.files_updated, 1);
        assert_eq!(fs::read_to_string(&a).unwrap(), "# A\n");
    }

    #[test]
    fn unreadable_file_stops_sweep() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("Day_01")).unwrap();
        fs::write(temp.path().join("Day_01/bad.md"), [0xff, 0xfe]).unwrap();

        let sweeper = Sweeper::new(&config_for(&temp), WriteMode::Write).unwrap();
        let err = sweeper.run(&mut SilentReporter).unwrap_err();

        assert!(matches!(err, SweepError::Document(_)));
        assert!(err.to_string().contains("bad.md"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_lesson_is_updated() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let real = write(&temp, "shared/real.md", "# Shared
");
        fs::create_dir_all(temp.path().join("Day_02")).unwrap();
        symlink(&real, temp.path().join("Day_02/linked.md")).unwrap();

        let sweeper = Sweeper::new(&config_for(&temp), WriteMode::Write).unwrap();
        let mut reporter = TestReporter::default();
        let stats = sweeper.run(&mut reporter).unwrap();

        assert_eq!(stats.files_updated, 1);
        assert_eq!(
            reporter.events,
            vec!["updated: linked.md (1 entries)", "complete: 1/1"]
        );
        assert!(fs::read_to_string(real).unwrap().contains("## Table of Contents"));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_unrelated_directory_does_not_stop_sweep() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let a = write(&temp, "Day_01/a.md", "# A\n");
        let private = temp.path().join("private");
        fs::create_dir_all(&private).unwrap();
        fs::set_permissions(&private, fs::Permissions::from_mode(0o000)).unwrap();

        let sweeper = Sweeper::new(&config_for(&temp), WriteMode::Write).unwrap();
        let result = sweeper.run(&mut SilentReporter);
        fs::set_permissions(&private, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(result.unwrap().files_updated, 1);
        assert!(fs::read_to_string(a).unwrap().contains("## Table of Contents"));
    }

    #[test]
    fn invalid_pattern_fails_construction() {
        let temp = TempDir::new().unwrap();
        let mut config = config_for(&temp);
        config.sweep.include = vec!["Day_[".to_string()];

        assert!(matches!(
            Sweeper::new(&config, WriteMode::Write),
            Err(SweepError::Config(_))
        ));
    }
}
