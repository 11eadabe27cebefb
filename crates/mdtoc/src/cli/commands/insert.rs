//! Implementation of `mdtoc insert`, the default command.

use std::{path::Path, process::ExitCode};

use mdtoc_document::WriteMode;
use mdtoc_sweep::{SweepReporter, SweepStats, Sweeper};
use tracing::debug;

use crate::cli::{args::InsertCommand, context::CommandContext};

/// Sweeps the root and inserts a TOC into every matching file.
pub fn run(ctx: &CommandContext, cmd: &InsertCommand) -> ExitCode {
    let config = match ctx.load_config(cmd.root.root.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let mode = if cmd.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };

    let sweeper = match Sweeper::new(&config, mode) {
        Ok(sweeper) => sweeper,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(root = %sweeper.root().display(), ?mode, "starting sweep");

    let mut reporter = PrintReporter { mode };
    match sweeper.run(&mut reporter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints one line per modified file and a final count.
struct PrintReporter {
    /// Selects the wording of the report lines.
    mode: WriteMode,
}

impl SweepReporter for PrintReporter {
    fn on_file_updated(&mut self, path: &Path, entries: usize) {
        debug!(path = %path.display(), entries, "updated");
        match self.mode {
            WriteMode::Write => println!("Added TOC to {}", path.display()),
            WriteMode::DryRun => println!("Would add TOC to {}", path.display()),
        }
    }

    fn on_file_skipped(&mut self, path: &Path) {
        debug!(path = %path.display(), "skipped, table of contents already present");
    }

    fn on_complete(&mut self, stats: &SweepStats) {
        println!();
        match self.mode {
            WriteMode::Write => println!("Total files processed: {}", stats.files_updated),
            WriteMode::DryRun => println!("Total files to process: {}", stats.files_updated),
        }
    }
}
