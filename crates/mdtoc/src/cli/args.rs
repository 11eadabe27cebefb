//! Clap argument definitions for the `mdtoc` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(about = "Insert a table of contents into markdown files, once per file")]
pub struct Cli {
    /// Verbosity level (-v for debug logging)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (defaults to `insert`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Shared flag selecting the sweep root.
#[derive(Args, Debug, Clone, Default)]
pub struct RootArgs {
    /// Directory the include patterns are relative to [default: directory of
    /// the nearest .mdtoc.toml, else the current directory]
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Arguments for `mdtoc insert`.
#[derive(Args, Debug, Clone, Default)]
pub struct InsertCommand {
    #[command(flatten)]
    /// Sweep root override.
    pub root: RootArgs,

    /// Report which files would change without writing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `mdtoc show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Markdown file to generate a table of contents for
    pub file: PathBuf,
}

/// Arguments for `mdtoc init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `mdtoc config`.
#[derive(Args, Debug, Clone)]
pub struct ConfigCommand {
    #[command(flatten)]
    /// Sweep root override.
    pub root: RootArgs,
}

/// Supported `mdtoc` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Insert a table of contents into every matching file
    #[command(after_help = "\
Files are selected by the [sweep] include patterns (default: Day_*/*.md),
relative to the sweep root. A file that already contains the TOC header line
is left untouched, so running insert twice is safe.")]
    Insert(InsertCommand),

    /// Print the table of contents for one file without modifying it
    Show(ShowCommand),

    /// Create a .mdtoc.toml in the current directory
    Init(InitCommand),

    /// Show the effective configuration
    Config(ConfigCommand),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Insert(InsertCommand::default())
    }
}
