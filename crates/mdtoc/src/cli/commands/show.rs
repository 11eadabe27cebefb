//! Implementation of `mdtoc show`.

use std::{fs, process::ExitCode};

use mdtoc_document::{extract_headings, normalize_newlines, render_toc};

use crate::cli::{args::ShowCommand, context::CommandContext};

/// Prints the TOC block that `insert` would add to one file.
///
/// Settings come from the nearest `.mdtoc.toml` above the file. The file is
/// never modified, even when it already has a TOC.
pub fn run(ctx: &CommandContext, cmd: &ShowCommand) -> ExitCode {
    let path = ctx.resolve(&cmd.file);

    let content = match fs::read_to_string(&path) {
        Ok(content) => normalize_newlines(&content).into_owned(),
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let config = match ctx.load_config(path.parent()) {
        Ok(config) => config,
        Err(code) => return code,
    };
    let style = config.toc_style();

    if content.contains(&style.header) {
        eprintln!(
            "note: {} already contains '{}'; insert would skip it",
            path.display(),
            style.header
        );
    }

    println!("{}", render_toc(&extract_headings(&content), &style));
    ExitCode::SUCCESS
}
