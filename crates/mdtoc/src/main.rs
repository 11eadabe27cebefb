//! Command-line interface for the `mdtoc` table-of-contents tool.

use std::process::ExitCode;

use clap::Parser;
use mdtoc::cli::{CommandContext, args::Cli, commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = match CommandContext::load() {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command.unwrap_or_default(), &ctx)
}
