//! Command implementations and dispatch.

pub mod config;
pub mod init;
pub mod insert;
pub mod show;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Insert(cmd) => insert::run(ctx, &cmd),
        Commands::Show(cmd) => show::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config(cmd) => config::run(ctx, &cmd),
    }
}
