//! Implementation of `mdtoc config`.

use std::process::ExitCode;

use crate::cli::{args::ConfigCommand, context::CommandContext};

/// Prints where settings came from, the sweep root, and the effective settings.
pub fn run(ctx: &CommandContext, cmd: &ConfigCommand) -> ExitCode {
    let config = match ctx.load_config(cmd.root.root.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };

    match &config.config_file {
        Some(path) => println!("# config file: {}", path.display()),
        None => println!("# config file: (none, using defaults)"),
    }
    println!("# sweep root: {}", config.root.display());
    println!();

    match config.settings_to_toml() {
        Ok(toml) => {
            print!("{toml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize settings: {e}");
            ExitCode::FAILURE
        }
    }
}
