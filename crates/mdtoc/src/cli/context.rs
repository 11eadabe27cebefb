//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use mdtoc_config::Config;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
}

impl CommandContext {
    /// Loads the current directory.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = env::current_dir().map_err(|e| {
            eprintln!("error: could not determine current directory: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self { cwd })
    }

    /// Resolves a user-supplied path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }

    /// Loads configuration, applying an optional `--root` override.
    ///
    /// Discovery starts at the override when given, else at the working
    /// directory. The override also replaces the root implied by the config
    /// file's location.
    pub fn load_config(&self, root: Option<&Path>) -> Result<Config, ExitCode> {
        let root = root.map(|r| self.resolve(r));
        let start = root.as_deref().unwrap_or(&self.cwd);

        let mut config = Config::load(start).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;

        if let Some(root) = root {
            config.root = root;
        }
        Ok(config)
    }
}
