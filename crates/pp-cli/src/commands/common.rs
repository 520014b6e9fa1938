//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use pp_core::Config;
use std::fmt;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and the database handle is released.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; the command has already printed its message.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Resolve the effective configuration.
///
/// Precedence: command-line flags, then `--config` (or a placeprobe.yml in
/// `cwd`), then built-in defaults.
pub(crate) fn resolve_config(global: &GlobalArgs, cwd: &Path) -> Result<Config> {
    let base = match &global.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => Config::load_from_dir(cwd)
            .context("Failed to load project configuration")?
            .unwrap_or_default(),
    };

    base.with_overrides(global.database.clone(), global.limit)
        .context("Invalid command-line override")
}

/// Print verbose output to stderr if enabled
pub(crate) fn verbose(global: &GlobalArgs, msg: &str) {
    if global.verbose {
        eprintln!("[verbose] {}", msg);
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
