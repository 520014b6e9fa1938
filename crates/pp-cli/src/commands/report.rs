//! Report command implementation
//!
//! Opens the historic places database read-only and prints up to `limit`
//! distinct values for each column group. A group whose current-layout column
//! is missing is retried against the legacy layout; a group that still fails
//! prints an error line and the next group runs regardless.

use anyhow::{Context, Result};
use pp_core::{default_column_groups, Config, PLACES_TABLE};
use pp_db::{probe_distinct, Database, SqliteBackend};
use std::io::{self, Write};

use crate::cli::GlobalArgs;
use crate::commands::common::{resolve_config, verbose, ExitCode};

/// Execute the report command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config = match resolve_config(global, &cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Err(ExitCode(1).into());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, global, &mut out).await
}

/// Print the report for `config` to `out`.
///
/// A missing database file returns `ExitCode(1)` before any connection is
/// attempted. A database that cannot be opened prints `Error: ...` and ends
/// the run successfully.
pub(crate) async fn run<W: Write>(
    config: &Config,
    global: &GlobalArgs,
    out: &mut W,
) -> Result<()> {
    let path = config.database_path.as_path();
    if !path.exists() {
        writeln!(out, "Database not found at {}", path.display())?;
        return Err(ExitCode(1).into());
    }

    let db = match SqliteBackend::open_read_only(path) {
        Ok(db) => db,
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            return Ok(());
        }
    };
    verbose(
        global,
        &format!("Opened {} database {}", db.db_type(), path.display()),
    );

    let result = report_sections(&db, config.limit, global, out).await;

    if let Err(e) = db.close() {
        log::warn!("Failed to close {}: {}", path.display(), e);
    }
    result
}

async fn report_sections<W: Write>(
    db: &dyn Database,
    limit: u32,
    global: &GlobalArgs,
    out: &mut W,
) -> Result<()> {
    for (idx, group) in default_column_groups().iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "--- {} (Limit {}) ---", group.heading, limit)?;

        match probe_distinct(db, group, PLACES_TABLE, limit).await {
            Ok(outcome) => {
                verbose(
                    global,
                    &format!(
                        "{}: {} layout, column {} ({} values)",
                        group.name,
                        outcome.version,
                        outcome.column,
                        outcome.values.len()
                    ),
                );
                for value in &outcome.values {
                    writeln!(out, "{}", value)?;
                }
            }
            Err(e) => writeln!(out, "Error querying {}: {}", group.name, e)?,
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
