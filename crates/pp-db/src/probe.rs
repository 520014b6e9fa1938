//! Schema probe: try a column group's attempts until one matches the layout

use crate::error::DbResult;
use crate::traits::Database;
use pp_core::{ColumnGroup, SchemaVersion};

/// Result of a successful probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Layout of the attempt that answered
    pub version: SchemaVersion,
    /// Column that was read
    pub column: &'static str,
    /// Distinct values, in query order
    pub values: Vec<String>,
}

/// Query `group` against `table`, falling through to the next attempt only
/// when the current one fails with a missing column.
///
/// Any other failure, or a missing column on the last attempt, is returned
/// as-is.
pub async fn probe_distinct(
    db: &dyn Database,
    group: &ColumnGroup,
    table: &'static str,
    limit: u32,
) -> DbResult<ProbeOutcome> {
    let mut attempt = group.primary();
    let mut fallbacks = group.fallbacks().iter();

    loop {
        match db.select_distinct(&attempt.query(table, limit)).await {
            Ok(values) => {
                return Ok(ProbeOutcome {
                    version: attempt.version,
                    column: attempt.column,
                    values,
                })
            }
            Err(err) if err.is_column_not_found() => match fallbacks.next() {
                Some(next) => {
                    log::debug!(
                        "{}: {} layout missed on {}.{} ({}), trying {}",
                        group.name,
                        attempt.version,
                        table,
                        attempt.column,
                        err,
                        next.version
                    );
                    attempt = next;
                }
                None => return Err(err),
            },
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
#[path = "probe_test.rs"]
mod tests;
