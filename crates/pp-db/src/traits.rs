//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use pp_core::DistinctQuery;

/// Read-only database abstraction used by the reporter
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Run a distinct-value query and return each value rendered as text,
    /// in the order the database produced them
    async fn select_distinct(&self, query: &DistinctQuery) -> DbResult<Vec<String>>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
