//! Error types for pp-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Table not found (D003)
    #[error("[D003] Table not found: {0}")]
    TableNotFound(String),

    /// Column not found (D004)
    #[error("[D004] Column not found: {0}")]
    ColumnNotFound(String),

    /// Mutex poisoned (D005)
    #[error("[D005] Database mutex poisoned: {0}")]
    MutexPoisoned(String),
}

impl DbError {
    /// True when the failure means the referenced column is absent from
    /// the schema, the only class that moves a probe to its next attempt.
    pub fn is_column_not_found(&self) -> bool {
        matches!(self, DbError::ColumnNotFound(_))
    }
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        // SQLite reports a missing column or table as a generic SQLITE_ERROR
        // at prepare time; only the message tells them apart. Bundled builds
        // return it as SqlInputError, older ones as SqliteFailure.
        let msg = match &err {
            rusqlite::Error::SqlInputError { msg, .. } => Some(msg.as_str()),
            rusqlite::Error::SqliteFailure(_, Some(msg)) => Some(msg.as_str()),
            _ => None,
        };
        match msg {
            Some(msg) if msg.starts_with("no such column") => {
                DbError::ColumnNotFound(msg.to_string())
            }
            Some(msg) if msg.starts_with("no such table") => DbError::TableNotFound(msg.to_string()),
            _ => DbError::ExecutionError(err.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
