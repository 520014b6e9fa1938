//! SQLite database backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use pp_core::DistinctQuery;
use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// SQLite database backend
///
/// The connection is closed when the backend is dropped, so every exit path
/// releases the file handle. [`SqliteBackend::close`] does the same but
/// reports failures.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    /// Create a new in-memory SQLite connection
    #[cfg(test)]
    pub(crate) fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an existing database file without write access.
    ///
    /// The file is never created. A file that is not a SQLite database is
    /// rejected here instead of on the first query.
    pub fn open_read_only(path: &Path) -> DbResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(plain_file_path(path), flags)
            .map_err(|e| DbError::ConnectionError(format!("{}: {}", path.display(), e)))?;

        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(|e| DbError::ConnectionError(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Wrap an already-open connection
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Close the connection, reporting any error SQLite returns
    pub fn close(self) -> DbResult<()> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))?;
        conn.close()
            .map_err(|(_, e)| DbError::ConnectionError(e.to_string()))
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }

    /// Run a distinct-value query synchronously
    fn select_distinct_sync(&self, query: &DistinctQuery) -> DbResult<Vec<String>> {
        let conn = self.lock()?;
        let sql = query.sql();
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(query.params()))?;

        let mut values = Vec::new();
        while let Some(row) = rows.next()? {
            if let Some(value) = render_value(row.get_ref(0)?) {
                values.push(value);
            }
        }
        Ok(values)
    }
}

/// Anchor relative paths at the working directory so a file named
/// `file:...` is opened as a file, never parsed as an SQLite URI.
fn plain_file_path(path: &Path) -> PathBuf {
    if path.is_relative() {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}

/// Render a column value as display text. NULL renders as `None`.
fn render_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

#[async_trait]
impl Database for SqliteBackend {
    async fn select_distinct(&self, query: &DistinctQuery) -> DbResult<Vec<String>> {
        self.select_distinct_sync(query)
    }

    fn db_type(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;
