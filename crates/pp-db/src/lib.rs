//! pp-db - Database layer for placeprobe
//!
//! This crate provides the `Database` trait, a read-only SQLite
//! implementation, and the schema probe that walks a column group's
//! attempts until one of them matches the database's layout.

pub mod error;
pub mod probe;
pub mod sqlite;
pub mod traits;

pub use error::{DbError, DbResult};
pub use probe::{probe_distinct, ProbeOutcome};
pub use sqlite::SqliteBackend;
pub use traits::Database;
