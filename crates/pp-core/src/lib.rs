//! pp-core - Core library for placeprobe
//!
//! This crate provides configuration loading, the shared error type, and the
//! schema descriptors that tell the probe which columns to try against the
//! `places` table.

pub mod config;
pub mod error;
pub mod schema;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use schema::{
    default_column_groups, ColumnGroup, DistinctQuery, RowFilter, SchemaAttempt, SchemaVersion,
    PLACES_TABLE,
};
