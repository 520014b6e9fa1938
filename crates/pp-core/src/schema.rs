//! Schema descriptors for the `places` table
//!
//! The historic places database has shipped with two column layouts. A
//! [`ColumnGroup`] lists, in order, the [`SchemaAttempt`]s to try for one
//! conceptual column; each attempt renders to a [`DistinctQuery`].

use std::fmt;

/// Table every probe reads from
pub const PLACES_TABLE: &str = "places";

/// Known layouts of the `places` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    /// Legacy layout: `province`, `jurisdiction`, `language`
    V1,
    /// Current layout: `province_territory`, `jurisdiction`, `name_en`
    V2,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::V1 => write!(f, "v1"),
            SchemaVersion::V2 => write!(f, "v2"),
        }
    }
}

/// Row predicate applied before collecting distinct values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowFilter {
    /// `<column> IS NOT NULL`
    NotNull { column: &'static str },
    /// `<column> = ?`, with the value bound as a parameter
    Equals {
        column: &'static str,
        value: &'static str,
    },
}

impl RowFilter {
    /// Filter used by the current layout: rows with an English name
    pub fn english_name() -> Self {
        RowFilter::NotNull { column: "name_en" }
    }

    /// Filter used by the legacy layout: rows tagged as English
    pub fn english_language() -> Self {
        RowFilter::Equals {
            column: "language",
            value: "en",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            RowFilter::NotNull { column } | RowFilter::Equals { column, .. } => *column,
        }
    }
}

/// One tier of a probe: a column name under a given layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaAttempt {
    pub version: SchemaVersion,
    pub column: &'static str,
    pub filter: RowFilter,
}

impl SchemaAttempt {
    /// Attempt against the current layout
    pub fn v2(column: &'static str) -> Self {
        Self {
            version: SchemaVersion::V2,
            column,
            filter: RowFilter::english_name(),
        }
    }

    /// Attempt against the legacy layout
    pub fn v1(column: &'static str) -> Self {
        Self {
            version: SchemaVersion::V1,
            column,
            filter: RowFilter::english_language(),
        }
    }

    /// Build the query for this attempt
    pub fn query(&self, table: &'static str, limit: u32) -> DistinctQuery {
        DistinctQuery {
            table,
            column: self.column,
            filter: self.filter.clone(),
            limit,
        }
    }
}

/// A reported section: one conceptual column and the attempts that find it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup {
    /// Lowercase name used in error lines ("provinces")
    pub name: &'static str,
    /// Section heading ("PROVINCES")
    pub heading: &'static str,
    primary: SchemaAttempt,
    fallbacks: Vec<SchemaAttempt>,
}

impl ColumnGroup {
    /// Create a group. Returns `None` when an attempt names an identifier
    /// that cannot be emitted unquoted.
    pub fn new(
        name: &'static str,
        heading: &'static str,
        primary: SchemaAttempt,
        fallbacks: Vec<SchemaAttempt>,
    ) -> Option<Self> {
        let group = Self {
            name,
            heading,
            primary,
            fallbacks,
        };
        let valid = group
            .attempts()
            .all(|a| is_plain_identifier(a.column) && is_plain_identifier(a.filter.column()));
        valid.then_some(group)
    }

    /// Attempt tried first
    pub fn primary(&self) -> &SchemaAttempt {
        &self.primary
    }

    /// Attempts tried, in order, after a missing column
    pub fn fallbacks(&self) -> &[SchemaAttempt] {
        &self.fallbacks
    }

    /// Every attempt in the order they are tried
    pub fn attempts(&self) -> impl Iterator<Item = &SchemaAttempt> {
        std::iter::once(&self.primary).chain(self.fallbacks.iter())
    }
}

/// Province and jurisdiction groups, current layout first
pub fn default_column_groups() -> Vec<ColumnGroup> {
    let provinces = ColumnGroup {
        name: "provinces",
        heading: "PROVINCES",
        primary: SchemaAttempt::v2("province_territory"),
        fallbacks: vec![SchemaAttempt::v1("province")],
    };
    let jurisdictions = ColumnGroup {
        name: "jurisdictions",
        heading: "JURISDICTIONS",
        primary: SchemaAttempt::v2("jurisdiction"),
        fallbacks: vec![SchemaAttempt::v1("jurisdiction")],
    };
    vec![provinces, jurisdictions]
}

/// `SELECT DISTINCT` over one column, filtered, ordered, and limited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctQuery {
    pub table: &'static str,
    pub column: &'static str,
    pub filter: RowFilter,
    pub limit: u32,
}

impl DistinctQuery {
    /// Render the SQL text. NULLs in the selected column are excluded so the
    /// limit only counts reportable values.
    pub fn sql(&self) -> String {
        let predicate = match &self.filter {
            RowFilter::NotNull { column } => format!("{} IS NOT NULL", column),
            RowFilter::Equals { column, .. } => format!("{} = ?1", column),
        };
        format!(
            "SELECT DISTINCT {col} FROM {table} WHERE {predicate} AND {col} IS NOT NULL ORDER BY {col} LIMIT {limit}",
            col = self.column,
            table = self.table,
            predicate = predicate,
            limit = self.limit,
        )
    }

    /// Values bound to the placeholders in [`DistinctQuery::sql`]
    pub fn params(&self) -> Vec<&'static str> {
        match &self.filter {
            RowFilter::NotNull { .. } => Vec::new(),
            RowFilter::Equals { value, .. } => vec![*value],
        }
    }
}

/// True for `[A-Za-z_][A-Za-z0-9_]*`
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
