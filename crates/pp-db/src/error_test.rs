use super::*;
use rusqlite::Connection;

fn classify(sql: &str) -> DbError {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE places (id INTEGER, province TEXT);")
        .unwrap();
    let err = conn.prepare(sql).map(|_| ()).unwrap_err();
    err.into()
}

#[test]
fn test_missing_column_classified() {
    let err = classify("SELECT province_territory FROM places");
    assert!(err.is_column_not_found());
    assert!(err.to_string().starts_with("[D004]"));
    assert!(err.to_string().contains("province_territory"));
}

#[test]
fn test_missing_filter_column_classified() {
    let err = classify("SELECT DISTINCT province FROM places WHERE name_en IS NOT NULL");
    match err {
        DbError::ColumnNotFound(msg) => assert_eq!(msg, "no such column: name_en"),
        other => panic!("expected ColumnNotFound, got {other:?}"),
    }
}

#[test]
fn test_sqlite_failure_message_classified() {
    let failure = rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
        Some("no such column: province_territory".to_string()),
    );
    let err: DbError = failure.into();
    assert!(err.is_column_not_found());
}

#[test]
fn test_missing_table_classified() {
    let err = classify("SELECT province FROM sites");
    assert!(matches!(err, DbError::TableNotFound(_)));
    assert!(!err.is_column_not_found());
}

#[test]
fn test_syntax_error_is_execution_error() {
    let err = classify("SELEC province FROM places");
    assert!(matches!(err, DbError::ExecutionError(_)));
}

#[test]
fn test_non_sqlite_failure_is_execution_error() {
    let err: DbError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, DbError::ExecutionError(_)));
}
