//! Row-to-entity parsing helpers.
//!
//! Converts `libsql::Row` (column-indexed) into typed values and handles the
//! dual datetime format (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Parse a TEXT column holding a JSON array of strings.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column is not a JSON string array.
pub fn parse_string_list(s: &str) -> Result<Vec<String>, DatabaseError> {
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid JSON string list '{s}': {e}")))
}

/// Map a libSQL write failure onto the gateway's error kinds.
///
/// `SQLite` reports constraint failures only through the message text, so the
/// match is on the stable prefixes it emits.
#[must_use]
pub fn classify_write_error(e: libsql::Error, lab_id: i64) -> DatabaseError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed: labs.lab_id") {
        DatabaseError::Duplicate { lab_id }
    } else if msg.contains("constraint failed") {
        DatabaseError::Constraint(msg)
    } else {
        DatabaseError::LibSql(e)
    }
}

/// Build an FTS5 MATCH expression from free text.
///
/// Every whitespace-separated term is wrapped in double quotes so that FTS5
/// operators and punctuation in user input are matched literally. Returns
/// `None` when the query has no terms.
#[must_use]
pub fn fts_match_expression(query: &str) -> Option<String> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|term| format!("\"{}\"", term.replace('"', "\"\"")))
        .collect();
    if terms.is_empty() {
        None
    } else {
        Some(terms.join(" "))
    }
}
