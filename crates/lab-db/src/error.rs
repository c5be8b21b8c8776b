//! Database error types for lab-db.

use lab_core::errors::ValidationError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A lab with this identifier is already stored.
    #[error("lab {lab_id} already exists")]
    Duplicate { lab_id: i64 },

    /// A CHECK, NOT NULL or FOREIGN KEY constraint rejected the write.
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// The record failed field validation before reaching SQL.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether this error is an identifier collision the caller may retry
    /// with a fresh id.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}
