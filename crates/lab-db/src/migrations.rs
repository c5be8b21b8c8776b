//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.
//! The closed tag vocabulary is seeded right after the schema.

use lab_core::vocabulary::TagName;

use crate::LabDb;
use crate::error::DatabaseError;

/// Initial schema: 3 tables, 1 FTS5 virtual table, 5 indexes, 2 triggers.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl LabDb {
    /// Run all embedded migrations in sequence, then seed the vocabulary.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        self.seed_tags().await
    }

    async fn seed_tags(&self) -> Result<(), DatabaseError> {
        for tag in TagName::ALL {
            self.conn
                .execute(
                    "INSERT OR IGNORE INTO tags (id, name) VALUES (?1, ?2)",
                    libsql::params![tag.id(), tag.as_str()],
                )
                .await
                .map_err(|e| DatabaseError::Migration(format!("seed tag '{tag}': {e}")))?;
        }
        tracing::debug!(count = TagName::ALL.len(), "tag vocabulary seeded");
        Ok(())
    }
}
