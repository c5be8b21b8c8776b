//! # lab-db
//!
//! libSQL persistence for labdir.
//!
//! Stores lab records, the closed tag vocabulary and the lab/tag links, and
//! keeps an FTS5 index over name, description, department and research areas.
//! The lab identifier is the table's `INTEGER PRIMARY KEY`, so uniqueness is
//! decided by the store at insert time, never by a prior lookup.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) for native FTS5.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use tokio::sync::{Mutex, MutexGuard};

pub use service::LabService;
pub use store::{LabField, LabStore, MatchMode};

/// Central database handle for labdir state.
///
/// Wraps a libSQL database and a single connection. Statements that must not
/// interleave with another task's open transaction go through [`Self::access`].
pub struct LabDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    access: Mutex<()>,
}

impl LabDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations and seeds the tag vocabulary on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let lab_db = Self {
            db,
            conn,
            access: Mutex::new(()),
        };
        lab_db.run_migrations().await?;
        tracing::debug!(path, "lab database opened");
        Ok(lab_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    ///
    /// Bypasses [`Self::access`]; intended for tests and diagnostics.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Take exclusive use of the connection.
    ///
    /// Any transaction left open by a cancelled holder is rolled back before
    /// the guard is handed out, so every holder starts in autocommit mode.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the leftover transaction cannot be rolled back.
    pub async fn access(&self) -> Result<MutexGuard<'_, ()>, DatabaseError> {
        let guard = self.access.lock().await;
        if !self.conn.is_autocommit() {
            tracing::warn!("rolling back transaction abandoned by a cancelled write");
            self.conn.execute("ROLLBACK", ()).await?;
        }
        Ok(guard)
    }
}
