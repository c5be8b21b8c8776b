//! Service layer over `LabDb`.
//!
//! `LabService` owns the database handle; the repository methods in
//! [`crate::repos`] are implemented as `impl LabService` blocks.

use crate::LabDb;
use crate::error::DatabaseError;

/// Entry point for all lab and tag persistence operations.
pub struct LabService {
    db: LabDb,
}

impl LabService {
    /// Open a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LabDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `LabDb`.
    #[must_use]
    pub const fn from_db(db: LabDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LabDb {
        &self.db
    }
}
