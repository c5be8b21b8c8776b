//! Read-only retrieval of persisted labs.

use lab_core::entities::Lab;
use lab_db::error::DatabaseError;
use lab_db::{LabField, LabStore, MatchMode};

/// Name and id lookups over a [`LabStore`]. A miss is `Ok(None)`.
pub struct Lookup<'s, S> {
    store: &'s S,
    mode: MatchMode,
}

impl<'s, S: LabStore> Lookup<'s, S> {
    #[must_use]
    pub const fn new(store: &'s S, mode: MatchMode) -> Self {
        Self { store, mode }
    }

    /// Exact match on the trimmed name. When several labs share the name the
    /// earliest-created one is returned.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store cannot be read.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Lab>, DatabaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let found = self.store.find_lab_by(LabField::Name, name, self.mode).await?;
        tracing::debug!(name, hit = found.is_some(), "lookup by name");
        Ok(found)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the store cannot be read.
    pub async fn find_by_id(&self, lab_id: i64) -> Result<Option<Lab>, DatabaseError> {
        self.store
            .find_lab_by(LabField::LabId, &lab_id.to_string(), MatchMode::Exact)
            .await
    }
}
