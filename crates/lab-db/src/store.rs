//! The persistence seam used by the resolution pipeline.
//!
//! [`LabStore`] is implemented by [`LabService`] for libSQL; tests and
//! alternative backends can supply their own implementation.

use std::future::Future;

use lab_core::entities::Lab;

use crate::LabService;
use crate::error::DatabaseError;

/// Column a lab can be looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabField {
    LabId,
    Name,
    Department,
    PrincipalInvestigator,
    Email,
}

impl LabField {
    /// Column name in the `labs` table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::LabId => "lab_id",
            Self::Name => "name",
            Self::Department => "department",
            Self::PrincipalInvestigator => "principal_investigator",
            Self::Email => "email",
        }
    }
}

/// How a lookup value is compared against the stored column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// ASCII case-insensitive equality (`COLLATE NOCASE`).
    IgnoreCase,
}

/// Durable storage for lab records.
pub trait LabStore: Send + Sync {
    /// Persist a complete lab record and its tag links atomically.
    ///
    /// Fails with [`DatabaseError::Duplicate`] when `lab.lab_id` is taken.
    /// Returns the record as stored, with storage-assigned timestamps.
    fn insert_lab(&self, lab: &Lab) -> impl Future<Output = Result<Lab, DatabaseError>> + Send;

    /// Return the earliest-created lab whose `field` equals `value`.
    fn find_lab_by(
        &self,
        field: LabField,
        value: &str,
        mode: MatchMode,
    ) -> impl Future<Output = Result<Option<Lab>, DatabaseError>> + Send;

    /// Full-text search over name, description, department and research areas.
    fn search_labs(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Lab>, DatabaseError>> + Send;
}

impl LabStore for LabService {
    fn insert_lab(&self, lab: &Lab) -> impl Future<Output = Result<Lab, DatabaseError>> + Send {
        Self::insert_lab(self, lab)
    }

    fn find_lab_by(
        &self,
        field: LabField,
        value: &str,
        mode: MatchMode,
    ) -> impl Future<Output = Result<Option<Lab>, DatabaseError>> + Send {
        Self::find_lab_by(self, field, value, mode)
    }

    fn search_labs(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Lab>, DatabaseError>> + Send {
        Self::search_labs(self, query, limit)
    }
}
