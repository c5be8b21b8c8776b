//! Error types for lab-resolve.

use lab_core::errors::{ProviderError, ValidationError};
use lab_db::error::DatabaseError;
use thiserror::Error;

/// Why `create_lab` produced no record. In every case nothing was persisted.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The supplied fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The tag classifier could not produce a result.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Every allocated identifier collided with a stored lab.
    #[error("could not allocate a free lab id after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    /// The store failed for a reason other than an identifier collision.
    #[error(transparent)]
    Store(#[from] DatabaseError),
}

/// An allocator range that cannot produce a positive identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid lab id range {min_id}..={max_id}: bounds must be positive and ordered")]
pub struct InvalidRange {
    pub min_id: i64,
    pub max_id: i64,
}
