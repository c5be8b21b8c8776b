//! Candidate identifier allocation.

use lab_config::AllocatorConfig;
use rand::Rng;

use crate::error::InvalidRange;

/// Produces candidate lab identifiers. Uniqueness is not guaranteed; the store
/// decides it at insert time.
pub trait IdAllocator: Send + Sync {
    fn allocate(&self) -> i64;
}

/// Draws identifiers uniformly from an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomAllocator {
    min_id: i64,
    max_id: i64,
}

impl RandomAllocator {
    pub const DEFAULT_MIN_ID: i64 = 1000;
    pub const DEFAULT_MAX_ID: i64 = 9999;

    /// # Errors
    ///
    /// Returns [`InvalidRange`] if `min_id` is not positive or `max_id < min_id`.
    pub const fn new(min_id: i64, max_id: i64) -> Result<Self, InvalidRange> {
        if min_id < 1 || max_id < min_id {
            return Err(InvalidRange { min_id, max_id });
        }
        Ok(Self { min_id, max_id })
    }

    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub const fn from_config(config: &AllocatorConfig) -> Result<Self, InvalidRange> {
        Self::new(config.min_id, config.max_id)
    }

    #[must_use]
    pub const fn range(&self) -> (i64, i64) {
        (self.min_id, self.max_id)
    }
}

impl Default for RandomAllocator {
    fn default() -> Self {
        Self {
            min_id: Self::DEFAULT_MIN_ID,
            max_id: Self::DEFAULT_MAX_ID,
        }
    }
}

impl IdAllocator for RandomAllocator {
    fn allocate(&self) -> i64 {
        rand::rng().random_range(self.min_id..=self.max_id)
    }
}
