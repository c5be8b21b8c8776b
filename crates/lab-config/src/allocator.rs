//! Lab id allocation settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_min_id() -> i64 {
    1000
}

const fn default_max_id() -> i64 {
    9999
}

const fn default_max_attempts() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AllocatorConfig {
    /// Smallest candidate lab id (inclusive).
    #[serde(default = "default_min_id")]
    pub min_id: i64,

    /// Largest candidate lab id (inclusive).
    #[serde(default = "default_max_id")]
    pub max_id: i64,

    /// Allocation attempts per create before giving up on id collisions.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            min_id: default_min_id(),
            max_id: default_max_id(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl AllocatorConfig {
    /// Check that the id range is non-empty and positive and that at least one
    /// attempt is allowed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_id < 1 {
            return Err(ConfigError::InvalidValue {
                field: "allocator.min_id".into(),
                reason: format!("must be positive (got {})", self.min_id),
            });
        }
        if self.max_id < self.min_id {
            return Err(ConfigError::InvalidValue {
                field: "allocator.max_id".into(),
                reason: format!(
                    "must not be below allocator.min_id ({} < {})",
                    self.max_id, self.min_id
                ),
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "allocator.max_attempts".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
