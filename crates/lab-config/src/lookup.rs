//! Lookup behavior.

use serde::{Deserialize, Serialize};

const fn default_case_sensitive() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Whether name lookups distinguish letter case.
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            case_sensitive: default_case_sensitive(),
        }
    }
}
