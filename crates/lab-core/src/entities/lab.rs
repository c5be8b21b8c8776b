use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Tag;

/// A research lab directory record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lab {
    pub lab_id: i64,
    pub name: String,
    pub description: String,
    pub department: String,
    pub principal_investigator: String,
    pub url: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub accepting_students: bool,
    pub research_areas: Vec<String>,
    /// Sorted by tag id.
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lab {
    /// Whether this lab carries the tag with the given vocabulary name.
    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }
}
