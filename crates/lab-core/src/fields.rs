//! Input records for lab synthesis.
//!
//! [`LabFields`] is what a controller hands over: every field it may supply is
//! listed explicitly, required ones as `Option` so that absence can be reported
//! precisely. [`ValidatedLab`] is the normalized result of validation, still
//! missing the two values only the pipeline can provide (`lab_id`, `tags`).

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Lab, Tag};

const fn default_accepting_students() -> bool {
    true
}

/// Raw, unvalidated fields for a new lab.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LabFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub principal_investigator: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_accepting_students")]
    pub accepting_students: bool,
    #[serde(default)]
    pub research_areas: Vec<String>,
}

impl Default for LabFields {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            department: None,
            principal_investigator: None,
            url: None,
            location: None,
            email: None,
            accepting_students: default_accepting_students(),
            research_areas: Vec::new(),
        }
    }
}

impl LabFields {
    /// Start from the four required fields; optional ones take their defaults.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        department: impl Into<String>,
        principal_investigator: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            department: Some(department.into()),
            principal_investigator: Some(principal_investigator.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub const fn accepting_students(mut self, accepting: bool) -> Self {
        self.accepting_students = accepting;
        self
    }

    #[must_use]
    pub fn research_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.research_areas = areas.into_iter().map(Into::into).collect();
        self
    }
}

/// Lab fields that passed validation, normalized (trimmed, lowercased where
/// applicable). Produced only by the schema validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLab {
    pub name: String,
    pub description: String,
    pub department: String,
    pub principal_investigator: String,
    pub url: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub accepting_students: bool,
    pub research_areas: Vec<String>,
}

impl ValidatedLab {
    /// Complete the record once an id has been allocated and tags classified.
    ///
    /// Tags are sorted by id and de-duplicated.
    #[must_use]
    pub fn into_lab(self, lab_id: i64, mut tags: Vec<Tag>, now: DateTime<Utc>) -> Lab {
        tags.sort();
        tags.dedup();
        Lab {
            lab_id,
            name: self.name,
            description: self.description,
            department: self.department,
            principal_investigator: self.principal_investigator,
            url: self.url,
            location: self.location,
            email: self.email,
            accepting_students: self.accepting_students,
            research_areas: self.research_areas,
            tags,
            created_at: now,
            updated_at: now,
        }
    }
}
