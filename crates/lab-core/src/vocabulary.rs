//! The closed tag vocabulary.
//!
//! Every tag a lab can carry is a [`TagName`] variant. Ids are fixed here and
//! seeded into the `tags` table by `lab-db`, so the numeric id and the display
//! name of a tag never drift apart between code and storage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownTagError;

// ---------------------------------------------------------------------------
// TagName
// ---------------------------------------------------------------------------

/// A tag from the closed vocabulary.
///
/// Declaration order matches id order, so the derived `Ord` sorts by id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum TagName {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Engineering")]
    Engineering,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Biology")]
    Biology,
    #[serde(rename = "Chemistry")]
    Chemistry,
    #[serde(rename = "Physics")]
    Physics,
    #[serde(rename = "Mathematics")]
    Mathematics,
    #[serde(rename = "Medicine")]
    Medicine,
    #[serde(rename = "Neuroscience")]
    Neuroscience,
    #[serde(rename = "Psychology")]
    Psychology,
    #[serde(rename = "Environmental")]
    Environmental,
    #[serde(rename = "Social Sciences")]
    SocialSciences,
    #[serde(rename = "Humanities")]
    Humanities,
    #[serde(rename = "Arts")]
    Arts,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Academic")]
    Academic,
    #[serde(rename = "Research")]
    Research,
    #[serde(rename = "Technology")]
    Technology,
    #[serde(rename = "Health")]
    Health,
    #[serde(rename = "Community")]
    Community,
}

impl TagName {
    /// Every vocabulary entry, in id order.
    pub const ALL: [Self; 22] = [
        Self::AiMl,
        Self::ComputerScience,
        Self::Engineering,
        Self::DataScience,
        Self::Biology,
        Self::Chemistry,
        Self::Physics,
        Self::Mathematics,
        Self::Medicine,
        Self::Neuroscience,
        Self::Psychology,
        Self::Environmental,
        Self::SocialSciences,
        Self::Humanities,
        Self::Arts,
        Self::Business,
        Self::Education,
        Self::Academic,
        Self::Research,
        Self::Technology,
        Self::Health,
        Self::Community,
    ];

    /// Stable numeric id stored in `tags.id`.
    #[must_use]
    pub const fn id(self) -> i64 {
        self as i64 + 1
    }

    /// Display name stored in `tags.name`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AiMl => "AI/ML",
            Self::ComputerScience => "Computer Science",
            Self::Engineering => "Engineering",
            Self::DataScience => "Data Science",
            Self::Biology => "Biology",
            Self::Chemistry => "Chemistry",
            Self::Physics => "Physics",
            Self::Mathematics => "Mathematics",
            Self::Medicine => "Medicine",
            Self::Neuroscience => "Neuroscience",
            Self::Psychology => "Psychology",
            Self::Environmental => "Environmental",
            Self::SocialSciences => "Social Sciences",
            Self::Humanities => "Humanities",
            Self::Arts => "Arts",
            Self::Business => "Business",
            Self::Education => "Education",
            Self::Academic => "Academic",
            Self::Research => "Research",
            Self::Technology => "Technology",
            Self::Health => "Health",
            Self::Community => "Community",
        }
    }

    /// Look up a vocabulary entry by its numeric id.
    #[must_use]
    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == id)
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagName {
    type Err = UnknownTagError;

    /// Case-insensitive match against the display names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownTagError(s.to_string()))
    }
}
