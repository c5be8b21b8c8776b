use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::vocabulary::TagName;

/// A classification label. Only ever built from the closed [`TagName`] vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl From<TagName> for Tag {
    fn from(name: TagName) -> Self {
        Self {
            id: name.id(),
            name: name.as_str().to_string(),
        }
    }
}
