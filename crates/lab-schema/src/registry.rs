//! Central schema registry for labdir types.
//!
//! The `SchemaRegistry` builds JSON Schemas from lab-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in labdir.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the entity and input schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema, which `schemars` output never triggers.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(schemas, "lab", lab_core::entities::Lab);
        register!(schemas, "tag", lab_core::entities::Tag);
        register!(schemas, "tag_name", lab_core::vocabulary::TagName);
        register!(schemas, "lab_fields", lab_core::fields::LabFields);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lab_core::entities::{Lab, Tag};
    use lab_core::vocabulary::TagName;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_lists_all_schemas_sorted() {
        assert_eq!(
            registry().list(),
            vec!["lab", "lab_fields", "tag", "tag_name"]
        );
    }

    #[test]
    fn validate_valid_lab() {
        let lab = Lab {
            lab_id: 1234,
            name: "Vision Lab".into(),
            description: "Computer vision research.".into(),
            department: "Computer Science".into(),
            principal_investigator: "Fei-Fei Li".into(),
            url: None,
            location: None,
            email: None,
            accepting_students: true,
            research_areas: vec!["Object Recognition".into()],
            tags: vec![Tag::from(TagName::AiMl)],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&lab).unwrap();
        assert!(registry().validate("lab", &json).is_ok());
    }

    #[test]
    fn validate_lab_fields_accepts_partial_input() {
        let json = serde_json::json!({
            "name": "Vision Lab",
            "research_areas": ["Object Recognition"]
        });
        assert!(registry().validate("lab_fields", &json).is_ok());
    }

    #[test]
    fn validate_lab_fields_rejects_wrong_types() {
        let json = serde_json::json!({
            "name": "Vision Lab",
            "accepting_students": "yes",
            "research_areas": "Object Recognition"
        });
        let result = registry().validate("lab_fields", &json);
        match result {
            Err(SchemaError::ValidationFailed { errors }) => assert!(errors.len() >= 2),
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_tag_outside_vocabulary() {
        assert!(registry().validate("tag_name", &serde_json::json!("Biology")).is_ok());
        assert!(registry().validate("tag_name", &serde_json::json!("Alchemy")).is_err());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
