use std::path::Path;

use anyhow::Context;
use lab_core::fields::LabFields;
use lab_schema::SchemaRegistry;

use crate::cli::root_commands::LabDetailArgs;

/// Assemble raw lab fields from command-line flags. Validation happens later,
/// in the resolver.
pub fn fields_from_args(name: Option<String>, details: LabDetailArgs) -> LabFields {
    LabFields {
        name,
        description: details.description,
        department: details.department,
        principal_investigator: details.pi,
        url: details.url,
        location: details.location,
        email: details.email,
        accepting_students: !details.not_accepting,
        research_areas: details.areas,
    }
}

/// Read lab fields from a JSON file, checking its shape against the
/// `lab_fields` schema first.
pub fn read_fields_file(path: &Path) -> anyhow::Result<LabFields> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    SchemaRegistry::new()
        .validate("lab_fields", &value)
        .with_context(|| format!("{} does not match the lab_fields schema", path.display()))?;

    serde_json::from_value(value)
        .with_context(|| format!("failed to decode lab fields from {}", path.display()))
}
