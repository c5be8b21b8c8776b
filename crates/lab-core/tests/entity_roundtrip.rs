//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use lab_core::entities::{Lab, Tag};
use lab_core::fields::LabFields;
use lab_core::vocabulary::TagName;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    lab_roundtrip,
    Lab,
    Lab {
        lab_id: 4821,
        name: "Cognitive Neuroscience Lab".into(),
        description: "Exploring the neural underpinnings of human cognition and memory.".into(),
        department: "Psychology and Brain Sciences".into(),
        principal_investigator: "Dr. Eleanor Vance".into(),
        url: Some("https://cnl.university.edu".into()),
        location: Some("Wexler Building, Room 303".into()),
        email: Some("evance-lab@university.edu".into()),
        accepting_students: true,
        research_areas: vec!["fMRI".into(), "Memory Consolidation".into()],
        tags: vec![Tag::from(TagName::Biology), Tag::from(TagName::Research)],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    lab_minimal_roundtrip,
    Lab,
    Lab {
        lab_id: 1000,
        name: "Ab".into(),
        description: "Ten chars!".into(),
        department: "CS".into(),
        principal_investigator: "Li".into(),
        url: None,
        location: None,
        email: None,
        accepting_students: false,
        research_areas: vec![],
        tags: vec![],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    tag_roundtrip,
    Tag,
    Tag::from(TagName::AiMl)
);

roundtrip_and_validate!(
    lab_fields_roundtrip,
    LabFields,
    LabFields::new(
        "Robotics Lab",
        "Autonomous systems and manipulation.",
        "Mechanical Engineering",
        "Rodney Brooks",
    )
    .research_areas(["Manipulation", "SLAM"])
);

#[test]
fn tag_name_schema_is_closed() {
    let schema = serde_json::to_value(schema_for!(TagName)).unwrap();
    for tag in TagName::ALL {
        let errors = validate_against_schema(&schema, &serde_json::json!(tag.as_str()));
        assert!(errors.is_empty(), "{tag} should validate: {errors:?}");
    }
    let errors = validate_against_schema(&schema, &serde_json::json!("Astrology"));
    assert!(!errors.is_empty(), "names outside the vocabulary must be rejected");
}
