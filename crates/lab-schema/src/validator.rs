//! Field-constraint validation for labs and tags.
//!
//! [`validate`] turns raw [`LabFields`] into a normalized [`ValidatedLab`]:
//! every string is trimmed, `url` and `email` are lowercased, and blank
//! optional strings are treated as absent. Missing required fields are
//! reported one at a time; all other violations are collected together.
//!
//! Lengths are counted in characters, not bytes.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use lab_core::entities::{Lab, Tag};
use lab_core::errors::{FieldViolation, ValidationError};
use lab_core::fields::{LabFields, ValidatedLab};
use lab_core::vocabulary::TagName;
use regex::Regex;

pub const NAME_LEN: RangeInclusive<usize> = 2..=200;
pub const DESCRIPTION_LEN: RangeInclusive<usize> = 10..=2000;
pub const DEPARTMENT_LEN: RangeInclusive<usize> = 2..=100;
pub const PRINCIPAL_INVESTIGATOR_LEN: RangeInclusive<usize> = 2..=100;
pub const LOCATION_LEN: RangeInclusive<usize> = 2..=200;
pub const RESEARCH_AREA_LEN: RangeInclusive<usize> = 2..=100;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s'&().-]+$").expect("name pattern compiles"));

static PERSON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'.,-]+$").expect("person pattern compiles"));

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([\w-]+(\.[\w-]+)+)(/[\w\-./?%&=]*)?$").expect("url pattern compiles")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern compiles")
});

/// Validate and normalize raw lab fields.
///
/// # Errors
///
/// Returns [`ValidationError::MissingRequiredField`] for the first of `name`,
/// `description`, `department`, `principal_investigator` that is absent or
/// blank, otherwise [`ValidationError::Invalid`] listing every violation.
pub fn validate(fields: &LabFields) -> Result<ValidatedLab, ValidationError> {
    let name = required(fields.name.as_deref(), "name")?;
    let description = required(fields.description.as_deref(), "description")?;
    let department = required(fields.department.as_deref(), "department")?;
    let principal_investigator = required(
        fields.principal_investigator.as_deref(),
        "principal_investigator",
    )?;

    let url = optional(fields.url.as_deref()).map(str::to_lowercase);
    let location = optional(fields.location.as_deref()).map(String::from);
    let email = optional(fields.email.as_deref()).map(str::to_lowercase);
    let research_areas: Vec<String> = fields
        .research_areas
        .iter()
        .map(|area| area.trim().to_string())
        .collect();

    let mut violations = Vec::new();

    check_length(&mut violations, "name", name, &NAME_LEN);
    check_pattern(
        &mut violations,
        "name",
        name,
        &NAME_PATTERN,
        "may only contain letters, numbers, spaces, apostrophes, hyphens, periods, ampersands, and parentheses",
    );
    check_length(&mut violations, "description", description, &DESCRIPTION_LEN);
    check_length(&mut violations, "department", department, &DEPARTMENT_LEN);
    check_length(
        &mut violations,
        "principal_investigator",
        principal_investigator,
        &PRINCIPAL_INVESTIGATOR_LEN,
    );
    check_pattern(
        &mut violations,
        "principal_investigator",
        principal_investigator,
        &PERSON_PATTERN,
        "may only contain letters, spaces, apostrophes, hyphens, commas, and periods",
    );

    if let Some(url) = &url {
        check_pattern(&mut violations, "url", url, &URL_PATTERN, "is not a valid URL");
    }
    if let Some(location) = &location {
        check_length(&mut violations, "location", location, &LOCATION_LEN);
    }
    if let Some(email) = &email {
        check_pattern(
            &mut violations,
            "email",
            email,
            &EMAIL_PATTERN,
            "is not a valid email address",
        );
    }

    for (idx, area) in research_areas.iter().enumerate() {
        let len = area.chars().count();
        if !RESEARCH_AREA_LEN.contains(&len) {
            violations.push(FieldViolation::new(
                "research_areas",
                format!(
                    "entry {idx} must be between {} and {} characters (got {len})",
                    RESEARCH_AREA_LEN.start(),
                    RESEARCH_AREA_LEN.end()
                ),
            ));
        }
    }

    if !violations.is_empty() {
        return Err(ValidationError::Invalid { violations });
    }

    Ok(ValidatedLab {
        name: name.to_string(),
        description: description.to_string(),
        department: department.to_string(),
        principal_investigator: principal_investigator.to_string(),
        url,
        location,
        email,
        accepting_students: fields.accepting_students,
        research_areas,
    })
}

/// Check that a tag is a member of the closed vocabulary with matching id and name.
///
/// # Errors
///
/// Returns [`ValidationError::Invalid`] on the `tags` field otherwise.
pub fn validate_tag(tag: &Tag) -> Result<TagName, ValidationError> {
    match TagName::from_id(tag.id) {
        Some(known) if known.as_str() == tag.name => Ok(known),
        _ => Err(ValidationError::Invalid {
            violations: vec![FieldViolation::new(
                "tags",
                format!("tag {} '{}' is not in the tag vocabulary", tag.id, tag.name),
            )],
        }),
    }
}

/// Re-check a complete lab record: field constraints, a positive `lab_id`, and
/// vocabulary-only tags.
///
/// Used by the persistence layer before writing.
///
/// # Errors
///
/// Returns the same errors as [`validate`], with `lab_id` and `tags`
/// violations collected alongside field violations.
pub fn validate_lab(lab: &Lab) -> Result<(), ValidationError> {
    let fields = LabFields {
        name: Some(lab.name.clone()),
        description: Some(lab.description.clone()),
        department: Some(lab.department.clone()),
        principal_investigator: Some(lab.principal_investigator.clone()),
        url: lab.url.clone(),
        location: lab.location.clone(),
        email: lab.email.clone(),
        accepting_students: lab.accepting_students,
        research_areas: lab.research_areas.clone(),
    };

    let mut violations = match validate(&fields) {
        Ok(_) => Vec::new(),
        Err(ValidationError::Invalid { violations }) => violations,
        Err(missing @ ValidationError::MissingRequiredField { .. }) => return Err(missing),
    };

    if lab.lab_id <= 0 {
        violations.push(FieldViolation::new(
            "lab_id",
            format!("must be a positive integer (got {})", lab.lab_id),
        ));
    }
    for tag in &lab.tags {
        if let Err(ValidationError::Invalid { violations: tag_violations }) = validate_tag(tag) {
            violations.extend(tag_violations);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Invalid { violations })
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingRequiredField { field }),
    }
}

fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn check_length(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: &str,
    range: &RangeInclusive<usize>,
) {
    let len = value.chars().count();
    if !range.contains(&len) {
        violations.push(FieldViolation::new(
            field,
            format!(
                "must be between {} and {} characters (got {len})",
                range.start(),
                range.end()
            ),
        ));
    }
}

fn check_pattern(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: &str,
    pattern: &Regex,
    reason: &str,
) {
    if !pattern.is_match(value) {
        violations.push(FieldViolation::new(field, reason));
    }
}
