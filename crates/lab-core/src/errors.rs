//! Cross-cutting error types for labdir.
//!
//! Storage errors (`DatabaseError`) and pipeline errors (`SynthesisError`) live
//! in their own crates. The types here are raised by pure code (validation,
//! vocabulary parsing) or describe failures of external collaborators.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

impl FieldViolation {
    #[must_use]
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Candidate lab fields failed validation. Nothing is ever persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory field is absent or blank.
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// One or more fields violate their constraints. Always non-empty.
    #[error("Validation failed: {}", join_violations(.violations))]
    Invalid { violations: Vec<FieldViolation> },
}

impl ValidationError {
    /// Names of all offending fields.
    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::MissingRequiredField { field } => vec![*field],
            Self::Invalid { violations } => violations.iter().map(|v| v.field).collect(),
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// An external provider (knowledge retrieval, model-backed classification)
/// failed to produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Provider '{provider}' failed: {message}")]
pub struct ProviderError {
    pub provider: String,
    pub message: String,
}

impl ProviderError {
    #[must_use]
    pub fn new(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// A tag name outside the closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tag '{0}': not in the tag vocabulary")]
pub struct UnknownTagError(pub String);
