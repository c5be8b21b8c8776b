//! # lab-core
//!
//! Core types shared across all labdir crates:
//! - Plain entity structs (`Lab`, `Tag`) with no storage behavior
//! - Raw and validated input records for lab synthesis
//! - The closed tag vocabulary (`TagName`)
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod fields;
pub mod vocabulary;
