//! # lab-schema
//!
//! Schema validation for labdir.
//!
//! This crate provides:
//! - [`validator`]: the field-constraint checks every lab must pass before it
//!   can be persisted (pure, no I/O)
//! - [`SchemaRegistry`]: JSON Schemas generated from `lab-core` types, used to
//!   check the shape of JSON input and to export schemas (`labdir schema`)

pub mod error;
pub mod registry;
pub mod validator;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use validator::{validate, validate_lab, validate_tag};
