//! Repository modules implementing the lab and tag operations.
//!
//! Each module adds methods to `LabService` via `impl LabService` blocks.

pub mod lab;
pub mod tag;
