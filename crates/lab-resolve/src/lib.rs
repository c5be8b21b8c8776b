//! # lab-resolve
//!
//! Find-or-create resolution of lab records.
//!
//! - [`allocator`]: candidate numeric ids ([`RandomAllocator`])
//! - [`classifier`]: free text to closed-vocabulary tags ([`KeywordClassifier`])
//! - [`lookup`]: name and id retrieval
//! - [`synthesis`]: [`LabResolver`], the validate / classify / allocate /
//!   persist pipeline with bounded retry on id collisions
//!
//! All storage goes through the `lab_db::LabStore` trait.

pub mod allocator;
pub mod classifier;
pub mod error;
pub mod lookup;
pub mod synthesis;

pub use allocator::{IdAllocator, RandomAllocator};
pub use classifier::{KeywordClassifier, LabText, TagClassifier};
pub use error::{InvalidRange, SynthesisError};
pub use lookup::Lookup;
pub use synthesis::{LabResolver, Resolution};
