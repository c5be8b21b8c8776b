//! Entity structs for labdir domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation. Persistence lives in `lab-db`; nothing here touches storage.

mod lab;
mod tag;

pub use lab::Lab;
pub use tag::Tag;
