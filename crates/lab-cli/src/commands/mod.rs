pub mod create;
pub mod dispatch;
pub mod find;
pub mod resolve;
pub mod schema;
pub mod search;
pub mod shared;
pub mod tags;
