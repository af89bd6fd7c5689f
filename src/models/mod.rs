//! Domain models
//!
//! Documents are schemaless; the only shapes defined here are the filters
//! and the store-native write results echoed back to clients.

pub mod document;
pub mod write_result;

pub use document::{apply_fields, with_id, Document, Filter, FilterExt};
pub use write_result::{DeleteResult, InsertOneResult, UpdateResult};
