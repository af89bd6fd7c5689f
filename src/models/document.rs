//! Schemaless document model

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::constants::ID_FIELD;

/// A schemaless record: top-level field name to JSON value
pub type Document = Map<String, Value>;

/// Equality filter over top-level fields; empty matches everything
pub type Filter = Map<String, Value>;

/// Builder helpers for equality filters
pub trait FilterExt {
    /// Filter with a single `field == value` constraint
    fn field_eq(field: &str, value: impl Into<Value>) -> Self;

    /// `true` when every filter entry equals the document's field
    fn matches(&self, document: &Document) -> bool;
}

impl FilterExt for Filter {
    fn field_eq(field: &str, value: impl Into<Value>) -> Self {
        let mut filter = Filter::new();
        filter.insert(field.to_string(), value.into());
        filter
    }

    fn matches(&self, document: &Document) -> bool {
        self.iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

/// Copy of `fields` carrying `id` under `_id`
pub fn with_id(id: Uuid, fields: &Document) -> Document {
    let mut document = fields.clone();
    document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    document
}

/// Overwrite the named top-level fields of `target`.
///
/// Nested values are replaced wholesale, never merged. `_id` is never
/// written. Returns `true` when at least one field changed.
pub fn apply_fields(target: &mut Document, fields: Document) -> bool {
    let mut modified = false;
    for (field, value) in fields {
        if field == ID_FIELD {
            continue;
        }
        if target.get(&field) != Some(&value) {
            target.insert(field, value);
            modified = true;
        }
    }
    modified
}
