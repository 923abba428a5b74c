//! Field schema and typed value model for list-item records.
//!
//! Defines the types shared by every layer that reads or writes list items:
//! - [`FieldType`]: the store's field type tags (`Text`, `User`, `TaxonomyFieldTypeMulti`, ...)
//! - [`FieldSchema`] / [`Schema`]: logical property name to wire field mapping
//! - [`FieldValue`]: the typed, application-level view of one field's value
//! - [`Principal`], [`LookupValue`], [`TaxonomyValue`]: structured value shapes
//! - [`TypedRecord`]: an extracted record keyed by logical property name
//! - [`PendingUpdate`]: one flat `wire name = wire string` update
//!
//! The schema is built once by the application and shared read-only; the
//! conversion logic lives in `listitem-codec`.

mod field_type;
mod record;
mod schema;
mod value;

pub use field_type::FieldType;
pub use record::{PendingUpdate, TypedRecord};
pub use schema::{FieldSchema, Schema, SchemaBuilder};
pub use value::{FieldValue, LookupValue, Principal, PrincipalId, TaxonomyValue};

/// Result type alias using the crate's error type.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Errors raised while building or loading a schema.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("wire name '{wire_name}' is used by both '{first}' and '{second}'")]
    DuplicateWireName {
        wire_name: String,
        first: String,
        second: String,
    },

    #[error("logical key '{0}' is declared more than once")]
    DuplicateKey(String),

    #[error("field '{0}' has an empty wire name")]
    EmptyWireName(String),

    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
