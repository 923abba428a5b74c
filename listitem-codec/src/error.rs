//! Error types for the codec.

use listitem_model::FieldType;
use thiserror::Error;

/// Codec errors. Each carries enough context to name the offending field.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The logical key is not declared in the schema.
    #[error("field '{0}' is not declared in the schema")]
    UnknownField(String),

    /// Attempted write to a field marked readonly.
    #[error("field '{0}' is readonly")]
    ReadonlyField(String),

    /// A value could not be converted for its declared type.
    #[error("cannot convert value for {field_type} field: {message}")]
    Conversion {
        field_type: FieldType,
        message: String,
    },

    /// A conversion failure during strict extraction, tagged with its property.
    #[error("field '{property}': {source}")]
    InvalidField {
        property: String,
        #[source]
        source: Box<CodecError>,
    },

    /// Required fields were never set before a validating getter was called.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    /// The raw record is null or not an object.
    #[error("list item record is missing")]
    MissingRecord,
}

impl CodecError {
    pub(crate) fn conversion(field_type: FieldType, message: impl Into<String>) -> Self {
        Self::Conversion {
            field_type,
            message: message.into(),
        }
    }
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
