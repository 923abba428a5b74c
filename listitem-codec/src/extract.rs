//! Raw store record to typed record.
//!
//! Absent data is always `None`: null, `""`, `{}`, `[]` and an empty
//! `{ "results": [] }` wrapper never produce a value, whatever the field type.

use listitem_model::{FieldType, FieldValue, Schema, TypedRecord};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{CodecError, CodecResult};
use crate::strategy::codec_for;

/// Outcome of [`safe_extract`]: every field that converted, and the error for
/// every field that did not.
#[derive(Debug, Default)]
pub struct SafeExtraction {
    pub data: TypedRecord,
    pub errors: BTreeMap<String, CodecError>,
}

impl SafeExtraction {
    /// Returns true when no field failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

fn is_empty_raw(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => {
            map.is_empty() || matches!(map.get("results"), Some(Value::Array(items)) if items.is_empty())
        }
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Converts one raw value for a field of `field_type`.
pub fn convert_field_value(raw: &Value, field_type: FieldType) -> CodecResult<Option<FieldValue>> {
    if is_empty_raw(raw) {
        return Ok(None);
    }
    codec_for(field_type)
        .parse(raw)
        .map(Some)
        .map_err(|message| CodecError::conversion(field_type, message))
}

fn record_map(raw: &Value) -> CodecResult<&Map<String, Value>> {
    raw.as_object().ok_or(CodecError::MissingRecord)
}

/// Converts every schema field, failing on the first field that cannot be
/// converted or when the record itself is missing.
pub fn extract(raw: &Value, schema: &Schema) -> CodecResult<TypedRecord> {
    let record = record_map(raw)?;
    let mut typed = TypedRecord::new();
    for (key, field) in schema {
        let value = record.get(&field.wire_name).unwrap_or(&Value::Null);
        let converted =
            convert_field_value(value, field.field_type).map_err(|e| CodecError::InvalidField {
                property: key.clone(),
                source: Box::new(e),
            })?;
        if let Some(converted) = converted {
            typed.insert(key, converted);
        }
    }
    Ok(typed)
}

/// Converts every schema field independently. Never fails; per-field errors
/// are collected by logical key. A missing record marks every field as
/// errored.
pub fn safe_extract(raw: &Value, schema: &Schema) -> SafeExtraction {
    let mut out = SafeExtraction::default();
    let Ok(record) = record_map(raw) else {
        for key in schema.keys() {
            out.errors.insert(key.to_string(), CodecError::MissingRecord);
        }
        return out;
    };

    for (key, field) in schema {
        let value = record.get(&field.wire_name).unwrap_or(&Value::Null);
        match convert_field_value(value, field.field_type) {
            Ok(Some(converted)) => {
                out.data.insert(key, converted);
            }
            Ok(None) => {}
            Err(e) => {
                debug!(field = %key, wire_name = %field.wire_name, error = %e, "Field skipped during extraction");
                out.errors.insert(key.clone(), e);
            }
        }
    }
    out
}

/// Typed defaults for a new item, converted from each field's raw
/// `defaultValue`. Fields without a default are absent.
pub fn defaults(schema: &Schema) -> CodecResult<TypedRecord> {
    let mut typed = TypedRecord::new();
    for (key, field) in schema {
        let Some(raw) = &field.default_value else {
            continue;
        };
        let converted =
            convert_field_value(raw, field.field_type).map_err(|e| CodecError::InvalidField {
                property: key.clone(),
                source: Box::new(e),
            })?;
        if let Some(converted) = converted {
            typed.insert(key, converted);
        }
    }
    Ok(typed)
}
