use listitem_model::{FieldValue, Schema, TypedRecord};
use serde_json::Value;

use crate::error::{CodecError, CodecResult};
use crate::extract::{SafeExtraction, defaults, extract, safe_extract};
use crate::format::format_value_by_type;
use crate::updater::ListItemUpdater;

/// Schema-bound entry point for one list: read, seed and write items
/// without passing the schema around.
#[derive(Debug, Clone)]
pub struct ListItemHelper {
    schema: Schema,
}

impl ListItemHelper {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn extract(&self, raw: &Value) -> CodecResult<TypedRecord> {
        extract(raw, &self.schema)
    }

    pub fn safe_extract(&self, raw: &Value) -> SafeExtraction {
        safe_extract(raw, &self.schema)
    }

    /// Typed defaults for a new item.
    pub fn defaults(&self) -> CodecResult<TypedRecord> {
        defaults(&self.schema)
    }

    /// A fresh updater for one edit session.
    pub fn updater(&self) -> ListItemUpdater<'_> {
        ListItemUpdater::new(&self.schema)
    }

    /// Formats a value for the field declared under `key`.
    pub fn format_field(&self, key: &str, value: Option<&FieldValue>) -> CodecResult<String> {
        let field = self
            .schema
            .get(key)
            .ok_or_else(|| CodecError::UnknownField(key.to_string()))?;
        format_value_by_type(value, field.field_type)
    }
}
