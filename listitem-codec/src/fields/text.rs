use listitem_model::FieldValue;
use serde_json::Value;

use super::{first_str, iso_string, json_kind, number_text, number_to_string};
use crate::strategy::{Entries, FieldCodec, Reason};

/// Plain scalar fields: Text, Note, Choice, URL, Guid, ContentTypeId,
/// WorkflowStatus.
pub(crate) struct TextCodec;

impl FieldCodec for TextCodec {
    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        match value {
            FieldValue::Text(s) => Ok(s.clone()),
            FieldValue::Number(n) => number_to_string(*n),
            FieldValue::Boolean(b) => Ok(b.to_string()),
            FieldValue::DateTime(d) => Ok(iso_string(d)),
            other => Err(format!("expected a text value, got {}", other.kind())),
        }
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        Ok(vec![(key.to_string(), Value::String(formatted.to_string()))])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![(key.to_string(), Value::String(String::new()))]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        match raw {
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Number(n) => number_text(n).map(FieldValue::Text),
            Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
            // Hyperlink fields come back as { Url, Description }.
            Value::Object(map) => first_str(map, &["Url", "url"])
                .map(FieldValue::Text)
                .ok_or_else(|| "expected a text value, got object".to_string()),
            other => Err(format!("expected a text value, got {}", json_kind(other))),
        }
    }
}
