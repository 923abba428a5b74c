use listitem_model::FieldValue;
use serde_json::Value;

use super::json_kind;
use crate::strategy::{Entries, FieldCodec, Reason};

/// Boolean, AllDayEvent and Attachments fields. The wire form is `"1"`/`"0"`.
pub(crate) struct BooleanCodec;

fn is_truthy(value: &FieldValue) -> bool {
    match value {
        FieldValue::Boolean(b) => *b,
        FieldValue::Text(s) => !s.is_empty(),
        FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
        _ => true,
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

impl FieldCodec for BooleanCodec {
    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        Ok(if is_truthy(value) { "1" } else { "0" }.to_string())
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        let flag = parse_flag(formatted).ok_or_else(|| format!("'{formatted}' is not a flag"))?;
        Ok(vec![(key.to_string(), Value::Bool(flag))])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![(key.to_string(), Value::String(String::new()))]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        match raw {
            Value::Bool(b) => Ok(FieldValue::Boolean(*b)),
            Value::String(s) => parse_flag(s)
                .map(FieldValue::Boolean)
                .ok_or_else(|| format!("'{s}' is not a boolean")),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Ok(FieldValue::Boolean(f != 0.0)),
                None => Err(format!("{n} is not a boolean")),
            },
            other => Err(format!("expected a boolean, got {}", json_kind(other))),
        }
    }
}
