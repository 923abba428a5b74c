use listitem_model::FieldValue;
use serde_json::Value;

use super::{json_kind, number_to_string, number_value, parse_f64};
use crate::strategy::{Entries, FieldCodec, Reason};

/// Integer, Number, Currency and Counter fields.
///
/// Text input is parsed as a float; text that does not parse to a finite
/// number is rejected rather than written as `NaN`.
pub(crate) struct NumberCodec;

impl FieldCodec for NumberCodec {
    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        match value {
            FieldValue::Number(n) => number_to_string(*n),
            FieldValue::Text(s) => number_to_string(parse_f64(s)?),
            other => Err(format!("expected a number, got {}", other.kind())),
        }
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        let n = parse_f64(formatted)?;
        Ok(vec![(key.to_string(), number_value(n)?)])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![(key.to_string(), Value::String(String::new()))]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        match raw {
            Value::Number(n) => n
                .as_f64()
                .map(FieldValue::Number)
                .ok_or_else(|| format!("{n} is not representable as a float")),
            Value::String(s) => parse_f64(s).map(FieldValue::Number),
            other => Err(format!("expected a number, got {}", json_kind(other))),
        }
    }
}
