//! Strategy implementations, one module per value family, plus the wire
//! helpers they share.

mod boolean;
mod choice;
mod datetime;
mod lookup;
mod number;
mod taxonomy;
mod text;
mod user;

pub(crate) use boolean::BooleanCodec;
pub(crate) use choice::ChoiceMultiCodec;
pub(crate) use datetime::DateTimeCodec;
pub(crate) use lookup::{LookupCodec, LookupMultiCodec};
pub(crate) use number::NumberCodec;
pub(crate) use taxonomy::{TaxonomyCodec, TaxonomyMultiCodec};
pub(crate) use text::TextCodec;
pub(crate) use user::{UserCodec, UserMultiCodec};

pub(crate) use datetime::iso_string;

use serde_json::{Map, Value, json};

use crate::strategy::Reason;

/// Separator between items of a multi-value wire string.
pub const MULTI_DELIMITER: &str = ";#";

/// Separator between a term's label and its id.
pub const TERM_DELIMITER: char = '|';

/// Default direct-update key for user and lookup fields: `<field>Id`.
///
/// The suffix is always appended; a column whose internal name is `ClientId`
/// is written through `ClientIdId`. Schemas that already name the id key set
/// [`FieldSchema::direct_key`](listitem_model::FieldSchema::direct_key).
pub fn id_key(wire_name: &str) -> String {
    format!("{wire_name}Id")
}

/// Hidden companion key the store keeps next to a taxonomy field.
pub fn shadow_key(wire_name: &str) -> String {
    format!("{wire_name}_0")
}

pub(crate) fn results(items: Vec<Value>) -> Value {
    json!({ "results": items })
}

/// Items of a `;#`-joined string, kept exactly as written. One leading and
/// one trailing delimiter are tolerated; empty items between two delimiters
/// are kept.
pub(crate) fn split_multi(s: &str) -> impl Iterator<Item = &str> {
    let s = s.strip_prefix(MULTI_DELIMITER).unwrap_or(s);
    let s = s.strip_suffix(MULTI_DELIMITER).unwrap_or(s);
    (!s.is_empty())
        .then(|| s.split(MULTI_DELIMITER))
        .into_iter()
        .flatten()
}

/// Items of a raw multi-value: a native array, the verbose
/// `{ "results": [...] }` wrapper, or a `;#`-joined string.
pub(crate) fn raw_items(raw: &Value) -> Result<Vec<Value>, Reason> {
    match raw {
        Value::Array(items) => Ok(items.clone()),
        Value::Object(map) => match map.get("results") {
            Some(Value::Array(items)) => Ok(items.clone()),
            _ => Err("expected an array or a results wrapper".into()),
        },
        Value::String(s) => Ok(split_multi(s).map(|p| Value::String(p.to_string())).collect()),
        other => Err(format!("expected a multi-value, got {}", json_kind(other))),
    }
}

/// First present, non-null property among `keys`.
pub(crate) fn first_of<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| map.get(*k))
        .find(|v| !v.is_null())
}

/// First string property among `keys`.
pub(crate) fn first_str(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    match first_of(map, keys)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Text form of a raw JSON number. Floats render like formatted numbers, so
/// `3.0` reads back as `"3"`; integers keep their exact digits.
pub(crate) fn number_text(n: &serde_json::Number) -> Result<String, Reason> {
    match n.as_f64() {
        Some(f) if n.is_f64() => number_to_string(f),
        _ => Ok(n.to_string()),
    }
}

/// Renders a number the way the store expects it in text form: integral
/// values carry no fractional part.
pub(crate) fn number_to_string(n: f64) -> Result<String, Reason> {
    if !n.is_finite() {
        return Err(format!("{n} is not a finite number"));
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        Ok(format!("{}", n as i64))
    } else {
        Ok(format!("{n}"))
    }
}

/// JSON number for `n`, integral when possible.
pub(crate) fn number_value(n: f64) -> Result<Value, Reason> {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return Ok(Value::from(n as i64));
    }
    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .ok_or_else(|| format!("{n} is not a finite number"))
}

pub(crate) fn parse_f64(s: &str) -> Result<f64, Reason> {
    match s.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("'{s}' is not a number")),
    }
}

pub(crate) fn parse_id(s: &str) -> Result<i64, Reason> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| format!("'{s}' is not a numeric id"))
}

/// Integral id from a raw number or numeric string.
pub(crate) fn raw_id(raw: &Value) -> Result<i64, Reason> {
    match raw {
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(id), _) => Ok(id),
            (None, Some(f)) if f.fract() == 0.0 => Ok(f as i64),
            _ => Err(format!("{n} is not a numeric id")),
        },
        Value::String(s) => parse_id(s),
        other => Err(format!("expected a numeric id, got {}", json_kind(other))),
    }
}

pub(crate) const fn json_kind(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
