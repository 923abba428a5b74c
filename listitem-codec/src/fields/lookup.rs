use listitem_model::{FieldValue, LookupValue};
use serde_json::Value;

use super::{MULTI_DELIMITER, first_of, first_str, id_key, parse_id, raw_id, raw_items, results};
use crate::strategy::{Entries, FieldCodec, Reason};

/// Single lookup fields. The wire form is the target item id.
pub(crate) struct LookupCodec;

/// Multi lookup fields. The wire form is `;#`-joined target ids.
pub(crate) struct LookupMultiCodec;

fn lookup_from_raw(raw: &Value) -> Result<LookupValue, Reason> {
    match raw {
        Value::Object(map) => {
            let id = first_of(map, &["Id", "id", "ID", "lookupId"])
                .ok_or_else(|| "lookup object has no id".to_string())
                .and_then(raw_id)?;
            Ok(LookupValue {
                id,
                title: first_str(map, &["Title", "title", "lookupValue"]),
            })
        }
        other => raw_id(other).map(LookupValue::new),
    }
}

fn lookup_id(value: &FieldValue) -> Result<i64, Reason> {
    match value {
        FieldValue::Lookup(l) => Ok(l.id),
        FieldValue::Number(n) if n.is_finite() && n.fract() == 0.0 => Ok(*n as i64),
        FieldValue::Number(n) => Err(format!("{n} is not a numeric id")),
        FieldValue::Text(s) => parse_id(s),
        other => Err(format!("expected a lookup id, got {}", other.kind())),
    }
}

impl FieldCodec for LookupCodec {
    fn direct_key(&self, wire_name: &str) -> String {
        id_key(wire_name)
    }

    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        lookup_id(value).map(|id| id.to_string())
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        Ok(vec![(key.to_string(), Value::from(parse_id(formatted)?))])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![(key.to_string(), Value::Null)]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        lookup_from_raw(raw).map(FieldValue::Lookup)
    }
}

impl FieldCodec for LookupMultiCodec {
    fn direct_key(&self, wire_name: &str) -> String {
        id_key(wire_name)
    }

    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        let ids: Vec<i64> = match value {
            FieldValue::LookupMulti(items) => items.iter().map(|l| l.id).collect(),
            FieldValue::MultiChoice(ids) => ids
                .iter()
                .map(|s| parse_id(s))
                .collect::<Result<_, _>>()?,
            _ => return Err("LookupMulti field requires an array of ids".into()),
        };
        Ok(ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(MULTI_DELIMITER))
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        let ids = formatted
            .split(MULTI_DELIMITER)
            .map(|p| parse_id(p).map(Value::from))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vec![(key.to_string(), results(ids))])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![(key.to_string(), results(Vec::new()))]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        raw_items(raw)?
            .iter()
            .map(lookup_from_raw)
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::LookupMulti)
    }
}
