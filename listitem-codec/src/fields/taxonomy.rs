use listitem_model::{FieldValue, TaxonomyValue};
use serde_json::{Value, json};

use super::{
    MULTI_DELIMITER, TERM_DELIMITER, first_str, json_kind, raw_items, results, shadow_key,
    split_multi,
};
use crate::strategy::{Entries, FieldCodec, Reason};

/// Single managed-metadata fields. The wire form is `label|termId`.
pub(crate) struct TaxonomyCodec;

/// Multi managed-metadata fields. The wire form is `;#`-joined `label|termId` pairs.
pub(crate) struct TaxonomyMultiCodec;

/// Sentinel asking the store to assign the taxonomy hidden-list id.
const WSS_ID_UNASSIGNED: i64 = -1;

fn term_string(term: &TaxonomyValue) -> String {
    format!("{}{}{}", term.label, TERM_DELIMITER, term.term_id)
}

/// Splits on the last `|`: term ids never contain one, labels may.
fn parse_term(s: &str) -> Result<TaxonomyValue, Reason> {
    match s.rsplit_once(TERM_DELIMITER) {
        Some((label, term_id)) if !term_id.trim().is_empty() => {
            Ok(TaxonomyValue::new(label, term_id))
        }
        _ => Err(format!("'{s}' is not a label|termId pair")),
    }
}

fn term_from_raw(raw: &Value) -> Result<TaxonomyValue, Reason> {
    match raw {
        Value::Object(map) => {
            let label = first_str(map, &["Label", "label"]);
            let term_id = first_str(map, &["TermGuid", "termId", "TermID", "TermId"]);
            match (label, term_id) {
                (Some(label), Some(term_id)) => Ok(TaxonomyValue { label, term_id }),
                _ => Err("term object requires a label and a term id".into()),
            }
        }
        Value::String(s) => parse_term(s),
        other => Err(format!("expected a term, got {}", json_kind(other))),
    }
}

/// The direct-update object for one term.
fn term_object(term: &TaxonomyValue) -> Value {
    json!({
        "Label": term.label,
        "TermGuid": term.term_id,
        "WssId": WSS_ID_UNASSIGNED,
    })
}

impl FieldCodec for TaxonomyCodec {
    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        match value {
            FieldValue::Taxonomy(term) => Ok(term_string(term)),
            _ => Err("TaxonomyFieldType requires an object with label and termId".into()),
        }
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        let term = parse_term(formatted)?;
        Ok(vec![
            (key.to_string(), term_object(&term)),
            (shadow_key(key), Value::String(formatted.to_string())),
        ])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![
            (key.to_string(), Value::Null),
            (shadow_key(key), Value::String(String::new())),
        ]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        term_from_raw(raw).map(FieldValue::Taxonomy)
    }
}

impl FieldCodec for TaxonomyMultiCodec {
    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        match value {
            FieldValue::TaxonomyMulti(terms) => Ok(terms
                .iter()
                .map(term_string)
                .collect::<Vec<_>>()
                .join(MULTI_DELIMITER)),
            _ => Err("TaxonomyFieldTypeMulti requires an array of terms".into()),
        }
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        let terms = split_multi(formatted)
            .map(|t| parse_term(t).map(|term| term_object(&term)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(vec![
            (key.to_string(), results(terms)),
            (shadow_key(key), Value::String(formatted.to_string())),
        ])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![
            (key.to_string(), results(Vec::new())),
            (shadow_key(key), Value::String(String::new())),
        ]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        raw_items(raw)?
            .iter()
            .map(term_from_raw)
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::TaxonomyMulti)
    }
}
