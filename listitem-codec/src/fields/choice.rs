use listitem_model::FieldValue;
use serde_json::Value;

use super::{MULTI_DELIMITER, json_kind, number_text, raw_items, results, split_multi};
use crate::strategy::{Entries, FieldCodec, Reason};

/// MultiChoice fields. The wire form is `;#`-joined choices.
pub(crate) struct ChoiceMultiCodec;

impl FieldCodec for ChoiceMultiCodec {
    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        match value {
            FieldValue::MultiChoice(choices) => Ok(choices.join(MULTI_DELIMITER)),
            _ => Err("MultiChoice field requires an array of strings".into()),
        }
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        let choices = split_multi(formatted)
            .map(|c| Value::String(c.to_string()))
            .collect();
        Ok(vec![(key.to_string(), results(choices))])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![(key.to_string(), results(Vec::new()))]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        raw_items(raw)?
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                Value::Number(n) => number_text(&n),
                other => Err(format!("expected a choice, got {}", json_kind(&other))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::MultiChoice)
    }
}
