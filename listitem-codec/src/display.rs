//! Human-readable rendering of typed values for read-only views.

use chrono::Timelike;
use listitem_model::{FieldValue, LookupValue, Principal};

use crate::fields::number_to_string;

const LIST_SEPARATOR: &str = ", ";

fn principal_text(p: &Principal) -> String {
    p.display_name
        .as_ref()
        .or(p.email.as_ref())
        .or(p.login_name.as_ref())
        .cloned()
        .unwrap_or_else(|| p.id.to_string())
}

fn lookup_text(l: &LookupValue) -> String {
    l.title.clone().unwrap_or_else(|| l.id.to_string())
}

/// Renders a value for display. Absent values render as `""`.
pub fn display_value(value: Option<&FieldValue>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::Number(n) => number_to_string(*n).unwrap_or_else(|_| n.to_string()),
        FieldValue::Boolean(true) => "Yes".into(),
        FieldValue::Boolean(false) => "No".into(),
        FieldValue::DateTime(d) if d.hour() == 0 && d.minute() == 0 && d.second() == 0 => {
            d.format("%Y-%m-%d").to_string()
        }
        FieldValue::DateTime(d) => d.format("%Y-%m-%d %H:%M").to_string(),
        FieldValue::User(p) => principal_text(p),
        FieldValue::UserMulti(users) => join(users.iter().map(principal_text)),
        FieldValue::Lookup(l) => lookup_text(l),
        FieldValue::LookupMulti(items) => join(items.iter().map(lookup_text)),
        FieldValue::MultiChoice(choices) => choices.join(LIST_SEPARATOR),
        FieldValue::Taxonomy(t) => t.label.clone(),
        FieldValue::TaxonomyMulti(terms) => join(terms.iter().map(|t| t.label.clone())),
    }
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(LIST_SEPARATOR)
}
