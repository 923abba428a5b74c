use listitem_model::{FieldValue, Principal, PrincipalId};
use serde_json::Value;

use super::{
    MULTI_DELIMITER, first_of, first_str, id_key, json_kind, parse_id, raw_items, results,
};
use crate::strategy::{Entries, FieldCodec, Reason};

/// Single person fields. The wire form is the principal's id.
pub(crate) struct UserCodec;

/// Multi person fields. The wire form is `;#`-joined ids.
pub(crate) struct UserMultiCodec;

/// Reads a principal from an expanded user object, a bare id, or an id string.
pub(crate) fn principal_from_raw(raw: &Value) -> Result<Principal, Reason> {
    match raw {
        Value::Object(map) => {
            let id = match first_of(map, &["Id", "id", "ID"]) {
                Some(Value::Number(n)) => match n.as_i64() {
                    Some(id) => PrincipalId::Numeric(id),
                    None => return Err(format!("{n} is not a user id")),
                },
                Some(Value::String(s)) if !s.trim().is_empty() => PrincipalId::parse(s),
                _ => return Err("user object has no id".into()),
            };
            Ok(Principal {
                id,
                email: first_str(map, &["EMail", "Email", "email", "Mail"]),
                display_name: first_str(map, &["Title", "title", "displayName", "DisplayName"]),
                login_name: first_str(map, &["Name", "LoginName", "loginName"]),
            })
        }
        Value::Number(n) => n
            .as_i64()
            .map(Principal::new)
            .ok_or_else(|| format!("{n} is not a user id")),
        Value::String(s) if s.trim().is_empty() => Err("empty user id".into()),
        Value::String(s) => Ok(Principal::new(PrincipalId::parse(s))),
        other => Err(format!("expected a user, got {}", json_kind(other))),
    }
}

fn numeric_ids(formatted: &str) -> Result<Vec<Value>, Reason> {
    formatted
        .split(MULTI_DELIMITER)
        .map(|p| parse_id(p).map(Value::from))
        .collect()
}

impl FieldCodec for UserCodec {
    fn direct_key(&self, wire_name: &str) -> String {
        id_key(wire_name)
    }

    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        match value {
            FieldValue::User(p) => Ok(p.id.to_string()),
            _ => Err("User field requires object with id".into()),
        }
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        Ok(vec![(key.to_string(), Value::from(parse_id(formatted)?))])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![(key.to_string(), Value::Null)]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        principal_from_raw(raw).map(FieldValue::User)
    }
}

impl FieldCodec for UserMultiCodec {
    fn direct_key(&self, wire_name: &str) -> String {
        id_key(wire_name)
    }

    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        match value {
            FieldValue::UserMulti(users) => Ok(users
                .iter()
                .map(|p| p.id.to_string())
                .collect::<Vec<_>>()
                .join(MULTI_DELIMITER)),
            _ => Err("UserMulti field requires an array of users".into()),
        }
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        Ok(vec![(key.to_string(), results(numeric_ids(formatted)?))])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![(key.to_string(), results(Vec::new()))]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        raw_items(raw)?
            .iter()
            .map(principal_from_raw)
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::UserMulti)
    }
}
