use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::FieldValue;

/// A record extracted from the store, keyed by logical property name.
///
/// Fields with no data are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypedRecord(BTreeMap<String, FieldValue>);

impl TypedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Inserts a value, returning the previous one for the key.
    pub fn insert(&mut self, key: &str, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(key.to_string(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.0.iter()
    }

    /// Extract a text value by logical key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_str)
    }

    /// Extract a numeric value by logical key.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FieldValue::as_f64)
    }

    /// Extract a boolean value by logical key.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FieldValue::as_bool)
    }

    pub fn into_inner(self) -> BTreeMap<String, FieldValue> {
        self.0
    }
}

impl FromIterator<(String, FieldValue)> for TypedRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TypedRecord {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One flat update for the store's validate/form-update API.
///
/// Serializes with the store's `FieldName` / `FieldValue` keys so a batch can
/// be posted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUpdate {
    #[serde(rename = "FieldName", alias = "wireName")]
    pub wire_name: String,
    #[serde(rename = "FieldValue", alias = "wireValue")]
    pub wire_value: String,
}

impl PendingUpdate {
    pub fn new(wire_name: &str, wire_value: String) -> Self {
        Self {
            wire_name: wire_name.to_string(),
            wire_value,
        }
    }
}
