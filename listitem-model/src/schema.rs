use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use crate::{FieldType, ModelError, ModelResult};

/// Describes one logical field and where it lives on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    /// The store's internal field name (e.g. `"AssigneeId"`, `"Title"`).
    pub wire_name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub readonly: bool,
    /// Raw default, in the same shape the store would return it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    /// Key the direct-update API writes this field under, when it differs
    /// from the type's default (`<wireName>Id` for users and lookups, the
    /// wire name otherwise).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_key: Option<String>,
}

impl FieldSchema {
    pub fn new(wire_name: &str, field_type: FieldType) -> Self {
        Self {
            wire_name: wire_name.into(),
            field_type,
            required: false,
            readonly: false,
            default_value: None,
            direct_key: None,
        }
    }

    /// Shorthand for a single-line text field.
    pub fn text(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::Text)
    }

    /// Shorthand for a multi-line text field.
    pub fn note(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::Note)
    }

    /// Shorthand for a choice field.
    pub fn choice(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::Choice)
    }

    /// Shorthand for a multi-choice field.
    pub fn multi_choice(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::MultiChoice)
    }

    /// Shorthand for a numeric field.
    pub fn number(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::Number)
    }

    /// Shorthand for a yes/no field.
    pub fn boolean(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::Boolean)
    }

    /// Shorthand for a date/time field.
    pub fn datetime(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::DateTime)
    }

    /// Shorthand for a single person field.
    pub fn user(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::User)
    }

    /// Shorthand for a multi-person field.
    pub fn user_multi(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::UserMulti)
    }

    /// Shorthand for a single lookup field.
    pub fn lookup(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::Lookup)
    }

    /// Shorthand for a multi lookup field.
    pub fn lookup_multi(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::LookupMulti)
    }

    /// Shorthand for a single managed-metadata field.
    pub fn taxonomy(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::TaxonomyFieldType)
    }

    /// Shorthand for a multi managed-metadata field.
    pub fn taxonomy_multi(wire_name: &str) -> Self {
        Self::new(wire_name, FieldType::TaxonomyFieldTypeMulti)
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_direct_key(mut self, key: &str) -> Self {
        self.direct_key = Some(key.into());
        self
    }
}

/// Logical property name to [`FieldSchema`] mapping.
///
/// Wire names are unique across the schema. Iteration follows logical key
/// order. A schema is immutable once built; share it by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "SchemaEntries",
    into = "BTreeMap<String, FieldSchema>"
)]
pub struct Schema {
    fields: BTreeMap<String, FieldSchema>,
}

impl Schema {
    /// Builds a schema, rejecting repeated keys, empty wire names and wire
    /// names shared by two logical keys.
    pub fn new<K, I>(fields: I) -> ModelResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldSchema)>,
    {
        let mut map = BTreeMap::new();
        for (key, field) in fields {
            let key = key.into();
            if map.contains_key(&key) {
                return Err(ModelError::DuplicateKey(key));
            }
            map.insert(key, field);
        }
        Self::validated(map)
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Parses a schema from its JSON form.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn validated(fields: BTreeMap<String, FieldSchema>) -> ModelResult<Self> {
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
        for (key, field) in &fields {
            if field.wire_name.is_empty() {
                return Err(ModelError::EmptyWireName(key.clone()));
            }
            if let Some(first) = seen.insert(&field.wire_name, key) {
                return Err(ModelError::DuplicateWireName {
                    wire_name: field.wire_name.clone(),
                    first: first.to_string(),
                    second: key.clone(),
                });
            }
        }
        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&FieldSchema> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Resolves a wire name back to its logical key and field.
    pub fn by_wire_name(&self, wire_name: &str) -> Option<(&str, &FieldSchema)> {
        self.fields
            .iter()
            .find(|(_, f)| f.wire_name == wire_name)
            .map(|(k, f)| (k.as_str(), f))
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldSchema> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Logical keys of every field marked `required`.
    pub fn required_keys(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, f)| f.required)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<BTreeMap<String, FieldSchema>> for Schema {
    type Error = ModelError;

    fn try_from(fields: BTreeMap<String, FieldSchema>) -> Result<Self, Self::Error> {
        Self::validated(fields)
    }
}

/// Schema entries in document order, so a logical key repeated in JSON is
/// reported instead of silently replacing the earlier entry.
struct SchemaEntries(Vec<(String, FieldSchema)>);

impl<'de> Deserialize<'de> for SchemaEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SchemaEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of logical key to field schema")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(SchemaEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl TryFrom<SchemaEntries> for Schema {
    type Error = ModelError;

    fn try_from(entries: SchemaEntries) -> Result<Self, Self::Error> {
        Self::new(entries.0)
    }
}

impl From<Schema> for BTreeMap<String, FieldSchema> {
    fn from(schema: Schema) -> Self {
        schema.fields
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = (&'a String, &'a FieldSchema);
    type IntoIter = btree_map::Iter<'a, String, FieldSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Incremental [`Schema`] construction; validation happens in [`SchemaBuilder::build`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(String, FieldSchema)>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn field(mut self, key: &str, field: FieldSchema) -> Self {
        self.fields.push((key.to_string(), field));
        self
    }

    pub fn build(self) -> ModelResult<Schema> {
        Schema::new(self.fields)
    }
}
