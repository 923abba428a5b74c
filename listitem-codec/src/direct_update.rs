//! Flat wire string to the type-shaped values of the store's direct object
//! update API.
//!
//! Shapes, per type family:
//!
//! | Type | Key | Value |
//! |---|---|---|
//! | text-like | `<field>` | string |
//! | numeric, boolean, date | `<field>` | number / bool / ISO string |
//! | `User`, `Lookup` | `<field>Id` | id |
//! | `UserMulti`, `LookupMulti` | `<field>Id` | `{ "results": [ids] }` |
//! | `MultiChoice` | `<field>` | `{ "results": [choices] }` |
//! | `TaxonomyFieldType` | `<field>` + `<field>_0` | `{ Label, TermGuid, WssId: -1 }` + wire string |
//! | `TaxonomyFieldTypeMulti` | `<field>` + `<field>_0` | `{ "results": [terms] }` + wire string |
//!
//! An empty wire string clears: scalars get `""`, single references get
//! `null` on the id key, multi-values get `{ "results": [] }`, and taxonomy
//! fields clear both keys.
//!
//! A schema field with a `directKey` writes under that key instead of the
//! defaults above (taxonomy derives its shadow key from it).

use listitem_model::{FieldSchema, FieldType};
use serde_json::{Map, Value};
use tracing::warn;

use crate::strategy::codec_for;

/// Accumulated direct-update payload, keyed by store field name.
pub type DirectUpdates = Map<String, Value>;

/// Adds the direct-update entries for one formatted field value.
///
/// Never fails: if the formatted string cannot be re-parsed for its type the
/// raw string is stored under the plain wire name instead.
pub fn add_direct_update_value(
    updates: &mut DirectUpdates,
    wire_name: &str,
    formatted: &str,
    field_type: FieldType,
) {
    insert_entries(updates, wire_name, None, formatted, field_type);
}

/// Like [`add_direct_update_value`], honouring the field's
/// [`direct_key`](FieldSchema::direct_key) override.
pub fn add_field_direct_update(updates: &mut DirectUpdates, field: &FieldSchema, formatted: &str) {
    insert_entries(
        updates,
        &field.wire_name,
        field.direct_key.as_deref(),
        formatted,
        field.field_type,
    );
}

fn insert_entries(
    updates: &mut DirectUpdates,
    wire_name: &str,
    direct_key: Option<&str>,
    formatted: &str,
    field_type: FieldType,
) {
    let codec = codec_for(field_type);
    let key = direct_key.map_or_else(|| codec.direct_key(wire_name), str::to_string);
    if formatted.is_empty() {
        updates.extend(codec.clear(&key));
        return;
    }
    match codec.expand(&key, formatted) {
        Ok(entries) => updates.extend(entries),
        Err(reason) => {
            warn!(
                wire_name = %wire_name,
                field_type = %field_type,
                reason = %reason,
                "Direct update conversion failed, storing raw value"
            );
            updates.insert(wire_name.to_string(), Value::String(formatted.to_string()));
        }
    }
}
