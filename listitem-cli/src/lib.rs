//! Commands behind the `listitem` binary.
//!
//! Each command takes already-loaded JSON and returns JSON (or a wire
//! string), so the binary only deals with files and printing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use listitem_codec::{
    ChangeCheck, ListItemUpdater, convert_field_value, extract, format_value_by_type,
    safe_extract,
};
use listitem_model::{FieldType, FieldValue, Schema, TypedRecord};
use serde_json::{Map, Value, json};
use tracing::info;

/// Reads and parses a JSON document.
pub fn read_json(path: &Path) -> Result<Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Loads and validates a schema file.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading schema {}", path.display()))?;
    let schema = Schema::from_json(&text)
        .with_context(|| format!("invalid schema {}", path.display()))?;
    info!(path = %path.display(), fields = schema.len(), "Schema loaded");
    Ok(schema)
}

/// Raw record to typed record. In safe mode per-field errors are reported
/// alongside the data instead of failing the command.
pub fn extract_command(schema: &Schema, record: &Value, safe: bool) -> Result<Value> {
    if !safe {
        let typed = extract(record, schema).context("extraction failed")?;
        return Ok(serde_json::to_value(typed)?);
    }
    let out = safe_extract(record, schema);
    let errors: Map<String, Value> = out
        .errors
        .iter()
        .map(|(k, e)| (k.clone(), Value::String(e.to_string())))
        .collect();
    Ok(json!({ "data": out.data, "errors": errors }))
}

/// Typed input for one logical key: raw JSON converted through the field's
/// own type, so the values file uses the same shapes the store returns.
fn typed_values(schema: &Schema, values: &Value) -> Result<Vec<(String, Option<FieldValue>)>> {
    let Some(map) = values.as_object() else {
        bail!("values document must be an object keyed by field name");
    };
    let mut out = Vec::with_capacity(map.len());
    for (key, raw) in map {
        let Some(field) = schema.get(key) else {
            bail!("field '{key}' is not declared in the schema");
        };
        let value = convert_field_value(raw, field.field_type)
            .with_context(|| format!("value for '{key}'"))?;
        out.push((key.clone(), value));
    }
    Ok(out)
}

/// Values document to an update batch. With `original` (a raw record), only
/// values that differ from it are written.
pub fn updates_command(
    schema: &Schema,
    values: &Value,
    original: Option<&Value>,
    direct: bool,
    validate: bool,
) -> Result<Value> {
    let original: Option<TypedRecord> = original
        .map(|raw| extract(raw, schema))
        .transpose()
        .context("original record could not be extracted")?;

    let mut updater = ListItemUpdater::new(schema);
    for (key, value) in typed_values(schema, values)? {
        let check = match &original {
            Some(record) => ChangeCheck::CompareAgainst(record.get(&key)),
            None => ChangeCheck::Always,
        };
        updater
            .set_field_with(&key, value.as_ref(), check)
            .with_context(|| format!("cannot set '{key}'"))?;
    }
    info!(updates = updater.len(), "Update batch built");

    if validate {
        updater.validate_required()?;
    }
    if direct {
        Ok(Value::Object(updater.direct_updates()))
    } else {
        Ok(serde_json::to_value(updater.updates_for_validate())?)
    }
}

/// One value to its wire string.
pub fn format_command(field_type: FieldType, value: &Value) -> Result<String> {
    let typed = convert_field_value(value, field_type)?;
    Ok(format_value_by_type(typed.as_ref(), field_type)?)
}
