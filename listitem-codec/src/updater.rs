//! Per-edit-session accumulation of field updates.

use listitem_model::{FieldSchema, FieldValue, PendingUpdate, Schema, TypedRecord};
use serde_json::Value;
use tracing::debug;

use crate::direct_update::{DirectUpdates, add_field_direct_update};
use crate::error::{CodecError, CodecResult};
use crate::format::format_value_by_type;

/// Whether [`ListItemUpdater::set_field_with`] compares against a known
/// original value before recording an update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ChangeCheck<'a> {
    /// Always record the update.
    #[default]
    Always,
    /// Skip the update when the new value equals this original. `None` is a
    /// real original meaning "the field had no value".
    CompareAgainst(Option<&'a FieldValue>),
}

/// Collects validated, formatted updates for one item.
///
/// Each wire name appears at most once: setting a field again replaces the
/// pending value in place, so the last write wins. Reading the updates does
/// not consume them; call [`clear`](Self::clear) between save cycles.
#[derive(Debug, Clone)]
pub struct ListItemUpdater<'s> {
    schema: &'s Schema,
    updates: Vec<PendingUpdate>,
}

impl<'s> ListItemUpdater<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            updates: Vec::new(),
        }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Sets a field unconditionally.
    pub fn set_field(&mut self, key: &str, value: impl Into<FieldValue>) -> CodecResult<&mut Self> {
        let value = value.into();
        self.set_field_with(key, Some(&value), ChangeCheck::Always)
    }

    /// Records an update that clears the field.
    pub fn clear_field(&mut self, key: &str) -> CodecResult<&mut Self> {
        self.set_field_with(key, None, ChangeCheck::Always)
    }

    /// Sets a field unless `value` equals `original`.
    pub fn set_field_if_changed(
        &mut self,
        key: &str,
        value: Option<&FieldValue>,
        original: Option<&FieldValue>,
    ) -> CodecResult<&mut Self> {
        self.set_field_with(key, value, ChangeCheck::CompareAgainst(original))
    }

    /// Validates, formats and records one field update.
    ///
    /// Fails if `key` is not in the schema or the field is readonly; both
    /// checks run before any comparison. A formatting failure leaves earlier
    /// updates untouched.
    pub fn set_field_with(
        &mut self,
        key: &str,
        value: Option<&FieldValue>,
        check: ChangeCheck<'_>,
    ) -> CodecResult<&mut Self> {
        let field = self.writable_field(key)?;

        if let ChangeCheck::CompareAgainst(original) = check {
            if value == original {
                debug!(field = %key, "Value unchanged, update skipped");
                return Ok(self);
            }
        }

        let wire_value = format_value_by_type(value, field.field_type)?;
        let wire_name = field.wire_name.clone();
        debug!(field = %key, wire_name = %wire_name, "Field update recorded");
        self.record(wire_name, wire_value);
        Ok(self)
    }

    /// Records every writable field whose value in `current` differs from
    /// `original`. Readonly fields are skipped.
    pub fn set_changed_fields(
        &mut self,
        current: &TypedRecord,
        original: &TypedRecord,
    ) -> CodecResult<&mut Self> {
        let schema = self.schema;
        for (key, field) in schema {
            if field.readonly {
                continue;
            }
            self.set_field_with(key, current.get(key), ChangeCheck::CompareAgainst(original.get(key)))?;
        }
        Ok(self)
    }

    fn writable_field(&self, key: &str) -> CodecResult<&'s FieldSchema> {
        let field = self
            .schema
            .get(key)
            .ok_or_else(|| CodecError::UnknownField(key.to_string()))?;
        if field.readonly {
            return Err(CodecError::ReadonlyField(key.to_string()));
        }
        Ok(field)
    }

    fn record(&mut self, wire_name: String, wire_value: String) {
        match self.updates.iter_mut().find(|u| u.wire_name == wire_name) {
            Some(existing) => existing.wire_value = wire_value,
            None => self.updates.push(PendingUpdate {
                wire_name,
                wire_value,
            }),
        }
    }

    /// The accumulated flat updates, in the order fields were first set.
    pub fn updates_for_validate(&self) -> &[PendingUpdate] {
        &self.updates
    }

    /// The accumulated updates in the direct object update shape.
    pub fn direct_updates(&self) -> DirectUpdates {
        let mut out = DirectUpdates::new();
        for update in &self.updates {
            match self.schema.by_wire_name(&update.wire_name) {
                Some((_, field)) => add_field_direct_update(&mut out, field, &update.wire_value),
                None => {
                    out.insert(
                        update.wire_name.clone(),
                        Value::String(update.wire_value.clone()),
                    );
                }
            }
        }
        out
    }

    /// Logical keys of required fields with no pending update.
    ///
    /// A field counts as set once it has been touched, even if it was set to
    /// an empty value.
    pub fn missing_required_fields(&self) -> Vec<String> {
        self.schema
            .iter()
            .filter(|(_, f)| f.required)
            .filter(|(_, f)| !self.updates.iter().any(|u| u.wire_name == f.wire_name))
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Fails with [`CodecError::MissingRequiredFields`] if any required field
    /// was never set.
    pub fn validate_required(&self) -> CodecResult<()> {
        let missing = self.missing_required_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CodecError::MissingRequiredFields(missing))
        }
    }

    pub fn validate_and_get_updates_for_validate(&self) -> CodecResult<&[PendingUpdate]> {
        self.validate_required()?;
        Ok(self.updates_for_validate())
    }

    pub fn validate_and_get_direct_updates(&self) -> CodecResult<DirectUpdates> {
        self.validate_required()?;
        Ok(self.direct_updates())
    }

    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Drops every pending update; the schema is kept.
    pub fn clear(&mut self) {
        self.updates.clear();
    }
}
