//! Per-type conversion strategies.
//!
//! Every [`FieldType`] maps to exactly one [`FieldCodec`], which owns all
//! three directions for that type: typed value to wire string, wire string to
//! direct-update entries, and raw store value to typed value. The match in
//! [`codec_for`] is exhaustive, so adding a type without a strategy does not
//! compile.

use listitem_model::{FieldType, FieldValue};
use serde_json::Value;

use crate::fields::{
    BooleanCodec, ChoiceMultiCodec, DateTimeCodec, LookupCodec, LookupMultiCodec, NumberCodec,
    TaxonomyCodec, TaxonomyMultiCodec, TextCodec, UserCodec, UserMultiCodec,
};

/// Failure reason reported by a strategy; callers attach the field type.
pub(crate) type Reason = String;

/// Direct-update entries produced for one field: `(key, value)` pairs.
pub(crate) type Entries = Vec<(String, Value)>;

pub(crate) trait FieldCodec: Sync {
    /// Serializes a present value to the flat wire string.
    fn format(&self, value: &FieldValue) -> Result<String, Reason>;

    /// Key the direct-update API addresses a field by, when the schema does
    /// not name one.
    fn direct_key(&self, wire_name: &str) -> String {
        wire_name.to_string()
    }

    /// Expands a non-empty wire string into direct-update entries under `key`.
    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason>;

    /// Direct-update entries that clear the field stored under `key`.
    fn clear(&self, key: &str) -> Entries;

    /// Parses a non-empty raw store value.
    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason>;
}

pub(crate) fn codec_for(field_type: FieldType) -> &'static dyn FieldCodec {
    match field_type {
        FieldType::Text
        | FieldType::Note
        | FieldType::Choice
        | FieldType::Url
        | FieldType::Guid
        | FieldType::ContentTypeId
        | FieldType::WorkflowStatus => &TextCodec,
        FieldType::Integer | FieldType::Number | FieldType::Currency | FieldType::Counter => {
            &NumberCodec
        }
        FieldType::Boolean | FieldType::AllDayEvent | FieldType::Attachments => &BooleanCodec,
        FieldType::DateTime => &DateTimeCodec,
        FieldType::User => &UserCodec,
        FieldType::UserMulti => &UserMultiCodec,
        FieldType::Lookup => &LookupCodec,
        FieldType::LookupMulti => &LookupMultiCodec,
        FieldType::MultiChoice => &ChoiceMultiCodec,
        FieldType::TaxonomyFieldType => &TaxonomyCodec,
        FieldType::TaxonomyFieldTypeMulti => &TaxonomyMultiCodec,
    }
}
