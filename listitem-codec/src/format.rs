//! Typed value to flat wire string, for the store's validate/form-update API.

use listitem_model::{FieldType, FieldValue};

use crate::error::{CodecError, CodecResult};
use crate::strategy::codec_for;

/// Formats `value` as the wire string for a field of `field_type`.
///
/// `None` formats to `""` for every type, which clears the field. A value
/// whose shape does not fit the type fails with [`CodecError::Conversion`].
pub fn format_value_by_type(value: Option<&FieldValue>, field_type: FieldType) -> CodecResult<String> {
    let Some(value) = value else {
        return Ok(String::new());
    };
    codec_for(field_type)
        .format(value)
        .map_err(|message| CodecError::conversion(field_type, message))
}
