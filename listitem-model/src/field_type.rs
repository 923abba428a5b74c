use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// The wire semantics of a list field.
///
/// Variant names match the store's `TypeAsString` values so a schema can be
/// written in the same vocabulary the store reports (`"URL"` is the only
/// spelling that differs from the Rust name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldType {
    Integer,
    Text,
    Note,
    DateTime,
    Counter,
    Choice,
    Lookup,
    Boolean,
    Number,
    Currency,
    #[serde(rename = "URL")]
    Url,
    Guid,
    MultiChoice,
    User,
    ContentTypeId,
    WorkflowStatus,
    AllDayEvent,
    Attachments,
    TaxonomyFieldType,
    TaxonomyFieldTypeMulti,
    UserMulti,
    LookupMulti,
}

impl FieldType {
    /// Every field type, in declaration order.
    pub const ALL: [FieldType; 22] = [
        Self::Integer,
        Self::Text,
        Self::Note,
        Self::DateTime,
        Self::Counter,
        Self::Choice,
        Self::Lookup,
        Self::Boolean,
        Self::Number,
        Self::Currency,
        Self::Url,
        Self::Guid,
        Self::MultiChoice,
        Self::User,
        Self::ContentTypeId,
        Self::WorkflowStatus,
        Self::AllDayEvent,
        Self::Attachments,
        Self::TaxonomyFieldType,
        Self::TaxonomyFieldTypeMulti,
        Self::UserMulti,
        Self::LookupMulti,
    ];

    /// The store's name for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Text => "Text",
            Self::Note => "Note",
            Self::DateTime => "DateTime",
            Self::Counter => "Counter",
            Self::Choice => "Choice",
            Self::Lookup => "Lookup",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::Currency => "Currency",
            Self::Url => "URL",
            Self::Guid => "Guid",
            Self::MultiChoice => "MultiChoice",
            Self::User => "User",
            Self::ContentTypeId => "ContentTypeId",
            Self::WorkflowStatus => "WorkflowStatus",
            Self::AllDayEvent => "AllDayEvent",
            Self::Attachments => "Attachments",
            Self::TaxonomyFieldType => "TaxonomyFieldType",
            Self::TaxonomyFieldTypeMulti => "TaxonomyFieldTypeMulti",
            Self::UserMulti => "UserMulti",
            Self::LookupMulti => "LookupMulti",
        }
    }

    /// Returns true for types whose value is a list (`;#`-joined on the wire).
    #[must_use]
    pub const fn is_multi(&self) -> bool {
        matches!(
            self,
            Self::MultiChoice | Self::UserMulti | Self::LookupMulti | Self::TaxonomyFieldTypeMulti
        )
    }

    /// Returns true for user and lookup types, which the direct-update API
    /// addresses through an `<field>Id` key.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(
            self,
            Self::User | Self::UserMulti | Self::Lookup | Self::LookupMulti
        )
    }

    /// Returns true for managed-metadata (taxonomy) types.
    #[must_use]
    pub const fn is_taxonomy(&self) -> bool {
        matches!(self, Self::TaxonomyFieldType | Self::TaxonomyFieldTypeMulti)
    }

    /// Returns true for types stored as a number.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Number | Self::Currency | Self::Counter
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownFieldType(s.to_string()))
    }
}
