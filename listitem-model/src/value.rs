//! Typed field values as the application sees them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a user principal. The store hands out numeric site-user
/// ids, but some callers only know a string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrincipalId {
    Numeric(i64),
    Key(String),
}

impl PrincipalId {
    /// Parses a textual id, preferring the numeric form.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Key(trimmed.to_string()),
        }
    }

    /// The numeric id, if this id is numeric or a numeric string.
    #[must_use]
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Key(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Key(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PrincipalId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<i32> for PrincipalId {
    fn from(id: i32) -> Self {
        Self::Numeric(i64::from(id))
    }
}

impl From<&str> for PrincipalId {
    fn from(id: &str) -> Self {
        Self::Key(id.to_string())
    }
}

impl From<String> for PrincipalId {
    fn from(id: String) -> Self {
        Self::Key(id)
    }
}

/// A reference to a user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: PrincipalId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_name: Option<String>,
}

impl Principal {
    pub fn new(id: impl Into<PrincipalId>) -> Self {
        Self {
            id: id.into(),
            email: None,
            display_name: None,
            login_name: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_login_name(mut self, login: &str) -> Self {
        self.login_name = Some(login.into());
        self
    }
}

/// A resolved lookup reference: the target item's id and, when expanded,
/// its display value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupValue {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LookupValue {
    pub fn new(id: i64) -> Self {
        Self { id, title: None }
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A managed-metadata term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyValue {
    pub label: String,
    pub term_id: String,
}

impl TaxonomyValue {
    pub fn new(label: &str, term_id: &str) -> Self {
        Self {
            label: label.into(),
            term_id: term_id.into(),
        }
    }
}

/// The typed value of one field.
///
/// Absence is modelled by the surrounding `Option` (or a missing key in a
/// [`TypedRecord`](crate::TypedRecord)), never by a variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    User(Principal),
    UserMulti(Vec<Principal>),
    Lookup(LookupValue),
    LookupMulti(Vec<LookupValue>),
    MultiChoice(Vec<String>),
    Taxonomy(TaxonomyValue),
    TaxonomyMulti(Vec<TaxonomyValue>),
}

impl FieldValue {
    /// Short name of the variant, used in conversion error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::DateTime(_) => "date",
            Self::User(_) => "user",
            Self::UserMulti(_) => "user list",
            Self::Lookup(_) => "lookup",
            Self::LookupMulti(_) => "lookup list",
            Self::MultiChoice(_) => "string list",
            Self::Taxonomy(_) => "term",
            Self::TaxonomyMulti(_) => "term list",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_principal(&self) -> Option<&Principal> {
        match self {
            Self::User(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_principals(&self) -> Option<&[Principal]> {
        match self {
            Self::UserMulti(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_lookup(&self) -> Option<&LookupValue> {
        match self {
            Self::Lookup(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Self::MultiChoice(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_taxonomy(&self) -> Option<&TaxonomyValue> {
        match self {
            Self::Taxonomy(t) => Some(t),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(d: DateTime<Utc>) -> Self {
        Self::DateTime(d)
    }
}

impl From<Principal> for FieldValue {
    fn from(p: Principal) -> Self {
        Self::User(p)
    }
}

impl From<Vec<Principal>> for FieldValue {
    fn from(v: Vec<Principal>) -> Self {
        Self::UserMulti(v)
    }
}

impl From<LookupValue> for FieldValue {
    fn from(l: LookupValue) -> Self {
        Self::Lookup(l)
    }
}

impl From<Vec<LookupValue>> for FieldValue {
    fn from(v: Vec<LookupValue>) -> Self {
        Self::LookupMulti(v)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        Self::MultiChoice(v)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(v: Vec<&str>) -> Self {
        Self::MultiChoice(v.into_iter().map(String::from).collect())
    }
}

impl From<TaxonomyValue> for FieldValue {
    fn from(t: TaxonomyValue) -> Self {
        Self::Taxonomy(t)
    }
}

impl From<Vec<TaxonomyValue>> for FieldValue {
    fn from(v: Vec<TaxonomyValue>) -> Self {
        Self::TaxonomyMulti(v)
    }
}
