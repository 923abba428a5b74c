use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use listitem_model::FieldValue;
use serde_json::Value;

use super::json_kind;
use crate::strategy::{Entries, FieldCodec, Reason};

/// DateTime fields. The wire form is ISO-8601 in UTC with milliseconds.
pub(crate) struct DateTimeCodec;

/// `2024-03-01T12:00:00.000Z`
pub(crate) fn iso_string(d: &DateTime<Utc>) -> String {
    d.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accepts RFC 3339, a zone-less date-time (read as UTC) or a bare date
/// (midnight UTC).
pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, Reason> {
    let s = s.trim();
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Ok(d.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("'{s}' is not a valid date"))
}

fn from_millis(ms: f64) -> Result<DateTime<Utc>, Reason> {
    if !ms.is_finite() {
        return Err(format!("{ms} is not a valid timestamp"));
    }
    Utc.timestamp_millis_opt(ms as i64)
        .single()
        .ok_or_else(|| format!("{ms} is out of range for a timestamp"))
}

impl FieldCodec for DateTimeCodec {
    fn format(&self, value: &FieldValue) -> Result<String, Reason> {
        let d = match value {
            FieldValue::DateTime(d) => *d,
            FieldValue::Text(s) => parse_datetime(s)?,
            FieldValue::Number(ms) => from_millis(*ms)?,
            other => return Err(format!("expected a date, got {}", other.kind())),
        };
        Ok(iso_string(&d))
    }

    fn expand(&self, key: &str, formatted: &str) -> Result<Entries, Reason> {
        let d = parse_datetime(formatted)?;
        Ok(vec![(key.to_string(), Value::String(iso_string(&d)))])
    }

    fn clear(&self, key: &str) -> Entries {
        vec![(key.to_string(), Value::String(String::new()))]
    }

    fn parse(&self, raw: &Value) -> Result<FieldValue, Reason> {
        let d = match raw {
            Value::String(s) => parse_datetime(s)?,
            Value::Number(n) => from_millis(n.as_f64().unwrap_or(f64::NAN))?,
            other => return Err(format!("expected a date, got {}", json_kind(other))),
        };
        Ok(FieldValue::DateTime(d))
    }
}
