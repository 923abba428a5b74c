use chrono::{TimeZone, Utc};
use listitem_model::{
    FieldValue, LookupValue, PendingUpdate, Principal, PrincipalId, TaxonomyValue, TypedRecord,
};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── TypedRecord accessors ────────────────────────────────────────

#[test]
fn typed_record_accessors() {
    let mut r = TypedRecord::new();
    r.insert("title", "Q3 Report".into());
    r.insert("amount", 1250.5.into());
    r.insert("urgent", true.into());

    assert_eq!(r.len(), 3);
    assert_eq!(r.get_str("title"), Some("Q3 Report"));
    assert_eq!(r.get_number("amount"), Some(1250.5));
    assert_eq!(r.get_bool("urgent"), Some(true));
    assert_eq!(r.get_str("amount"), None);
    assert!(!r.contains_key("missing"));
}

#[test]
fn typed_record_insert_replaces() {
    let mut r = TypedRecord::new();
    assert!(r.insert("title", "a".into()).is_none());
    assert_eq!(r.insert("title", "b".into()), Some(FieldValue::from("a")));
    assert_eq!(r.remove("title"), Some(FieldValue::from("b")));
    assert!(r.is_empty());
}

#[test]
fn typed_record_serializes_plain_values() {
    let r: TypedRecord = vec![
        ("title".to_string(), FieldValue::from("Q3")),
        (
            "assignee".to_string(),
            Principal::new(7).with_display_name("Jane").into(),
        ),
        (
            "due".to_string(),
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap().into(),
        ),
        (
            "area".to_string(),
            TaxonomyValue::new("Finance", "abc-123").into(),
        ),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        serde_json::to_value(&r).unwrap(),
        json!({
            "area": { "label": "Finance", "termId": "abc-123" },
            "assignee": { "id": 7, "displayName": "Jane" },
            "due": "2024-03-01T12:00:00Z",
            "title": "Q3"
        })
    );
}

// ── Value shapes ─────────────────────────────────────────────────

#[test]
fn principal_id_parse_prefers_numeric() {
    assert_eq!(PrincipalId::parse(" 42 "), PrincipalId::Numeric(42));
    assert_eq!(
        PrincipalId::parse("i:0#.f|membership|jane@contoso.com"),
        PrincipalId::Key("i:0#.f|membership|jane@contoso.com".into())
    );
    assert_eq!(PrincipalId::from("17").as_numeric(), Some(17));
    assert_eq!(PrincipalId::from("abc").as_numeric(), None);
    assert_eq!(PrincipalId::from(5).to_string(), "5");
}

#[test]
fn principal_deserializes_with_string_or_number_id() {
    let p: Principal = serde_json::from_value(json!({ "id": 3, "email": "a@b.c" })).unwrap();
    assert_eq!(p, Principal::new(3).with_email("a@b.c"));

    let p: Principal = serde_json::from_value(json!({ "id": "key-1" })).unwrap();
    assert_eq!(p.id, PrincipalId::Key("key-1".into()));
}

#[test]
fn field_value_accessors_match_variant() {
    let lookup = FieldValue::from(LookupValue::new(9).with_title("Matter 9"));
    assert_eq!(lookup.as_lookup().unwrap().title.as_deref(), Some("Matter 9"));
    assert!(lookup.as_str().is_none());
    assert_eq!(lookup.kind(), "lookup");

    let choices = FieldValue::from(vec!["A", "B"]);
    assert_eq!(choices.as_choices().unwrap(), &["A".to_string(), "B".to_string()]);
}

#[test]
fn pending_update_uses_store_keys() {
    let u = PendingUpdate::new("Title", "Q3".into());
    assert_eq!(
        serde_json::to_value(&u).unwrap(),
        json!({ "FieldName": "Title", "FieldValue": "Q3" })
    );
    let parsed: PendingUpdate =
        serde_json::from_value(json!({ "wireName": "Title", "wireValue": "Q3" })).unwrap();
    assert_eq!(parsed, u);
}
