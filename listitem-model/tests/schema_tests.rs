use listitem_model::{FieldSchema, FieldType, ModelError, Schema};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::str::FromStr;

fn make_review_schema() -> Schema {
    Schema::builder()
        .field("title", FieldSchema::text("Title").required())
        .field("assignee", FieldSchema::user("AssigneeId"))
        .field("created", FieldSchema::datetime("Created").readonly())
        .field("practiceArea", FieldSchema::taxonomy("PracticeArea"))
        .build()
        .unwrap()
}

// ── FieldSchema constructors ─────────────────────────────────────

#[test]
fn text_field_defaults() {
    let f = FieldSchema::text("Title");
    assert_eq!(f.wire_name, "Title");
    assert_eq!(f.field_type, FieldType::Text);
    assert!(!f.required);
    assert!(!f.readonly);
    assert!(f.default_value.is_none());
    assert!(f.direct_key.is_none());
}

#[test]
fn builder_flags_stack() {
    let f = FieldSchema::user_multi("Reviewers")
        .required()
        .readonly()
        .with_default(json!([]));
    assert_eq!(f.field_type, FieldType::UserMulti);
    assert!(f.required);
    assert!(f.readonly);
    assert_eq!(f.default_value, Some(json!([])));
}

#[test]
fn shorthand_types() {
    assert_eq!(FieldSchema::note("N").field_type, FieldType::Note);
    assert_eq!(FieldSchema::choice("C").field_type, FieldType::Choice);
    assert_eq!(FieldSchema::multi_choice("M").field_type, FieldType::MultiChoice);
    assert_eq!(FieldSchema::number("N").field_type, FieldType::Number);
    assert_eq!(FieldSchema::boolean("B").field_type, FieldType::Boolean);
    assert_eq!(FieldSchema::lookup("L").field_type, FieldType::Lookup);
    assert_eq!(FieldSchema::lookup_multi("L").field_type, FieldType::LookupMulti);
    assert_eq!(
        FieldSchema::taxonomy_multi("T").field_type,
        FieldType::TaxonomyFieldTypeMulti
    );
}

// ── Schema construction ──────────────────────────────────────────

#[test]
fn schema_lookup_by_key_and_wire_name() {
    let s = make_review_schema();
    assert_eq!(s.len(), 4);
    assert_eq!(s.get("title").unwrap().wire_name, "Title");
    assert!(s.get("missing").is_none());

    let (key, field) = s.by_wire_name("AssigneeId").unwrap();
    assert_eq!(key, "assignee");
    assert_eq!(field.field_type, FieldType::User);
    assert!(s.by_wire_name("Nope").is_none());
}

#[test]
fn schema_iterates_in_key_order() {
    let s = make_review_schema();
    let keys: Vec<&str> = s.keys().collect();
    assert_eq!(keys, vec!["assignee", "created", "practiceArea", "title"]);
}

#[test]
fn schema_required_keys() {
    let s = make_review_schema();
    assert_eq!(s.required_keys(), vec!["title"]);
}

#[test]
fn duplicate_wire_name_rejected() {
    let err = Schema::builder()
        .field("title", FieldSchema::text("Title"))
        .field("heading", FieldSchema::text("Title"))
        .build()
        .unwrap_err();
    match err {
        ModelError::DuplicateWireName { wire_name, first, second } => {
            assert_eq!(wire_name, "Title");
            assert_eq!(first, "heading");
            assert_eq!(second, "title");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_key_rejected() {
    let err = Schema::new(vec![
        ("title", FieldSchema::text("Title")),
        ("title", FieldSchema::text("Other")),
    ])
    .unwrap_err();
    assert!(matches!(err, ModelError::DuplicateKey(k) if k == "title"));
}

#[test]
fn empty_wire_name_rejected() {
    let err = Schema::new(vec![("title", FieldSchema::text(""))]).unwrap_err();
    assert!(matches!(err, ModelError::EmptyWireName(k) if k == "title"));
}

#[test]
fn empty_schema_is_valid() {
    let s = Schema::new(Vec::<(String, FieldSchema)>::new()).unwrap();
    assert!(s.is_empty());
    assert!(s.required_keys().is_empty());
}

// ── JSON form ────────────────────────────────────────────────────

#[test]
fn schema_from_json_uses_store_vocabulary() {
    let s = Schema::from_json(
        r#"{
            "title": { "wireName": "Title", "type": "Text", "required": true },
            "link": { "wireName": "ContractLink", "type": "URL" },
            "areas": { "wireName": "Areas", "type": "TaxonomyFieldTypeMulti", "readonly": true },
            "priority": { "wireName": "Priority", "type": "Choice", "defaultValue": "Normal" }
        }"#,
    )
    .unwrap();

    let title = s.get("title").unwrap();
    assert!(title.required);
    assert!(!title.readonly);
    assert_eq!(s.get("link").unwrap().field_type, FieldType::Url);
    assert!(s.get("areas").unwrap().readonly);
    assert_eq!(s.get("priority").unwrap().default_value, Some(json!("Normal")));
}

#[test]
fn schema_from_json_validates_wire_names() {
    let err = Schema::from_json(
        r#"{
            "a": { "wireName": "Same", "type": "Text" },
            "b": { "wireName": "Same", "type": "Note" }
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::Serialization(_)));
    assert!(err.to_string().contains("Same"));
}

#[test]
fn schema_from_json_rejects_repeated_key() {
    let err = Schema::from_json(
        r#"{
            "a": { "wireName": "First", "type": "Text" },
            "a": { "wireName": "Second", "type": "Text" }
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::Serialization(_)));
    assert!(err.to_string().contains("'a' is declared more than once"));
}

#[test]
fn schema_from_json_reads_direct_key() {
    let s = Schema::from_json(
        r#"{
            "client": { "wireName": "ClientId", "type": "Lookup" },
            "assignee": { "wireName": "AssigneeId", "type": "User", "directKey": "AssigneeId" }
        }"#,
    )
    .unwrap();
    assert_eq!(s.get("client").unwrap().direct_key, None);
    assert_eq!(s.get("assignee").unwrap().direct_key.as_deref(), Some("AssigneeId"));
    assert_eq!(
        s.get("assignee").unwrap(),
        &FieldSchema::user("AssigneeId").with_direct_key("AssigneeId")
    );
}

#[test]
fn schema_serde_roundtrip() {
    let original = make_review_schema();
    let json = serde_json::to_string(&original).unwrap();
    let parsed: Schema = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn field_schema_serializes_camel_case() {
    let json = serde_json::to_value(FieldSchema::lookup("MatterId").required()).unwrap();
    assert_eq!(
        json,
        json!({ "wireName": "MatterId", "type": "Lookup", "required": true, "readonly": false })
    );
}

// ── FieldType ────────────────────────────────────────────────────

#[test]
fn field_type_names_match_store() {
    assert_eq!(FieldType::Url.as_str(), "URL");
    assert_eq!(FieldType::TaxonomyFieldTypeMulti.to_string(), "TaxonomyFieldTypeMulti");
    assert_eq!(serde_json::to_string(&FieldType::Url).unwrap(), "\"URL\"");
}

#[test]
fn field_type_from_str_is_case_insensitive() {
    assert_eq!(FieldType::from_str("usermulti").unwrap(), FieldType::UserMulti);
    assert_eq!(FieldType::from_str("URL").unwrap(), FieldType::Url);
    assert!(matches!(
        FieldType::from_str("Geolocation"),
        Err(ModelError::UnknownFieldType(_))
    ));
}

#[test]
fn field_type_all_roundtrips_through_str() {
    for t in FieldType::ALL {
        assert_eq!(FieldType::from_str(t.as_str()).unwrap(), t);
    }
}

#[test]
fn field_type_families() {
    assert!(FieldType::LookupMulti.is_multi());
    assert!(FieldType::LookupMulti.is_reference());
    assert!(!FieldType::TaxonomyFieldType.is_multi());
    assert!(FieldType::TaxonomyFieldType.is_taxonomy());
    assert!(FieldType::Currency.is_numeric());
    assert!(!FieldType::Text.is_numeric());
}
