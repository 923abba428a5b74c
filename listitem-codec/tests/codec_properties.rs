//! Property-based tests for the codec's round-trip and empty-value rules.
//!
//! For representative non-empty values of every field type,
//! `convert(format(value)) == value`, and absent values stay absent in both
//! directions.

use chrono::{DateTime, TimeZone, Utc};
use listitem_codec::{convert_field_value, format_value_by_type};
use listitem_model::{FieldType, FieldValue, LookupValue, Principal, PrincipalId, TaxonomyValue};
use proptest::prelude::*;
use serde_json::Value;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

const TEXT_TYPES: [FieldType; 7] = [
    FieldType::Text,
    FieldType::Note,
    FieldType::Choice,
    FieldType::Url,
    FieldType::Guid,
    FieldType::ContentTypeId,
    FieldType::WorkflowStatus,
];

const NUMBER_TYPES: [FieldType; 4] = [
    FieldType::Integer,
    FieldType::Number,
    FieldType::Currency,
    FieldType::Counter,
];

const FLAG_TYPES: [FieldType; 3] = [
    FieldType::Boolean,
    FieldType::AllDayEvent,
    FieldType::Attachments,
];

fn field_type_strategy() -> impl Strategy<Value = FieldType> {
    prop::sample::select(FieldType::ALL.to_vec())
}

fn family_strategy<const N: usize>(types: [FieldType; N]) -> impl Strategy<Value = FieldType> {
    prop::sample::select(types.to_vec())
}

/// Non-empty text, with spaces allowed anywhere including the ends.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 .-]{1,16}").unwrap()
}

fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 |&-]{0,16}").unwrap()
}

fn term_strategy() -> impl Strategy<Value = TaxonomyValue> {
    (label_strategy(), "[a-f0-9]{8}-[a-f0-9]{4}")
        .prop_map(|(label, term_id)| TaxonomyValue { label, term_id })
}

fn principal_id_strategy() -> impl Strategy<Value = PrincipalId> {
    prop_oneof![
        (1i64..1_000_000).prop_map(PrincipalId::Numeric),
        "[a-z][a-z0-9.@-]{0,15}".prop_map(PrincipalId::Key),
    ]
}

fn datetime_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800_000).prop_map(|ms| Utc.timestamp_millis_opt(ms).unwrap())
}

fn round_trip(value: &FieldValue, field_type: FieldType) -> Option<FieldValue> {
    let wire = format_value_by_type(Some(value), field_type).unwrap();
    convert_field_value(&Value::String(wire), field_type).unwrap()
}

/// A fixed representative value for every type; the match is exhaustive so a
/// new type cannot go uncovered.
fn sample_value(field_type: FieldType) -> FieldValue {
    match field_type {
        FieldType::Text
        | FieldType::Note
        | FieldType::Choice
        | FieldType::Url
        | FieldType::Guid
        | FieldType::ContentTypeId
        | FieldType::WorkflowStatus => FieldValue::Text(" In Review ".into()),
        FieldType::Integer | FieldType::Counter => FieldValue::Number(42.0),
        FieldType::Number | FieldType::Currency => FieldValue::Number(1250.75),
        FieldType::Boolean | FieldType::AllDayEvent | FieldType::Attachments => {
            FieldValue::Boolean(true)
        }
        FieldType::DateTime => {
            FieldValue::DateTime(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        }
        FieldType::User => FieldValue::User(Principal::new(7)),
        FieldType::UserMulti => FieldValue::UserMulti(vec![Principal::new(1), Principal::new(2)]),
        FieldType::Lookup => FieldValue::Lookup(LookupValue::new(3)),
        FieldType::LookupMulti => {
            FieldValue::LookupMulti(vec![LookupValue::new(3), LookupValue::new(4)])
        }
        FieldType::MultiChoice => FieldValue::MultiChoice(vec!["High ".into(), "".into(), "Low".into()]),
        FieldType::TaxonomyFieldType => {
            FieldValue::Taxonomy(TaxonomyValue::new(" Finance", "abc-123"))
        }
        FieldType::TaxonomyFieldTypeMulti => FieldValue::TaxonomyMulti(vec![
            TaxonomyValue::new("Finance", "abc-123"),
            TaxonomyValue::new("Legal ", "def-456"),
        ]),
    }
}

// =============================================================================
// EMPTY VALUES
// =============================================================================

proptest! {
    #[test]
    fn absent_formats_to_empty(field_type in field_type_strategy()) {
        prop_assert_eq!(format_value_by_type(None, field_type).unwrap(), "");
    }

    #[test]
    fn empty_raw_converts_to_none(field_type in field_type_strategy()) {
        prop_assert_eq!(convert_field_value(&Value::String(String::new()), field_type).unwrap(), None);
        prop_assert_eq!(convert_field_value(&Value::Null, field_type).unwrap(), None);
    }
}

// =============================================================================
// ROUND TRIPS
// =============================================================================

proptest! {
    #[test]
    fn every_type_round_trips_its_sample(field_type in field_type_strategy()) {
        let value = sample_value(field_type);
        prop_assert_eq!(round_trip(&value, field_type), Some(value));
    }

    #[test]
    fn text_round_trips(field_type in family_strategy(TEXT_TYPES), s in word_strategy()) {
        let value = FieldValue::Text(s);
        prop_assert_eq!(round_trip(&value, field_type), Some(value));
    }

    #[test]
    fn number_round_trips(field_type in family_strategy(NUMBER_TYPES), n in -1.0e9f64..1.0e9) {
        let value = FieldValue::Number(n);
        prop_assert_eq!(round_trip(&value, field_type), Some(value));
    }

    #[test]
    fn boolean_round_trips(field_type in family_strategy(FLAG_TYPES), b in any::<bool>()) {
        let value = FieldValue::Boolean(b);
        prop_assert_eq!(round_trip(&value, field_type), Some(value));
    }

    #[test]
    fn datetime_round_trips(d in datetime_strategy()) {
        let value = FieldValue::DateTime(d);
        prop_assert_eq!(round_trip(&value, FieldType::DateTime), Some(value));
    }

    #[test]
    fn user_round_trips(id in principal_id_strategy()) {
        let value = FieldValue::User(Principal::new(id));
        prop_assert_eq!(round_trip(&value, FieldType::User), Some(value));
    }

    #[test]
    fn user_multi_round_trips(ids in prop::collection::vec(principal_id_strategy(), 1..6)) {
        let value = FieldValue::UserMulti(ids.into_iter().map(Principal::new).collect());
        prop_assert_eq!(round_trip(&value, FieldType::UserMulti), Some(value));
    }

    #[test]
    fn lookup_round_trips(id in 1i64..1_000_000) {
        let value = FieldValue::Lookup(LookupValue::new(id));
        prop_assert_eq!(round_trip(&value, FieldType::Lookup), Some(value));
    }

    #[test]
    fn lookup_multi_round_trips(ids in prop::collection::vec(1i64..1_000_000, 1..6)) {
        let value = FieldValue::LookupMulti(ids.into_iter().map(LookupValue::new).collect());
        prop_assert_eq!(round_trip(&value, FieldType::LookupMulti), Some(value));
    }

    #[test]
    fn multi_choice_round_trips(
        first in word_strategy(),
        rest in prop::collection::vec(prop_oneof![Just(String::new()), word_strategy()], 0..4),
        last in word_strategy(),
    ) {
        // Only the first and last items must be non-empty; a leading or
        // trailing empty item is indistinguishable from a stray delimiter.
        let mut choices = vec![first];
        choices.extend(rest);
        choices.push(last);
        let value = FieldValue::MultiChoice(choices);
        prop_assert_eq!(round_trip(&value, FieldType::MultiChoice), Some(value));
    }

    #[test]
    fn taxonomy_round_trips(term in term_strategy()) {
        let value = FieldValue::Taxonomy(term);
        prop_assert_eq!(round_trip(&value, FieldType::TaxonomyFieldType), Some(value));
    }

    #[test]
    fn taxonomy_multi_round_trips(terms in prop::collection::vec(term_strategy(), 1..5)) {
        let value = FieldValue::TaxonomyMulti(terms);
        prop_assert_eq!(round_trip(&value, FieldType::TaxonomyFieldTypeMulti), Some(value));
    }
}
