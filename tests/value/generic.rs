//! Integration tests for the generic-model bridge
//!
//! Round trips in both directions and whole-structure failure.

use chrono::{DateTime, Utc};
use ferrodoc_value::{
    Array, BinId, ConversionError, Document, Generic, LogicalTimestamp, Value, from_generic,
    to_generic,
};
use proptest::prelude::*;

fn sample_generic() -> Generic {
    let inner: Document<Generic> = [
        ("id", Generic::id("507f1f77bcf86cd799439011")),
        ("bytes", Generic::Binary(vec![1u8, 2, 3].into())),
    ]
    .into_iter()
    .collect();
    let when = DateTime::<Utc>::from_timestamp_millis(1_600_000_000_250).unwrap();
    let items: Array<Generic> = [Generic::Int(1), Generic::Dec(0.5), Generic::Null]
        .into_iter()
        .collect();
    let outer: Document<Generic> = [
        ("z", Generic::str("last letter")),
        ("a", Generic::Bool(true)),
        ("when", Generic::Timestamp(when)),
        ("items", Generic::Arr(items)),
        ("inner", Generic::Obj(inner)),
    ]
    .into_iter()
    .collect();
    Generic::Obj(outer)
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn generic_round_trips() {
    let g = sample_generic();
    let v = from_generic(&g).unwrap();
    assert_eq!(to_generic(&v).unwrap(), g);
}

#[test]
fn value_round_trips() {
    let doc: Document<Value> = [
        ("b", Value::Int64(1)),
        ("a", Value::from("two")),
        ("id", Value::BinId(BinId::from_bytes([9; 12]))),
        ("at", Value::DateTime(bson::DateTime::from_millis(42))),
        ("list", Value::from(vec![Value::Null, Value::Dec(-0.0)])),
    ]
    .into_iter()
    .collect();
    let v = Value::Doc(doc);
    assert_eq!(from_generic(&to_generic(&v).unwrap()).unwrap(), v);
}

#[test]
fn key_order_is_preserved_both_ways() {
    let g = sample_generic();
    let v = from_generic(&g).unwrap();
    let keys: Vec<&str> = v.as_document().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "a", "when", "items", "inner"]);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn one_bad_identifier_fails_the_whole_structure() {
    let bad: Document<Generic> = [("ok", Generic::id("507f1f77bcf86cd799439011")), ("bad", Generic::id("123"))]
        .into_iter()
        .collect();
    let err = from_generic(&Generic::Obj(bad)).unwrap_err();
    assert_eq!(err.input, "123");
}

#[test]
fn unsupported_values_are_reported_not_dropped() {
    assert_eq!(
        to_generic(&Value::MinKey),
        Err(ConversionError::new(Value::MinKey))
    );
    assert_eq!(
        to_generic(&Value::regex("^a")),
        Err(ConversionError::new(Value::regex("^a")))
    );
    let nested = Value::from(vec![
        Value::Int32(1),
        Value::LogicalTimestamp(LogicalTimestamp::new(5, 0)),
    ]);
    let err = to_generic(&nested).unwrap_err();
    assert_eq!(err.value, Value::LogicalTimestamp(LogicalTimestamp::new(5, 0)));
}

#[test]
fn symbol_is_not_text() {
    assert!(to_generic(&Value::Symbol("s".into())).is_err());
    assert_eq!(to_generic(&Value::from("s")).unwrap(), Generic::str("s"));
}

// =============================================================================
// Properties
// =============================================================================

fn convertible_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int64),
        any::<f64>().prop_map(Value::Dec),
        "[a-z]{0,8}".prop_map(|s| Value::from(s.as_str())),
        any::<[u8; 12]>().prop_map(|b| Value::BinId(BinId::from_bytes(b))),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::from),
        (-8_000_000_000_000i64..8_000_000_000_000)
            .prop_map(|ms| Value::DateTime(bson::DateTime::from_millis(ms))),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|fields| Value::Doc(fields.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn convertible_values_round_trip(v in convertible_value()) {
        let g = to_generic(&v).unwrap();
        prop_assert_eq!(from_generic(&g).unwrap(), v);
    }
}
