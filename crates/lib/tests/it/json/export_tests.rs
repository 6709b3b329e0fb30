//! Exporting stores back to JSON

use keypath::{Store, Value};

use crate::helpers::*;

#[test]
fn test_compact_export_keeps_order() {
    let store = Store::new(false)
        .with("card.number", "5555555555554444")
        .and_then(|s| s.with("card.cvc", "123"))
        .and_then(|s| s.with("currency", "USD"))
        .and_then(|s| s.with("amount", 1234))
        .unwrap();

    assert_eq!(
        store.to_json_string().unwrap(),
        r#"{"card":{"number":"5555555555554444","cvc":"123"},"currency":"USD","amount":1234}"#
    );
}

#[test]
fn test_export_lists_and_scalars() {
    let store = payment_store(false);
    let json = store.to_json_value();

    assert_eq!(json["items"][0]["sku"], "A-1");
    assert_eq!(json["items"][0]["qty"], 2);
    assert_eq!(json["items"][1]["sku"], "B-2");
    assert_eq!(json["card"]["expYear"], 2030);
}

#[test]
fn test_round_trip_through_text() {
    let text = r#"{"user":{"name":"andrea","tags":["a","b"],"score":1.5,"none":null,"ok":true}}"#;
    let store = Store::from_json(text, false).unwrap();

    assert_eq!(store.to_json_string().unwrap(), text);
    let reparsed = Store::from_json(&store.to_json_string_pretty().unwrap(), false).unwrap();
    assert_eq!(reparsed, store);
}

#[test]
fn test_folded_store_exports_original_spelling() {
    let mut store = Store::new(true);
    store.put("User.FirstName", "andrea").unwrap();
    store.put("USER.firstname", "andrea m.").unwrap();

    assert_eq!(store.to_json_string().unwrap(), r#"{"User":{"FirstName":"andrea m."}}"#);
}

#[test]
fn test_serialize_matches_to_json_value() {
    let store = payment_store(false);
    let via_serde = serde_json::to_value(&store).unwrap();
    assert_eq!(via_serde, store.to_json_value());
}

#[test]
fn test_non_finite_float_exports_as_null() {
    let mut store = Store::new(false);
    store.put("bad", f64::NAN).unwrap();

    assert_eq!(store.to_json_value()["bad"], serde_json::Value::Null);
    assert_eq!(value_at(&store, "bad").type_name(), "float");
    assert!(matches!(value_at(&store, "bad"), Value::Float(f) if f.is_nan()));
}
