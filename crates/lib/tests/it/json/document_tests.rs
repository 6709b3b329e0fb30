//! Loading stores from JSON documents

use keypath::{Store, StoreError, Value, json::LIST_KEY};

use crate::helpers::*;

#[test]
fn test_nested_object_document() {
    let store = Store::from_json(r#"{"user":{"name":"andrea","surname":"rizzini"}}"#, false).unwrap();

    assert!(store.contains("user").unwrap());
    assert_eq!(text_at(&store, "user.name"), "andrea");
    assert_eq!(text_at(&store, "user.surname"), "rizzini");
}

#[test]
fn test_list_of_objects_document() {
    let store = Store::from_json(r#"[{"name":"andrea"}]"#, false).unwrap();

    assert!(store.contains(LIST_KEY).unwrap());
    assert_eq!(text_at(&store, "list[0].name"), "andrea");
    assert_keys(&store, &["list"]);
}

#[test]
fn test_list_of_scalars_document() {
    let store = Store::from_json("[1, \"two\", null, [3, 4]]", false).unwrap();

    assert_eq!(value_at(&store, "list[0]"), 1);
    assert_eq!(text_at(&store, "list[1]"), "two");
    assert!(value_at(&store, "list[2]").is_null());
    assert_eq!(value_at(&store, "list[3]"), Value::from(vec![3, 4]));
}

#[test]
fn test_document_member_order_is_kept() {
    let store = Store::from_json(r#"{"z":1,"a":2,"m":{"y":1,"b":2}}"#, false).unwrap();

    assert_keys(&store, &["z", "a", "m"]);
    let inner = value_at(&store, "m");
    assert_eq!(inner.as_map().unwrap().keys().collect::<Vec<_>>(), vec!["y", "b"]);
}

#[test]
fn test_document_keys_are_read_as_paths() {
    let store = Store::from_json(r#"{"card.number":"4444","tags[]":"x"}"#, false).unwrap();

    assert_eq!(text_at(&store, "card.number"), "4444");
    assert_eq!(text_at(&store, "tags[0]"), "x");
    assert_keys(&store, &["card", "tags"]);
}

#[test]
fn test_empty_top_level_key_loads() {
    let store = Store::from_json(r#"{"": 1, "ok": 2}"#, false).unwrap();

    assert_keys(&store, &["", "ok"]);
    assert_eq!(value_at(&store, ""), 1);
    assert_eq!(value_at(&store, "ok"), 2);
    assert!(store.contains("").unwrap());
}

#[test]
fn test_loaded_store_is_writable() {
    let mut store = Store::from_json(r#"{"items":[{"sku":"A"}]}"#, false).unwrap();
    store.put("items[].sku", "B").unwrap();
    store.put("items[0].qty", 3).unwrap();

    assert_eq!(text_at(&store, "items[1].sku"), "B");
    assert_eq!(value_at(&store, "items[0].qty"), 3);
}

#[test]
fn test_numbers_map_to_int_or_float() {
    let store = Store::from_json(r#"{"i":12,"neg":-3,"f":2.5,"e":1e3,"huge":1e400}"#, false);
    // serde_json rejects out-of-range floats at decode time
    assert!(store.unwrap_err().is_malformed_document());

    let store = Store::from_json(r#"{"i":12,"neg":-3,"f":2.5,"e":1e3}"#, false).unwrap();
    assert_eq!(value_at(&store, "i"), Value::Int(12));
    assert_eq!(value_at(&store, "neg"), Value::Int(-3));
    assert_eq!(value_at(&store, "f"), Value::Float(2.5));
    assert_eq!(value_at(&store, "e"), Value::Float(1000.0));
}

#[test]
fn test_malformed_documents() {
    for text in ["", "   ", "not json", "42", "true", "\"s\"", "{\"a\":", "[1,"] {
        let err = Store::from_json(text, false).unwrap_err();
        assert!(err.is_malformed_document(), "'{text}' gave {err:?}");
        assert!(
            matches!(err, keypath::Error::Store(StoreError::MalformedDocument { .. })),
            "'{text}' gave {err:?}"
        );
    }
}

#[test]
fn test_ambiguous_arrays_are_rejected() {
    for text in [
        r#"{"a":[{"k":1},"x"]}"#,
        r#"{"a":["x",{"k":1}]}"#,
        r#"{"a":[[1],{"k":1}]}"#,
        r#"[{"k":1},2]"#,
    ] {
        let err = Store::from_json(text, false).unwrap_err();
        assert!(
            matches!(err, keypath::Error::Store(StoreError::AmbiguousArrayContent { .. })),
            "'{text}' gave {err:?}"
        );
    }
}

#[test]
fn test_nested_arrays_are_typed_independently() {
    let store = Store::from_json(r#"{"grid":[[{"k":1}],[2]]}"#, false).unwrap();

    assert_eq!(value_at(&store, "grid[1]"), Value::from(vec![2]));
    let first = value_at(&store, "grid[0]");
    assert!(first.as_list().unwrap().is_map_list());
}

#[test]
fn test_empty_containers() {
    let store = Store::from_json(r#"{"obj":{},"arr":[]}"#, false).unwrap();

    assert!(value_at(&store, "obj").as_map().unwrap().is_empty());
    assert!(value_at(&store, "arr").as_list().unwrap().is_empty());
    assert!(Store::from_json("{}", false).unwrap().is_empty());

    let wrapped = Store::from_json("[]", false).unwrap();
    assert!(value_at(&wrapped, "list").as_list().unwrap().is_empty());
}

#[test]
fn test_case_folded_collision_last_wins() {
    let store = Store::from_json(r#"{"Amount":1,"amount":2}"#, true).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(value_at(&store, "AMOUNT"), 2);

    let store = Store::from_json(r#"{"Amount":1,"amount":2}"#, false).unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_from_json_value() {
    let json = serde_json::json!({ "user": { "name": "andrea" }, "n": [1, 2] });
    let store = Store::from_json_value(json, false).unwrap();

    assert_eq!(text_at(&store, "user.name"), "andrea");
    assert_eq!(value_at(&store, "n[1]"), 2);

    let err = Store::from_json_value(serde_json::json!(7), false).unwrap_err();
    assert!(err.is_malformed_document());
}
