//! Builder, mapping constructors, merging and enumeration

use keypath::{Node, Store, Value};

use crate::helpers::*;

#[test]
fn test_with_chain_builds_payload() {
    let store = payment_store(false);

    assert_keys(&store, &["card", "currency", "amount", "items"]);
    assert_eq!(text_at(&store, "card.number"), "5555555555554444");
    assert_eq!(value_at(&store, "card.expYear"), 2030);
}

#[test]
fn test_with_propagates_errors() {
    let result = Store::new(false).with("a", 1).and_then(|s| s.with("a.b", 2));
    assert!(result.unwrap_err().is_type_mismatch());

    let result = Store::new(false).with("a[x]", 1);
    assert!(result.unwrap_err().is_malformed_path());
}

#[test]
fn test_from_mapping_reads_keys_as_paths() {
    let store = Store::from_mapping(
        vec![
            ("user.name", Value::from("andrea")),
            ("tags[]", Value::from("a")),
            ("tags[]", Value::from("b")),
            ("plain", Value::from(1)),
        ],
        false,
    )
    .unwrap();

    assert_keys(&store, &["user", "tags", "plain"]);
    assert_eq!(text_at(&store, "user.name"), "andrea");
    assert_eq!(value_at(&store, "tags"), Value::from(vec!["a", "b"]));
}

#[test]
fn test_from_mapping_refolds_nested_nodes() {
    let mut inner = Node::new(false);
    inner.insert("Name", "andrea");
    let mut cards = keypath::List::new();
    let mut card = Node::new(false);
    card.insert("Number", "4444");
    cards.push(card);
    inner.insert("Cards", cards);

    let store = Store::from_mapping([("User", inner)], true).unwrap();

    assert!(store.is_case_insensitive());
    assert_eq!(text_at(&store, "user.name"), "andrea");
    assert_eq!(text_at(&store, "USER.CARDS[0].NUMBER"), "4444");

    // Maps created later under the refolded node inherit its mode
    let mut store = store;
    store.put("user.Address.City", "Milano").unwrap();
    assert_eq!(text_at(&store, "USER.address.city"), "Milano");
}

#[test]
fn test_from_mapping_rejects_mixed_lists() {
    let mixed: keypath::List = vec![Value::Map(Node::new(false)), Value::Int(1)].into();
    let err = Store::from_mapping([("a", mixed)], false).unwrap_err();
    assert!(err.is_malformed_document());
}

#[test]
fn test_merge_all_puts_each_top_level_key() {
    let mut store = payment_store(false);
    let mut other = Node::new(false);
    other.insert("currency", "USD");
    other.insert("card.cvc", "123");
    other.insert("metadata", Node::new(false));

    store.merge_all(other).unwrap();

    assert_eq!(text_at(&store, "currency"), "USD");
    assert_eq!(text_at(&store, "card.cvc"), "123");
    assert!(value_at(&store, "metadata").is_map());
    assert_keys(&store, &["card", "currency", "amount", "items", "metadata"]);
}

#[test]
fn test_enumeration_in_insertion_order() {
    let store = payment_store(false);

    let kinds: Vec<(&str, &str)> = store.iter().map(|(k, v)| (k, v.type_name())).collect();
    assert_eq!(
        kinds,
        vec![("card", "map"), ("currency", "text"), ("amount", "int"), ("items", "list")]
    );
    assert_eq!(store.values().count(), 4);
    assert_eq!(store.len(), 4);

    let owned: Vec<String> = store.clone().into_iter().map(|(k, _)| k).collect();
    assert_eq!(owned, vec!["card", "currency", "amount", "items"]);
}

#[test]
fn test_clear_empties_store() {
    let mut store = payment_store(false);
    store.clear();

    assert!(store.is_empty());
    assert!(!store.contains("card").unwrap());
    assert!(!store.is_case_insensitive());
}

#[test]
fn test_store_from_node_keeps_mode() {
    let mut root = Node::new(true);
    root.insert("Key", 1);
    let store = Store::from(root);

    assert!(store.is_case_insensitive());
    assert_eq!(value_at(&store, "KEY"), 1);
    assert_eq!(store.as_node().len(), 1);
    assert_eq!(store.into_node().keys().collect::<Vec<_>>(), vec!["Key"]);
}
