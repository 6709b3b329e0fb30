use keypath::{Store, Value};

/// Reads `path` and clones the value, panicking when it is missing or the walk fails
pub fn value_at(store: &Store, path: &str) -> Value {
    match store.get(path) {
        Ok(Some(value)) => value.clone(),
        Ok(None) => panic!("nothing stored at '{path}'"),
        Err(e) => panic!("get '{path}' failed: {e}"),
    }
}

/// Reads `path` as text
pub fn text_at(store: &Store, path: &str) -> String {
    store
        .get_as::<String>(path)
        .unwrap_or_else(|e| panic!("get '{path}' failed: {e}"))
        .unwrap_or_else(|| panic!("nothing stored at '{path}'"))
}

/// Builds a store holding a small payment payload
pub fn payment_store(case_insensitive: bool) -> Store {
    Store::new(case_insensitive)
        .with("card.number", "5555555555554444")
        .and_then(|s| s.with("card.expMonth", 5))
        .and_then(|s| s.with("card.expYear", 2030))
        .and_then(|s| s.with("currency", "EUR"))
        .and_then(|s| s.with("amount", 1234))
        .and_then(|s| s.with("items[].sku", "A-1"))
        .and_then(|s| s.with("items[0].qty", 2))
        .and_then(|s| s.with("items[].sku", "B-2"))
        .expect("payment payload should build")
}

/// Asserts that top-level keys appear in exactly this order
pub fn assert_keys(store: &Store, expected: &[&str]) {
    let keys: Vec<&str> = store.keys().collect();
    assert_eq!(keys, expected, "unexpected top-level keys");
}
