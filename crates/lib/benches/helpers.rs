//! Shared helpers for benchmarks

use keypath::Store;

/// Creates a store with `count` top-level maps, each holding a short list of line items
pub fn populated_store(count: usize, case_insensitive: bool) -> Store {
    let mut store = Store::new(case_insensitive);
    for i in 0..count {
        store
            .put(&format!("order_{i}.id"), i as i64)
            .expect("Failed to put id");
        for line in 0..3 {
            store
                .put(&format!("order_{i}.lines[].sku"), format!("SKU-{i}-{line}"))
                .expect("Failed to put line");
        }
    }
    store
}

/// Builds a JSON object document with `count` members shaped like `populated_store`
pub fn json_document(count: usize) -> String {
    let members: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#""order_{i}":{{"id":{i},"lines":[{{"sku":"SKU-{i}-0"}},{{"sku":"SKU-{i}-1"}},{{"sku":"SKU-{i}-2"}}]}}"#
            )
        })
        .collect();
    format!("{{{}}}", members.join(","))
}
