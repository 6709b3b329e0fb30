//! Keys command - lists top-level keys with the kind of each value.

use keypath::{Store, Value};

use crate::output::{OutputFormat, print_table};

/// Run the keys command
pub fn run(store: &Store, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = store
                .iter()
                .map(|(key, value)| {
                    vec![
                        key.to_string(),
                        value.type_name().to_string(),
                        size(value),
                    ]
                })
                .collect();
            print_table(&["KEY", "TYPE", "SIZE"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = store
                .iter()
                .map(|(key, value)| {
                    serde_json::json!({
                        "key": key,
                        "type": value.type_name(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}

/// Element count for containers, blank for scalars
fn size(value: &Value) -> String {
    match value {
        Value::Map(node) => node.len().to_string(),
        Value::List(list) => list.len().to_string(),
        _ => String::new(),
    }
}
