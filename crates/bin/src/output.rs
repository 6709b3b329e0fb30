//! Output formatting helpers for human-readable and JSON output.

use keypath::{Store, Value};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a single value.
///
/// Human output prints text without quotes and containers as indented JSON.
pub fn print_value(value: &Value, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let json = keypath::json::to_json_value(value);
    match (format, value) {
        (OutputFormat::Human, Value::Text(text)) => println!("{text}"),
        (OutputFormat::Human, Value::Map(_) | Value::List(_)) => {
            println!("{}", serde_json::to_string_pretty(&json)?)
        }
        (OutputFormat::Human, _) => println!("{value}"),
        (OutputFormat::Json, _) => println!("{}", serde_json::to_string(&json)?),
    }
    Ok(())
}

/// Print a whole document
pub fn print_store(store: &Store, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => println!("{}", store.to_json_string_pretty()?),
        OutputFormat::Json => println!("{}", store.to_json_string()?),
    }
    Ok(())
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    // Calculate column widths (max of header and all row values)
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}
