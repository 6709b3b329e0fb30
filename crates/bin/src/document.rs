//! Loading the input document into a store.

use std::io::{IsTerminal, Read};

use keypath::Store;

use crate::cli::Cli;

/// Load the store selected by the CLI flags.
///
/// Reads `--input` when given, otherwise stdin unless it is a terminal. With
/// no input at all, or an input that is only whitespace, the store starts empty.
pub fn load_store(cli: &Cli) -> Result<Store, Box<dyn std::error::Error>> {
    let text = match &cli.input {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading document");
            std::fs::read_to_string(path)?
        }
        None if !std::io::stdin().is_terminal() => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
        None => String::new(),
    };

    if text.trim().is_empty() {
        tracing::debug!("no input document, starting from an empty store");
        return Ok(Store::new(cli.ignore_case));
    }

    Ok(Store::from_json(&text, cli.ignore_case)?)
}

/// Parse a command-line value as JSON, falling back to a plain string.
///
/// Maps inside the value use the given key comparison mode.
pub fn parse_value(raw: &str, case_insensitive: bool) -> Result<keypath::Value, keypath::Error> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => Ok(keypath::json::convert_value(json, case_insensitive)?),
        Err(_) => Ok(keypath::Value::Text(raw.to_string())),
    }
}
