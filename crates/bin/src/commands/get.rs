//! Get command - prints the value at a key path.

use keypath::Store;

use crate::cli::PathArgs;
use crate::output::{OutputFormat, print_value};

/// Run the get command
pub fn run(
    store: &Store,
    args: &PathArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match store.get(&args.path)? {
        Some(value) => print_value(value, format),
        None => Err(format!("not found: {}", args.path).into()),
    }
}
