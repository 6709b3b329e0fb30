//! Contains command - reports whether a key path resolves to a value.

use keypath::Store;

use crate::cli::PathArgs;
use crate::output::OutputFormat;

/// Run the contains command
pub fn run(
    store: &Store,
    args: &PathArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let found = store.contains(&args.path)?;

    match format {
        OutputFormat::Human => println!("{found}"),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": args.path,
                "contains": found,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
