//! Put command - writes a value and prints the resulting document.

use keypath::Store;

use crate::cli::PutArgs;
use crate::document::parse_value;
use crate::output::{OutputFormat, print_store};

/// Run the put command
pub fn run(
    mut store: Store,
    args: &PutArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(&args.value, store.is_case_insensitive())?;
    tracing::debug!(path = %args.path, kind = value.type_name(), "put");
    store.put(&args.path, value)?;
    print_store(&store, format)
}
