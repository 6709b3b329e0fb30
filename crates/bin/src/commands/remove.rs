//! Remove command - deletes a value and prints the resulting document.

use keypath::Store;

use crate::cli::PathArgs;
use crate::output::{OutputFormat, print_store};

/// Run the remove command
pub fn run(
    mut store: Store,
    args: &PathArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !store.remove(&args.path)? {
        tracing::warn!(path = %args.path, "nothing to remove");
    }
    print_store(&store, format)
}
