//! CLI argument definitions for the keypath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Plain text for terminals
    Human,
    /// Compact JSON for scripts
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Read and edit JSON documents with dotted key paths
#[derive(Parser, Debug)]
#[command(name = "keypath")]
#[command(about = "Read and edit JSON documents with key paths like 'card.number' or 'items[0].sku'")]
#[command(version)]
pub struct Cli {
    /// JSON document to load. Reads stdin when omitted and stdin is not a terminal.
    #[arg(short, long, global = true, env = "KEYPATH_INPUT")]
    pub input: Option<PathBuf>,

    /// Compare keys without regard to letter case
    #[arg(long, global = true, env = "KEYPATH_IGNORE_CASE")]
    pub ignore_case: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "human")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a key path
    Get(PathArgs),
    /// Report whether a value exists at a key path
    Contains(PathArgs),
    /// Set a value at a key path and print the resulting document
    Put(PutArgs),
    /// Remove the value at a key path and print the resulting document
    Remove(PathArgs),
    /// List the top-level keys and the kind of each value
    Keys,
}

/// Arguments for commands that take a single key path
#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Key path, e.g. 'user.cards[0].number' or 'items[]'
    pub path: String,
}

/// Arguments for the put command
#[derive(clap::Args, Debug)]
pub struct PutArgs {
    /// Key path to write
    pub path: String,

    /// Value to store. Parsed as JSON, falling back to a plain string.
    pub value: String,
}
