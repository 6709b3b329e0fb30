use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod document;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("keypath=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let format = OutputFormat::from(cli.format);
    let store = document::load_store(&cli)?;

    match &cli.command {
        Commands::Get(args) => commands::get::run(&store, args, format),
        Commands::Contains(args) => commands::contains::run(&store, args, format),
        Commands::Put(args) => commands::put::run(store, args, format),
        Commands::Remove(args) => commands::remove::run(store, args, format),
        Commands::Keys => commands::keys::run(&store, format),
    }
}
