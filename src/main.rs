//! CLI entry point for the maze generator

use clap::Parser;
use shapemaze::io::cli::{Cli, MazeBatch};
use tracing_subscriber::EnvFilter;

fn main() -> shapemaze::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut batch = MazeBatch::new(cli)?;
    batch.run()?;
    Ok(())
}
