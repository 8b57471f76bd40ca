//! relcat - release catalog queries

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use relcat_cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    relcat_cli::run(cli).await
}
