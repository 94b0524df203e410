//! Ablatio CLI
//!
//! Command-line interface for node-removal impact analysis.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use ablatio_cli::Cli;
use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; `log` records from the library crates are bridged
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ablatio=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, "Starting ablatio");
    ablatio_cli::run(cli).await?;
    Ok(())
}
