//! # ablatio-cli
//!
//! Command-line driver for Ablatio:
//! - `analyze`: node-removal impact over several centrality metrics
//! - `bench`: timing single-metric analyses on generated graphs
//! - `layout`: node positions through the structure-keyed layout cache
//! - `metrics`: the registered metric names
//! - `config`: configuration file management
//!
//! Analyses run on a blocking worker; Ctrl-C cancels between metrics.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod error;
pub mod render;
pub mod source;

pub use cli::{Cli, Command};
pub use error::{Error, Result};

use ablatio_core::AblatioConfig;

/// Dispatches a parsed command line.
///
/// Configuration is loaded for every command except `config`, which
/// manages the file itself.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    let load = || AblatioConfig::load(config_path);

    match cli.command {
        Command::Analyze(args) => commands::analyze::run(&load()?, args).await,
        Command::Bench(args) => commands::bench::run(&load()?, args).await,
        Command::Layout(args) => commands::layout::run(&load()?, args).await,
        Command::Metrics => commands::metrics::run(&load()?),
        Command::Config { action } => {
            Ok(config_handlers::handle_config_command(config_path, action)?)
        }
    }
}
