//! Ablatio Core: shared errors, configuration, and utilities.
//!
//! This crate provides the foundational types used across all Ablatio crates.
//! It has no internal Ablatio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: TOML configuration
//! - [`util`]: metric name handling and cancellation

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::AblatioConfig;
pub use error::{Error, Result, Selection};

pub use util::cancel::CancellationFlag;
pub use util::ids::{column_title, delta_title, normalize_metric_name};
