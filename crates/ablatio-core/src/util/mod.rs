//! Utility modules shared across Ablatio crates.
//!
//! # Modules
//!
//! - [`ids`]: metric name normalization and column titles
//! - [`cancel`]: cooperative cancellation between metric runs

pub mod cancel;
pub mod ids;
