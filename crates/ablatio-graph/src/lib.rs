//! Ablatio Graph: the weighted graph model and structural analysis.
//!
//! This crate provides:
//! - [`Graph`]: a petgraph-backed graph with generic node ids and a weight
//!   on every edge
//! - [`GraphBuilder`] / [`GraphDocument`]: construction from edge records
//!   and the JSON graph document
//! - [`algorithms`]: connectivity and diameter, including
//!   [`DiameterSnapshot`]
//! - [`Fingerprint`]: blake3 structural hashes
//! - [`generators`]: seeded random and deterministic graph families

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod algorithms;
pub mod builder;
pub mod fingerprint;
pub mod generators;
pub mod types;

#[cfg(test)]
mod proptests;

// Re-exports
pub use algorithms::{DiameterSnapshot, diameter, is_weakly_connected, weak_component_count};
pub use builder::{BuildStats, GraphBuilder, GraphDocument};
pub use fingerprint::Fingerprint;
pub use generators::{GraphKind, generate};
pub use types::{DEFAULT_WEIGHT, Edge, Graph, NodeId};
