//! Ablatio Metrics: centrality metrics behind a single trait.
//!
//! The impact engine only sees [`CentralityMetric`] and [`MetricRegistry`].
//! This crate also ships the standard metric set:
//!
//! - `degree`, `unnormalized_degree`
//! - `betweenness`
//! - `closeness`
//! - `eigenvector`
//! - `katz`
//!
//! ```
//! use ablatio_graph::{Edge, Graph};
//! use ablatio_metrics::MetricRegistry;
//!
//! let graph = Graph::from_edges(false, vec![Edge::new("a", "b"), Edge::new("a", "c")]);
//! let registry = MetricRegistry::default();
//! let scores = registry.get("degree").unwrap().compute(&graph).unwrap();
//! assert_eq!(scores[&"a"], 1.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod centrality;
pub mod error;
pub mod metric;
pub mod registry;

#[cfg(test)]
mod proptests;

pub use error::MetricError;
pub use metric::{CentralityMetric, CentralityResult, FnMetric};
pub use registry::{MetricRegistry, STANDARD_METRICS, SharedMetric};
