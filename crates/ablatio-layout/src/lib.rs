//! Ablatio Layout: deterministic node positions and their cache.
//!
//! - [`spring_layout`]: seeded Fruchterman–Reingold
//! - [`circular_layout`]: unit circle in insertion order
//! - [`LayoutCache`]: structure-keyed memo shared across calls
//!
//! ```
//! use ablatio_graph::{Edge, Graph};
//! use ablatio_layout::{LayoutAlgorithm, LayoutCache};
//! use std::sync::Arc;
//!
//! let graph = Graph::from_edges(false, vec![Edge::new(1, 2), Edge::new(2, 3)]);
//! let cache = LayoutCache::new();
//! let a = cache.get_or_compute(&graph, LayoutAlgorithm::default());
//! let b = cache.get_or_compute(&graph, LayoutAlgorithm::default());
//! assert!(Arc::ptr_eq(&a, &b));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cache;
pub mod circular;
pub mod spring;
pub mod types;

#[cfg(test)]
mod proptests;

pub use cache::{CacheStats, LayoutCache, LayoutKey};
pub use circular::circular_layout;
pub use spring::spring_layout;
pub use types::{DEFAULT_ITERATIONS, DEFAULT_SEED, LayoutAlgorithm, Point, Positions};

use ablatio_graph::{Graph, NodeId};

/// Computes a layout without caching.
pub fn compute_layout<N: NodeId>(graph: &Graph<N>, algorithm: LayoutAlgorithm) -> Positions<N> {
    match algorithm {
        LayoutAlgorithm::Spring {
            seed,
            iterations,
            k,
        } => spring_layout(graph, seed, iterations, k),
        LayoutAlgorithm::Circular => circular_layout(graph),
    }
}
