//! Ablatio Impact: what happens to a graph when nodes are removed.
//!
//! - [`ImpactCalculator`]: one metric, per-node `new - old`
//! - [`MultiMetricAggregator`]: several metrics merged into an
//!   [`ImpactTable`] with `Combined` / `Δ Combined` sums and a
//!   [`DiameterSnapshot`](ablatio_graph::DiameterSnapshot)
//!
//! ```
//! use ablatio_graph::{Edge, Graph};
//! use ablatio_impact::{MultiMetricAggregator, RemovalSet};
//! use ablatio_metrics::MetricRegistry;
//!
//! let graph = Graph::from_edges(false, vec![Edge::new("hub", "a"), Edge::new("hub", "b")]);
//! let removal: RemovalSet<_> = ["hub"].into_iter().collect();
//!
//! let report = MultiMetricAggregator::new(MetricRegistry::default())
//!     .compute(&graph, &removal, &["degree", "closeness"])
//!     .unwrap();
//! assert!(report.diameter.disconnected());
//! assert_eq!(report.table.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregator;
pub mod calculator;
pub mod report;
pub mod table;

#[cfg(test)]
mod proptests;

pub use aggregator::MultiMetricAggregator;
pub use calculator::{ImpactCalculator, ImpactRecord, MetricImpact, RemovalSet};
pub use report::{AnalysisReport, MetricFailure};
pub use table::{AggregatedRow, COMBINED, COMBINED_DELTA, Column, ImpactTable, MetricCell};
