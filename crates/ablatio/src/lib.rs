//! Ablatio node-removal impact engine, umbrella crate.
//!
//! This crate re-exports all Ablatio components for convenience.
//! Use feature flags to enable specific functionality.

#![doc = include_str!("../README.md")]

pub use ablatio_core as core;
pub use ablatio_graph as graph;
pub use ablatio_impact as impact;
pub use ablatio_metrics as metrics;

#[cfg(feature = "layout")]
pub use ablatio_layout as layout;

#[cfg(feature = "cli")]
pub use ablatio_cli as cli;

/// The types most analyses need.
pub mod prelude {
    pub use ablatio_core::{AblatioConfig, CancellationFlag, Error, Result};
    pub use ablatio_graph::{DiameterSnapshot, Edge, Graph, GraphKind, NodeId};
    pub use ablatio_impact::{
        AnalysisReport, ImpactCalculator, ImpactTable, MultiMetricAggregator, RemovalSet,
    };
    pub use ablatio_metrics::{CentralityMetric, CentralityResult, MetricError, MetricRegistry};

    #[cfg(feature = "layout")]
    pub use ablatio_layout::{LayoutAlgorithm, LayoutCache, LayoutKey, Positions};
}
