//! The merged per-node impact table.
//!
//! One row per surviving node, one `{new, delta}` cell per selected metric,
//! plus the unscaled `Combined` / `Δ Combined` sums. A cell a metric could
//! not fill holds `None`, never `0`.

use ablatio_core::{Error, Result, column_title, delta_title};
use ablatio_graph::NodeId;
use serde::Serialize;
use std::cmp::Ordering;

/// Header of the summed score column.
pub const COMBINED: &str = "Combined";

/// Header of the summed delta column.
pub const COMBINED_DELTA: &str = "Δ Combined";

// ============================================================================
// Cells and rows
// ============================================================================

/// One metric's values for one node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MetricCell {
    /// Post-removal score, if the metric produced one.
    pub new: Option<f64>,
    /// Change in score, if both snapshots had one.
    pub delta: Option<f64>,
}

impl MetricCell {
    /// A "not applicable" cell.
    pub const EMPTY: MetricCell = MetricCell {
        new: None,
        delta: None,
    };

    /// Whether the metric contributed nothing to this cell.
    pub fn is_empty(&self) -> bool {
        self.new.is_none() && self.delta.is_none()
    }
}

/// A surviving node's row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AggregatedRow<N> {
    /// The node.
    pub node: N,
    /// One cell per metric, in table metric order.
    pub cells: Vec<MetricCell>,
    /// Sum of the present `new` values.
    pub combined: f64,
    /// Sum of the present `delta` values.
    pub combined_delta: f64,
}

impl<N> AggregatedRow<N> {
    /// Builds a row and its sums from the cells.
    pub fn new(node: N, cells: Vec<MetricCell>) -> Self {
        let combined = cells.iter().filter_map(|c| c.new).sum();
        let combined_delta = cells.iter().filter_map(|c| c.delta).sum();
        Self {
            node,
            cells,
            combined,
            combined_delta,
        }
    }

    /// The row's value in a column, if present.
    pub fn value(&self, column: Column) -> Option<f64> {
        match column {
            Column::New(i) => self.cells.get(i).and_then(|c| c.new),
            Column::Delta(i) => self.cells.get(i).and_then(|c| c.delta),
            Column::Combined => Some(self.combined),
            Column::CombinedDelta => Some(self.combined_delta),
        }
    }
}

// ============================================================================
// Columns
// ============================================================================

/// A column of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    /// Post-removal score of the i-th metric.
    New(usize),
    /// Delta of the i-th metric.
    Delta(usize),
    /// Summed scores.
    Combined,
    /// Summed deltas.
    CombinedDelta,
}

// ============================================================================
// ImpactTable
// ============================================================================

/// Rows of surviving nodes against the selected metrics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactTable<N> {
    metrics: Vec<String>,
    rows: Vec<AggregatedRow<N>>,
}

impl<N: NodeId> ImpactTable<N> {
    /// Creates a table. Every row must have one cell per metric.
    pub fn new(metrics: Vec<String>, rows: Vec<AggregatedRow<N>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.cells.len() == metrics.len()));
        Self { metrics, rows }
    }

    /// Metric names in column order.
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    /// Rows, in their current order.
    pub fn rows(&self) -> &[AggregatedRow<N>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers: `[Title, Δ Title, ..., Combined, Δ Combined]`.
    pub fn columns(&self) -> Vec<String> {
        self.metrics
            .iter()
            .flat_map(|m| [column_title(m), delta_title(m)])
            .chain([COMBINED.to_string(), COMBINED_DELTA.to_string()])
            .collect()
    }

    /// Resolves a column header (or a bare metric name, meaning its score
    /// column).
    pub fn column(&self, header: &str) -> Option<Column> {
        let header = header.trim();
        if header == COMBINED {
            return Some(Column::Combined);
        }
        if header == COMBINED_DELTA {
            return Some(Column::CombinedDelta);
        }
        self.metrics.iter().enumerate().find_map(|(i, m)| {
            if header == delta_title(m) {
                Some(Column::Delta(i))
            } else if header == column_title(m) || header == m {
                Some(Column::New(i))
            } else {
                None
            }
        })
    }

    /// Looks up a node's row.
    pub fn row(&self, node: &N) -> Option<&AggregatedRow<N>> {
        self.rows.iter().find(|r| &r.node == node)
    }

    /// Looks up one metric's cell for a node.
    pub fn cell(&self, node: &N, metric: &str) -> Option<&MetricCell> {
        let index = self.metrics.iter().position(|m| m == metric)?;
        self.row(node)?.cells.get(index)
    }

    /// Returns the table sorted by a column.
    ///
    /// Missing values sort last in either direction; ties keep node order.
    ///
    /// # Errors
    ///
    /// `Error::UnknownMetric` if `header` names no column.
    pub fn sorted_by(mut self, header: &str, descending: bool) -> Result<Self> {
        let column = self
            .column(header)
            .ok_or_else(|| Error::unknown_metric(header))?;

        self.rows.sort_by(|a, b| {
            let ordering = match (a.value(column), b.value(column)) {
                (Some(x), Some(y)) if descending => y.total_cmp(&x),
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            ordering.then_with(|| a.node.cmp(&b.node))
        });
        Ok(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
