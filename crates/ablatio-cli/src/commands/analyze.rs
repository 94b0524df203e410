//! `ablatio analyze`: node-removal impact over several metrics.

use super::cancel_on_ctrl_c;
use crate::cli::AnalyzeArgs;
use crate::error::Result;
use crate::render::{render_report, sort_header};
use crate::source::{CliNode, LoadedGraph, parse_ids};
use ablatio_core::config::MetricsConfig;
use ablatio_core::{AblatioConfig, CancellationFlag};
use ablatio_graph::Graph;
use ablatio_impact::{AnalysisReport, MultiMetricAggregator};
use ablatio_metrics::MetricRegistry;

/// Everything an analysis needs besides the graph.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Raw removal ids as typed.
    pub remove: Vec<String>,
    /// Metric names as typed.
    pub metrics: Vec<String>,
    /// Parameters for the standard metrics.
    pub metrics_config: MetricsConfig,
    /// Sort key.
    pub sort: String,
    /// Sort direction.
    pub ascending: bool,
}

impl AnalyzeRequest {
    /// Combines command-line arguments with configured defaults.
    pub fn new(config: &AblatioConfig, args: &AnalyzeArgs) -> Self {
        let metrics = if args.metrics.is_empty() {
            config.analysis.metrics.clone()
        } else {
            args.metrics.clone()
        };
        Self {
            remove: args.remove.clone(),
            metrics,
            metrics_config: config.metrics.clone(),
            sort: args.sort.clone(),
            ascending: args.ascending,
        }
    }
}

/// Runs the aggregator and sorts the resulting table.
pub fn analyze<N: CliNode>(
    graph: &Graph<N>,
    request: &AnalyzeRequest,
    cancel: CancellationFlag,
) -> Result<AnalysisReport<N>> {
    let removal = parse_ids::<N>(&request.remove)?;
    let aggregator = MultiMetricAggregator::new(MetricRegistry::standard(&request.metrics_config))
        .with_cancellation(cancel);

    let mut report = aggregator.compute(graph, &removal, &request.metrics)?;
    report.table = report
        .table
        .sorted_by(&sort_header(&request.sort), !request.ascending)?;
    Ok(report)
}

/// Analyzes on a blocking worker and renders the report.
async fn analyze_blocking<N: CliNode>(
    graph: Graph<N>,
    request: AnalyzeRequest,
    cancel: CancellationFlag,
    json: bool,
    limit: Option<usize>,
) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        let report = analyze(&graph, &request, cancel)?;
        if !report.is_complete() {
            log::warn!(
                "{} of {} metric(s) failed",
                report.failures.len(),
                report.table.metrics().len()
            );
        }
        if json {
            Ok(serde_json::to_string_pretty(&report)?)
        } else {
            Ok(render_report(&report, limit))
        }
    })
    .await?
}

/// Handles `ablatio analyze`.
pub async fn run(config: &AblatioConfig, args: AnalyzeArgs) -> Result<()> {
    let request = AnalyzeRequest::new(config, &args);
    let graph = args.source.load()?;

    let cancel = CancellationFlag::new();
    let watcher = cancel_on_ctrl_c(cancel.clone());
    let output = match graph {
        LoadedGraph::Document(g) => {
            analyze_blocking(g, request, cancel, args.json, args.limit).await
        }
        LoadedGraph::Generated(g) => {
            analyze_blocking(g, request, cancel, args.json, args.limit).await
        }
    };
    watcher.abort();

    println!("{}", output?);
    Ok(())
}
