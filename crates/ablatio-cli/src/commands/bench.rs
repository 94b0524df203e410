//! `ablatio bench`: timing single-metric analyses on generated graphs.
//!
//! For every configured graph kind and size, the first node is removed and
//! each metric is analyzed on its own, `runs` times. Failed runs are
//! counted and summarized rather than aborting the benchmark.

use super::cancel_on_ctrl_c;
use crate::cli::BenchArgs;
use crate::error::{Error, Result};
use crate::render::TextTable;
use ablatio_core::config::{BenchSettings, MetricsConfig};
use ablatio_core::{AblatioConfig, CancellationFlag};
use ablatio_graph::{Graph, GraphKind, generate};
use ablatio_impact::{MultiMetricAggregator, RemovalSet};
use ablatio_metrics::MetricRegistry;
use serde::Serialize;
use std::time::Instant;

/// Error messages kept per result; the rest are only counted.
pub const MAX_REPORTED_ERRORS: usize = 3;

// ============================================================================
// Plan
// ============================================================================

/// The resolved benchmark workload.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchPlan {
    /// Repetitions per graph and metric.
    pub runs: usize,
    /// Graph sizes.
    pub sizes: Vec<usize>,
    /// Graph kinds.
    pub graph_types: Vec<GraphKind>,
    /// Metrics, each timed on its own.
    pub metrics: Vec<String>,
    /// Generator seed.
    pub seed: u64,
}

impl BenchPlan {
    /// Command-line values override the `[bench]` section.
    pub fn resolve(settings: &BenchSettings, args: &BenchArgs) -> Result<Self> {
        let graph_types = if args.graph_types.is_empty() {
            settings
                .graph_types
                .iter()
                .map(|name| name.parse::<GraphKind>().map_err(Error::from))
                .collect::<Result<Vec<_>>>()?
        } else {
            args.graph_types.clone()
        };
        let plan = Self {
            runs: args.runs.unwrap_or(settings.runs),
            sizes: pick(&args.sizes, &settings.sizes),
            graph_types,
            metrics: pick(&args.metrics, &settings.metrics),
            seed: args.seed.unwrap_or(settings.seed),
        };
        if plan.runs == 0 {
            return Err(Error::invalid_argument("0", "--runs must be at least 1"));
        }
        Ok(plan)
    }
}

fn pick<T: Clone>(given: &[T], fallback: &[T]) -> Vec<T> {
    if given.is_empty() {
        fallback.to_vec()
    } else {
        given.to_vec()
    }
}

// ============================================================================
// Results
// ============================================================================

/// Wall-time statistics in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation; `0` for a single sample.
    pub std: f64,
    /// Fastest run.
    pub min: f64,
    /// Slowest run.
    pub max: f64,
}

impl TimingStats {
    /// Summarizes samples; `None` when there are none.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let std = if samples.len() > 1 {
            let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1.0);
            variance.sqrt()
        } else {
            0.0
        };
        Some(Self {
            mean,
            std,
            min: samples.iter().copied().fold(f64::INFINITY, f64::min),
            max: samples.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

/// One (graph, metric) measurement.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    /// Generator used.
    pub graph_type: GraphKind,
    /// Requested size.
    pub size: usize,
    /// Actual node count.
    pub nodes: usize,
    /// Actual edge count.
    pub edges: usize,
    /// Metric timed.
    pub metric: String,
    /// Timings of the successful runs.
    pub timing: Option<TimingStats>,
    /// Runs that produced values.
    pub successful_runs: usize,
    /// Runs that errored or whose metric failed.
    pub failed_runs: usize,
    /// The first few failure messages.
    pub errors: Vec<String>,
}

/// A graph the benchmark could not run on.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedGraph {
    /// Generator requested.
    pub graph_type: GraphKind,
    /// Size requested.
    pub size: usize,
    /// Why it was skipped.
    pub reason: String,
}

/// The whole benchmark outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchReport {
    /// Runs per measurement.
    pub runs: usize,
    /// One entry per (graph, metric).
    pub results: Vec<BenchResult>,
    /// Graphs that could not be generated or analyzed.
    pub skipped: Vec<SkippedGraph>,
}

// ============================================================================
// Driver
// ============================================================================

/// Times each metric on one graph with its first node removed.
pub fn bench_graph(
    aggregator: &MultiMetricAggregator<usize>,
    graph: &Graph<usize>,
    graph_type: GraphKind,
    size: usize,
    plan: &BenchPlan,
) -> Result<Vec<BenchResult>> {
    let Some(first) = graph.node_ids().next() else {
        return Err(Error::invalid_argument(size.to_string(), "graph is empty"));
    };
    let removal: RemovalSet<usize> = [*first].into_iter().collect();

    let mut results = Vec::with_capacity(plan.metrics.len());
    for metric in &plan.metrics {
        let mut samples = Vec::with_capacity(plan.runs);
        let mut errors = Vec::new();
        let mut failed_runs = 0;

        for run in 1..=plan.runs {
            let start = Instant::now();
            let outcome = aggregator.compute(graph, &removal, std::slice::from_ref(metric));
            let elapsed = start.elapsed().as_secs_f64();

            let failure = match outcome {
                Ok(report) if report.is_complete() => None,
                Ok(report) => report.failures.into_iter().next().map(|f| f.message),
                Err(ablatio_core::Error::Cancelled) => {
                    return Err(ablatio_core::Error::Cancelled.into());
                }
                Err(err) => Some(err.to_string()),
            };
            match failure {
                None => samples.push(elapsed),
                Some(message) => {
                    failed_runs += 1;
                    log::warn!("{metric} on {graph_type} (n={size}), run {run}: {message}");
                    if errors.len() < MAX_REPORTED_ERRORS {
                        errors.push(format!("run {run}: {message}"));
                    }
                }
            }
        }

        results.push(BenchResult {
            graph_type,
            size,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            metric: metric.clone(),
            timing: TimingStats::from_samples(&samples),
            successful_runs: samples.len(),
            failed_runs,
            errors,
        });
    }
    Ok(results)
}

/// Runs the whole plan.
pub fn run_plan(
    plan: &BenchPlan,
    metrics_config: &MetricsConfig,
    cancel: CancellationFlag,
) -> Result<BenchReport> {
    let aggregator =
        MultiMetricAggregator::new(MetricRegistry::standard(metrics_config)).with_cancellation(cancel);
    let mut report = BenchReport {
        runs: plan.runs,
        ..BenchReport::default()
    };

    for &graph_type in &plan.graph_types {
        for &size in &plan.sizes {
            let outcome = generate(graph_type, size, plan.seed)
                .map_err(Error::from)
                .and_then(|graph| {
                    log::info!(
                        "Benchmarking {graph_type}: {} nodes, {} edges",
                        graph.node_count(),
                        graph.edge_count()
                    );
                    bench_graph(&aggregator, &graph, graph_type, size, plan)
                });
            match outcome {
                Ok(results) => report.results.extend(results),
                Err(Error::Core(ablatio_core::Error::Cancelled)) => {
                    return Err(ablatio_core::Error::Cancelled.into());
                }
                Err(err) => {
                    log::warn!("Skipping {graph_type} (n={size}): {err}");
                    report.skipped.push(SkippedGraph {
                        graph_type,
                        size,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }
    Ok(report)
}

/// Renders results as a text table with times in milliseconds.
pub fn render_bench(report: &BenchReport) -> String {
    let headers = [
        "Graph", "Size", "Nodes", "Edges", "Metric", "Mean ms", "Std ms", "Min ms", "Max ms", "OK",
        "Failed",
    ];
    let mut table = TextTable::new(headers.iter().map(ToString::to_string).collect());
    let ms = |v: f64| format!("{:.3}", v * 1000.0);

    for r in &report.results {
        let mut row = vec![
            r.graph_type.to_string(),
            r.size.to_string(),
            r.nodes.to_string(),
            r.edges.to_string(),
            r.metric.clone(),
        ];
        match r.timing {
            Some(t) => row.extend([ms(t.mean), ms(t.std), ms(t.min), ms(t.max)]),
            None => row.extend(std::iter::repeat_n("-".to_string(), 4)),
        }
        row.push(r.successful_runs.to_string());
        row.push(r.failed_runs.to_string());
        table.push(row);
    }

    let mut out = vec![
        format!("Benchmark ({} run(s) per measurement)", report.runs),
        String::new(),
        table.render(),
    ];
    for r in report.results.iter().filter(|r| !r.errors.is_empty()) {
        out.push(format!(
            "{} on {} (n={}): {}",
            r.metric,
            r.graph_type,
            r.size,
            r.errors.join("; ")
        ));
    }
    for s in &report.skipped {
        out.push(format!("Skipped {} (n={}): {}", s.graph_type, s.size, s.reason));
    }
    out.join("\n")
}

/// Handles `ablatio bench`.
pub async fn run(config: &AblatioConfig, args: BenchArgs) -> Result<()> {
    let plan = BenchPlan::resolve(&config.bench, &args)?;
    let metrics_config = config.metrics.clone();
    log::info!(
        "Benchmarking {} graph type(s) x {} size(s) x {} metric(s), {} run(s) each",
        plan.graph_types.len(),
        plan.sizes.len(),
        plan.metrics.len(),
        plan.runs
    );

    let cancel = CancellationFlag::new();
    let watcher = cancel_on_ctrl_c(cancel.clone());
    let report = tokio::task::spawn_blocking(move || run_plan(&plan, &metrics_config, cancel)).await;
    watcher.abort();
    let report = report??;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_bench(&report));
    }
    Ok(())
}
