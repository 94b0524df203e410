//! `ablatio layout`: node positions through the shared layout cache.

use crate::cli::{AlgorithmArg, LayoutArgs};
use crate::error::Result;
use crate::render::TextTable;
use crate::source::{CliNode, LoadedGraph, parse_ids};
use ablatio_core::AblatioConfig;
use ablatio_core::config::{LayoutKind, LayoutSettings};
use ablatio_graph::Graph;
use ablatio_layout::{LayoutAlgorithm, LayoutCache, LayoutKey, Positions};
use serde::Serialize;

/// Positions for one graph snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutView<N: Ord> {
    /// Structural fingerprint (hex).
    pub fingerprint: String,
    /// Node count.
    pub nodes: usize,
    /// Coordinates in `[-1, 1]`.
    pub positions: Positions<N>,
}

/// Output of `ablatio layout`.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutOutput<N: Ord> {
    /// Algorithm and parameters used.
    pub algorithm: LayoutAlgorithm,
    /// The input graph.
    pub original: LayoutView<N>,
    /// The graph with `--remove` nodes deleted, if any were given.
    pub reduced: Option<LayoutView<N>>,
    /// Cache lookups answered without computing.
    pub cache_hits: u64,
    /// Cache lookups that computed a layout.
    pub cache_misses: u64,
}

/// Command-line values override the `[layout]` section.
pub fn resolve_algorithm(settings: &LayoutSettings, args: &LayoutArgs) -> LayoutAlgorithm {
    let kind = match args.algorithm {
        Some(AlgorithmArg::Spring) => LayoutKind::Spring,
        Some(AlgorithmArg::Circular) => LayoutKind::Circular,
        None => settings.algorithm,
    };
    LayoutAlgorithm::from(&LayoutSettings {
        algorithm: kind,
        seed: args.layout_seed.unwrap_or(settings.seed),
        iterations: args.iterations.unwrap_or(settings.iterations),
    })
}

fn view<N: CliNode>(
    cache: &LayoutCache<N>,
    graph: &Graph<N>,
    algorithm: LayoutAlgorithm,
) -> LayoutView<N> {
    let key = LayoutKey::for_graph(graph, algorithm);
    let positions = cache.get_or_compute(graph, algorithm);
    LayoutView {
        fingerprint: key.fingerprint().to_hex(),
        nodes: graph.node_count(),
        positions: (*positions).clone(),
    }
}

/// Lays out the graph, and the reduced graph when ids are given.
pub fn layout_graph<N: CliNode>(
    cache: &LayoutCache<N>,
    graph: &Graph<N>,
    remove: &[String],
    algorithm: LayoutAlgorithm,
) -> Result<LayoutOutput<N>> {
    let removal = parse_ids::<N>(remove)?;
    let original = view(cache, graph, algorithm);
    let reduced = if removal.is_empty() {
        None
    } else {
        let reduced = graph.without_nodes(&removal)?;
        Some(view(cache, &reduced, algorithm))
    };

    let stats = cache.stats();
    log::debug!("Layout cache: {} hit(s), {} miss(es)", stats.hits, stats.misses);
    Ok(LayoutOutput {
        algorithm,
        original,
        reduced,
        cache_hits: stats.hits,
        cache_misses: stats.misses,
    })
}

fn render_view<N: CliNode>(title: &str, view: &LayoutView<N>) -> String {
    let mut table = TextTable::new(vec!["Node".into(), "x".into(), "y".into()]);
    for (node, point) in &view.positions {
        table.push(vec![
            node.to_string(),
            format!("{:.4}", point.x),
            format!("{:.4}", point.y),
        ]);
    }
    format!(
        "{title} ({} nodes, {})\n{}",
        view.nodes,
        &view.fingerprint[..12],
        table.render()
    )
}

/// Renders positions as text.
pub fn render_layout<N: CliNode>(output: &LayoutOutput<N>) -> String {
    let mut out = vec![
        format!("Layout: {}", output.algorithm),
        String::new(),
        render_view("Original", &output.original),
    ];
    if let Some(reduced) = &output.reduced {
        out.push(String::new());
        out.push(render_view("After removal", reduced));
    }
    out.join("\n")
}

fn emit<N: CliNode>(graph: &Graph<N>, args: &LayoutArgs, algorithm: LayoutAlgorithm) -> Result<String> {
    let cache = LayoutCache::new();
    let output = layout_graph(&cache, graph, &args.remove, algorithm)?;
    if args.json {
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(render_layout(&output))
    }
}

/// Handles `ablatio layout`.
pub async fn run(config: &AblatioConfig, args: LayoutArgs) -> Result<()> {
    let algorithm = resolve_algorithm(&config.layout, &args);
    let graph = args.source.load()?;

    let output = tokio::task::spawn_blocking(move || match graph {
        LoadedGraph::Document(g) => emit(&g, &args, algorithm),
        LoadedGraph::Generated(g) => emit(&g, &args, algorithm),
    })
    .await??;

    println!("{output}");
    Ok(())
}
