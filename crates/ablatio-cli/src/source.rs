//! Loading the input graph and parsing node ids.
//!
//! Graph documents carry string ids; generated graphs number their nodes
//! `0..n`. Commands are generic over both through [`CliNode`].

use crate::cli::GraphSource;
use crate::error::{Error, Result};
use ablatio_graph::{Graph, GraphDocument, NodeId, generate};
use ablatio_impact::RemovalSet;
use serde::Serialize;
use std::path::Path;

/// A node id the CLI can parse from arguments and print as JSON.
pub trait CliNode: NodeId + Serialize {
    /// Parses one id typed by the user.
    fn parse_id(raw: &str) -> std::result::Result<Self, String>;
}

impl CliNode for String {
    fn parse_id(raw: &str) -> std::result::Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl CliNode for usize {
    fn parse_id(raw: &str) -> std::result::Result<Self, String> {
        raw.parse().map_err(|e: std::num::ParseIntError| e.to_string())
    }
}

/// The input graph, by id type.
#[derive(Debug)]
pub enum LoadedGraph {
    /// Read from a JSON document.
    Document(Graph<String>),
    /// Produced by a generator.
    Generated(Graph<usize>),
}

impl LoadedGraph {
    /// Node count, whichever variant.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Document(g) => g.node_count(),
            Self::Generated(g) => g.node_count(),
        }
    }
}

impl GraphSource {
    /// Loads or generates the graph.
    pub fn load(&self) -> Result<LoadedGraph> {
        if let Some(path) = &self.graph {
            return load_document(path).map(LoadedGraph::Document);
        }
        match self.generate {
            Some(kind) => {
                let graph = generate(kind, self.size, self.seed)?;
                log::info!(
                    "Generated {} graph: {} nodes, {} edges",
                    kind.display_name(),
                    graph.node_count(),
                    graph.edge_count()
                );
                Ok(LoadedGraph::Generated(graph))
            }
            None => Err(Error::invalid_argument(
                "",
                "pass --graph <FILE> or --generate <KIND>",
            )),
        }
    }
}

/// Reads a JSON [`GraphDocument`] with string ids.
pub fn load_document(path: &Path) -> Result<Graph<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ablatio_core::Error::io_with_path(e, path))?;
    let document: GraphDocument<String> = serde_json::from_str(&content)?;
    let (graph, stats) = document.into_graph()?;
    log::info!(
        "Loaded {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    if stats.deduped_edges > 0 {
        log::debug!("Merged {} duplicate edge(s)", stats.deduped_edges);
    }
    Ok(graph)
}

/// Parses user-supplied ids into a removal set. Blank entries are skipped.
pub fn parse_ids<N: CliNode>(raw: &[String]) -> Result<RemovalSet<N>> {
    raw.iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| N::parse_id(s).map_err(|message| Error::invalid_argument(s, message)))
        .collect()
}
