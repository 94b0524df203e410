//! Structural fingerprints for graphs.
//!
//! Two graphs with the same directedness, node set, and edge set (weights
//! included) hash to the same [`Fingerprint`] regardless of insertion order.
//! Node ids are hashed through their `Display` form, length-prefixed so
//! that distinct id sequences cannot collide by concatenation.

use crate::{Graph, NodeId};
use std::fmt;

/// blake3 digest of a graph's structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(blake3::Hash);

impl Fingerprint {
    /// Computes the fingerprint of a graph.
    pub fn of<N: NodeId>(graph: &Graph<N>) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&[u8::from(graph.is_directed())]);

        let mut nodes: Vec<&N> = graph.node_ids().collect();
        nodes.sort(); // Deterministic ordering
        hasher.update(&(nodes.len() as u64).to_le_bytes());
        for node in nodes {
            update_id(&mut hasher, node);
        }

        let directed = graph.is_directed();
        let mut edges: Vec<(&N, &N, u64)> = graph
            .edges()
            .map(|(from, to, weight)| {
                if !directed && to < from {
                    (to, from, weight.to_bits())
                } else {
                    (from, to, weight.to_bits())
                }
            })
            .collect();
        edges.sort();
        hasher.update(&(edges.len() as u64).to_le_bytes());
        for (from, to, bits) in edges {
            update_id(&mut hasher, from);
            update_id(&mut hasher, to);
            hasher.update(&bits.to_le_bytes());
        }

        Self(hasher.finalize())
    }

    /// Hex form of the digest.
    pub fn to_hex(&self) -> String {
        self.0.to_hex().to_string()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

fn update_id<N: NodeId>(hasher: &mut blake3::Hasher, id: &N) {
    let text = id.to_string();
    hasher.update(&(text.len() as u64).to_le_bytes());
    hasher.update(text.as_bytes());
}
