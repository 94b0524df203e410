//! Structure-keyed layout cache.
//!
//! Keys combine a blake3 fingerprint of the graph's structure (nodes,
//! edges and weights) with the node count and the layout algorithm, so two
//! graphs share an entry only when they are structurally identical. Cached
//! positions are handed out as `Arc`s and never mutated; a hit returns the
//! same allocation every time.

use crate::compute_layout;
use crate::types::{LayoutAlgorithm, Positions};
use ablatio_graph::{Fingerprint, Graph, NodeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// ============================================================================
// LayoutKey
// ============================================================================

/// Cache key for one graph under one algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutKey {
    fingerprint: Fingerprint,
    node_count: usize,
    algorithm: LayoutAlgorithm,
}

impl LayoutKey {
    /// Builds the key for `graph` laid out with `algorithm`.
    pub fn for_graph<N: NodeId>(graph: &Graph<N>, algorithm: LayoutAlgorithm) -> Self {
        Self {
            fingerprint: Fingerprint::of(graph),
            node_count: graph.node_count(),
            algorithm,
        }
    }

    /// The structural fingerprint.
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// The node count.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The algorithm.
    pub fn algorithm(&self) -> LayoutAlgorithm {
        self.algorithm
    }
}

impl fmt::Display for LayoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.fingerprint.to_hex();
        write!(f, "{}/{}/{}", &hex[..12], self.node_count, self.algorithm)
    }
}

// ============================================================================
// LayoutCache
// ============================================================================

/// Hit and miss counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
}

/// Thread-safe memo of computed layouts.
pub struct LayoutCache<N: NodeId> {
    entries: Mutex<HashMap<LayoutKey, Arc<Positions<N>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<N: NodeId> LayoutCache<N> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the cached positions for `key`, if any.
    pub fn get(&self, key: &LayoutKey) -> Option<Arc<Positions<N>>> {
        let found = self.lock().get(key).cloned();
        self.record(found.is_some());
        found
    }

    /// Stores positions under `key`, replacing any previous entry, and
    /// returns the shared handle.
    pub fn set(&self, key: LayoutKey, positions: Positions<N>) -> Arc<Positions<N>> {
        let positions = Arc::new(positions);
        self.lock().insert(key, Arc::clone(&positions));
        positions
    }

    /// Returns the layout of `graph`, computing and storing it on a miss.
    ///
    /// The lock is held across lookup and insert, so concurrent callers
    /// with the same key all receive the same `Arc`.
    pub fn get_or_compute(&self, graph: &Graph<N>, algorithm: LayoutAlgorithm) -> Arc<Positions<N>> {
        let key = LayoutKey::for_graph(graph, algorithm);
        let mut entries = self.lock();
        if let Some(found) = entries.get(&key) {
            self.record(true);
            return Arc::clone(found);
        }
        self.record(false);

        log::debug!("Computing layout {key}");
        let positions = Arc::new(compute_layout(graph, algorithm));
        entries.insert(key, Arc::clone(&positions));
        positions
    }

    /// Drops one entry. Returns whether it existed.
    pub fn invalidate(&self, key: &LayoutKey) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Hit/miss counts since creation.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn record(&self, hit: bool) {
        let counter = if hit { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    // Entries are only ever inserted whole, so a poisoned map is still
    // consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<LayoutKey, Arc<Positions<N>>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<N: NodeId> Default for LayoutCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> fmt::Debug for LayoutCache<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutCache")
            .field("len", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
