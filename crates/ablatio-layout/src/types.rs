//! Layout value types.

use ablatio_core::config::{LayoutKind, LayoutSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Default spring layout seed.
pub const DEFAULT_SEED: u64 = 42;

/// Default spring layout iteration count.
pub const DEFAULT_ITERATIONS: usize = 50;

/// A 2D position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Node positions, ordered by node id.
pub type Positions<N> = BTreeMap<N, Point>;

/// A layout algorithm with its parameters.
///
/// Equality and hashing compare `k` bit for bit so the algorithm can be
/// part of a cache key.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum LayoutAlgorithm {
    /// Fruchterman–Reingold force-directed layout.
    Spring {
        /// Seed for the initial random positions.
        seed: u64,
        /// Number of force iterations.
        iterations: usize,
        /// Optimal distance between nodes; `1/sqrt(n)` when `None`.
        k: Option<f64>,
    },
    /// Nodes evenly spaced on the unit circle in insertion order.
    Circular,
}

impl LayoutAlgorithm {
    /// Spring layout with default `k`.
    pub fn spring(seed: u64, iterations: usize) -> Self {
        LayoutAlgorithm::Spring {
            seed,
            iterations,
            k: None,
        }
    }

    /// Short name.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutAlgorithm::Spring { .. } => "spring",
            LayoutAlgorithm::Circular => "circular",
        }
    }

    fn key_parts(&self) -> (u8, u64, usize, Option<u64>) {
        match *self {
            LayoutAlgorithm::Spring {
                seed,
                iterations,
                k,
            } => (0, seed, iterations, k.map(f64::to_bits)),
            LayoutAlgorithm::Circular => (1, 0, 0, None),
        }
    }
}

impl Default for LayoutAlgorithm {
    fn default() -> Self {
        Self::spring(DEFAULT_SEED, DEFAULT_ITERATIONS)
    }
}

impl From<&LayoutSettings> for LayoutAlgorithm {
    fn from(settings: &LayoutSettings) -> Self {
        match settings.algorithm {
            LayoutKind::Spring => Self::spring(settings.seed, settings.iterations),
            LayoutKind::Circular => LayoutAlgorithm::Circular,
        }
    }
}

impl PartialEq for LayoutAlgorithm {
    fn eq(&self, other: &Self) -> bool {
        self.key_parts() == other.key_parts()
    }
}

impl Eq for LayoutAlgorithm {}

impl Hash for LayoutAlgorithm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_parts().hash(state);
    }
}

impl fmt::Display for LayoutAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutAlgorithm::Spring {
                seed,
                iterations,
                k: Some(k),
            } => write!(f, "spring(seed={seed}, iterations={iterations}, k={k})"),
            LayoutAlgorithm::Spring {
                seed, iterations, ..
            } => write!(f, "spring(seed={seed}, iterations={iterations})"),
            LayoutAlgorithm::Circular => write!(f, "circular"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_algorithm_equality_uses_k_bits() {
        let a = LayoutAlgorithm::Spring {
            seed: 1,
            iterations: 10,
            k: Some(0.5),
        };
        let b = LayoutAlgorithm::Spring {
            seed: 1,
            iterations: 10,
            k: Some(0.5),
        };
        assert_eq!(a, b);
        assert_ne!(a, LayoutAlgorithm::spring(1, 10));
        assert_ne!(LayoutAlgorithm::spring(1, 10), LayoutAlgorithm::spring(2, 10));

        let set: HashSet<LayoutAlgorithm> = [a, b, LayoutAlgorithm::Circular].into();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_algorithm_from_settings() {
        let mut settings = LayoutSettings::default();
        assert_eq!(LayoutAlgorithm::from(&settings), LayoutAlgorithm::spring(42, 50));
        settings.algorithm = LayoutKind::Circular;
        assert_eq!(LayoutAlgorithm::from(&settings), LayoutAlgorithm::Circular);
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(LayoutAlgorithm::default().to_string(), "spring(seed=42, iterations=50)");
        assert_eq!(LayoutAlgorithm::Circular.name(), "circular");
    }

    #[test]
    fn test_algorithm_serde_tag() {
        let json = serde_json::to_string(&LayoutAlgorithm::Circular).unwrap();
        assert_eq!(json, r#"{"algorithm":"circular"}"#);
    }
}
