use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Sub;

use num_traits::{Bounded, Zero};
use serde::Serialize;

use crate::graph::Graph;
use crate::Result;

/// Edge weight and distance type.
///
/// Needs a total order so queue entries can be compared, and `max_value`
/// serves as the "no cap" cull distance. Integers qualify directly, floats
/// through `ordered_float::OrderedFloat`.
pub trait Weight: Copy + Ord + Debug + Zero + Bounded + Sub<Output = Self> {
    /// Returns true if the weight is below zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl<T> Weight for T where T: Copy + Ord + Debug + Zero + Bounded + Sub<Output = T> {}

/// Counters collected during one search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Queue entries pushed, the source entry included
    pub pushed: usize,

    /// Entries popped after a newer entry for the same vertex replaced them
    pub stale: usize,

    /// Vertices whose distance became final
    pub finalized: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: Eq + Hash,
{
    /// Distances from source to each vertex reached within the cull distance
    pub distances: HashMap<V, W>,

    /// Source vertex
    pub source: V,

    /// Work done by the search
    pub stats: SearchStats,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Eq + Hash,
    W: Copy,
{
    /// Distance to `vertex`, or `None` if it was not reached
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Returns true if `vertex` was reached within the cull distance
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Number of reached vertices
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<V, W>,
{
    /// Compute shortest distances from a source vertex to all reachable vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
