use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult, Weight};
use crate::data_structures::LazyQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm with lazy deletion and an optional cull distance
///
/// Vertices whose shortest distance is at or beyond the cull distance are
/// left out of the result, as if they were unreachable.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<W> {
    /// Exclusive upper bound on reported distances, `None` for no cap
    cull_distance: Option<W>,

    /// Whether to check weights and edge endpoints before searching
    validate: bool,
}

impl<W: Weight> Default for Dijkstra<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> Dijkstra<W> {
    /// Creates a new Dijkstra algorithm instance with no cap and validation on
    pub fn new() -> Self {
        Dijkstra {
            cull_distance: None,
            validate: true,
        }
    }

    /// Set the cull distance
    pub fn with_cull_distance(mut self, cull_distance: W) -> Self {
        self.cull_distance = Some(cull_distance);
        self
    }

    /// Enable or disable the upfront graph validation
    ///
    /// With validation off the caller guarantees the preconditions: a negative
    /// weight or an edge leaving the vertex set gives unspecified distances, and
    /// negative integer sums near `W::min_value()` may overflow.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// The effective cull distance: the configured one or `W::max_value()`
    pub fn cull_distance(&self) -> W {
        self.cull_distance.unwrap_or_else(W::max_value)
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra<W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.contains_vertex(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }
        if self.validate {
            graph.validate()?;
        }

        let cull = self.cull_distance();
        let n = graph.vertex_count();
        log::debug!(
            "dijkstra from {:?} over {} vertices, {} edges, cull {:?}",
            source,
            n,
            graph.edge_count(),
            cull
        );

        // Absent means not reached yet. Only distances below the cull are stored.
        let mut distances: HashMap<V, W> = HashMap::with_capacity(n);
        let mut queue = LazyQueue::with_capacity(n);
        let mut finalized = 0;

        if W::zero() < cull {
            distances.insert(source.clone(), W::zero());
            queue.push(source.clone(), W::zero());
        }

        // Stale entries are dropped inside `pop`, so every entry seen here
        // finalizes its vertex.
        while let Some(entry) = queue.pop() {
            finalized += 1;
            let dist_u = entry.distance;

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(&entry.vertex) {
                // Checked before adding so integer sums cannot overflow. A
                // negative dist_u only arises from unvalidated negative weights.
                if dist_u >= W::zero() && weight >= cull - dist_u {
                    continue;
                }
                let new_dist = dist_u + weight;
                // Float sums can round up onto the cull.
                if new_dist >= cull {
                    continue;
                }

                let should_update = match distances.get(v) {
                    None => true,
                    Some(&current_dist) => new_dist < current_dist,
                };

                if should_update {
                    log::trace!("relax {:?} -> {:?}: {:?}", entry.vertex, v, new_dist);
                    distances.insert(v.clone(), new_dist);
                    queue.push(v.clone(), new_dist);
                }
            }

            if finalized == n {
                break;
            }
        }

        let stats = SearchStats {
            pushed: queue.pushed(),
            stale: queue.stale_discarded(),
            finalized,
        };
        log::debug!(
            "dijkstra from {:?} reached {} vertices ({:?})",
            source,
            distances.len(),
            stats
        );

        Ok(ShortestPathResult {
            distances,
            source: source.clone(),
            stats,
        })
    }
}
