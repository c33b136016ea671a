use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::Weight;
use crate::{Error, Result};

/// Trait representing a weighted directed graph over arbitrary vertex keys
///
/// The vertex set is exactly what [`vertices`](Graph::vertices) yields. Edges
/// leaving a vertex are read-only for the duration of a search.
pub trait Graph<V, W>: Debug
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Returns an iterator over every vertex
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Checks that every weight is non-negative and every edge ends inside the graph
    fn validate(&self) -> Result<()> {
        for from in self.vertices() {
            for (to, weight) in self.outgoing_edges(from) {
                if weight.is_negative() {
                    return Err(Error::NegativeWeight {
                        from: format!("{:?}", from),
                        to: format!("{:?}", to),
                        weight: format!("{:?}", weight),
                    });
                }
                if !self.contains_vertex(to) {
                    return Err(Error::UnknownVertex {
                        from: format!("{:?}", from),
                        to: format!("{:?}", to),
                    });
                }
            }
        }
        Ok(())
    }
}
