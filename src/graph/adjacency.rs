use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::Weight;
use crate::graph::Graph;

/// Plain nested-map adjacency: vertex -> (neighbour -> edge weight)
///
/// The key set of the outer map is the vertex set.
pub type Adjacency<V, W> = HashMap<V, HashMap<V, W>>;

impl<V, W> Graph<V, W> for HashMap<V, HashMap<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|edges| edges.len()).sum()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.contains_key(vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.get(vertex) {
            Box::new(edges.iter().map(|(to, weight)| (to, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }
}
