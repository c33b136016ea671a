use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::Weight;
use crate::graph::{Adjacency, Graph};
use crate::{Error, Result};

/// A directed graph implementation using adjacency lists
///
/// Holds at most one weight per ordered vertex pair. Adding an edge that
/// already exists replaces its weight.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Vertices in insertion order
    vertices: Vec<V>,

    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> DirectedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new directed graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from a nested adjacency map
    ///
    /// Neighbours that are not keys of `adjacency` are added as vertices
    /// without outgoing edges.
    pub fn from_adjacency(adjacency: &Adjacency<V, W>) -> Result<Self> {
        let mut graph = DirectedGraph::with_capacity(adjacency.len());
        for vertex in adjacency.keys() {
            graph.add_vertex(vertex.clone());
        }
        for (from, edges) in adjacency {
            for (to, weight) in edges {
                graph.add_vertex(to.clone());
                graph.add_edge(from.clone(), to.clone(), *weight)?;
            }
        }
        Ok(graph)
    }

    /// Converts the graph into a nested adjacency map
    pub fn into_adjacency(self) -> Adjacency<V, W> {
        let mut outgoing = self.outgoing_edges;
        self.vertices
            .into_iter()
            .map(|vertex| {
                let edges = outgoing
                    .remove(&vertex)
                    .unwrap_or_default()
                    .into_iter()
                    .collect();
                (vertex, edges)
            })
            .collect()
    }

    /// Adds a vertex, returning false if it was already present
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing_edges.contains_key(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex.clone(), Vec::new());
        self.vertices.push(vertex);
        true
    }

    /// Adds a directed edge between existing vertices with the given weight
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        if weight.is_negative() {
            return Err(Error::NegativeWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: format!("{:?}", weight),
            });
        }
        if !self.outgoing_edges.contains_key(&to) {
            return Err(Error::InvalidVertex(format!("{:?}", to)));
        }
        let outgoing = self
            .outgoing_edges
            .get_mut(&from)
            .ok_or_else(|| Error::InvalidVertex(format!("{:?}", from)))?;

        // Check if edge already exists and update it if it does
        match outgoing.iter().position(|(target, _)| *target == to) {
            Some(index) => outgoing[index].1 = weight,
            None => outgoing.push((to, weight)),
        }
        Ok(())
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().map(|(to, weight)| (to, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    // Weights and endpoints are checked by `add_edge`.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
