//! Cull Dijkstra - single-source shortest paths with a distance cap
//!
//! This library computes the minimal distance from a source vertex to every
//! vertex reachable over non-negative weighted edges. Exploration can be
//! bounded by a cull distance: vertices whose distance reaches it are treated
//! as unreachable and left out of the result.
//!
//! The priority queue never decreases keys in place. Every relaxation pushes a
//! fresh entry and the previous one for that vertex goes stale; stale entries
//! are recognised by their id and skipped when popped.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod render;

pub use algorithm::{
    dijkstra::Dijkstra, SearchStats, ShortestPathAlgorithm, ShortestPathResult, Weight,
};
/// Re-export main types for convenient use
pub use graph::{Adjacency, DirectedGraph, Graph, TileMap};
pub use render::GridTable;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(String),

    #[error("Vertex {0} is not part of the graph")]
    InvalidVertex(String),

    #[error("Edge from {from} to {to} points to a vertex outside the graph")]
    UnknownVertex { from: String, to: String },

    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Invalid tile map: {0}")]
    InvalidTileMap(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes the distance from `source` to every vertex reachable within `cull_distance`.
///
/// `None` means no cap. The returned map holds exactly the vertices whose
/// shortest distance is strictly below the cap, the source included at zero.
pub fn shortest_paths<V, W, G>(
    graph: &G,
    source: &V,
    cull_distance: Option<W>,
) -> Result<HashMap<V, W>>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
    G: Graph<V, W>,
{
    let mut dijkstra = Dijkstra::<W>::new();
    if let Some(cull) = cull_distance {
        dijkstra = dijkstra.with_cull_distance(cull);
    }
    dijkstra
        .compute_shortest_paths(graph, source)
        .map(|result| result.distances)
}
