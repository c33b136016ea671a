use std::collections::HashMap;

use cull_dijkstra::graph::{Adjacency, DirectedGraph, Graph};
use cull_dijkstra::Error;

#[test]
fn test_add_edge_overwrites_existing_weight() {
    let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
    assert!(graph.add_vertex("a"));
    assert!(graph.add_vertex("b"));
    assert!(!graph.add_vertex("a"));

    graph.add_edge("a", "b", 7).unwrap();
    graph.add_edge("a", "b", 3).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&"a", &"b"), Some(3));
    assert!(!graph.has_edge(&"b", &"a"));
}

#[test]
fn test_add_edge_rejects_bad_input() {
    let mut graph: DirectedGraph<u8, i32> = DirectedGraph::new();
    graph.add_vertex(0);
    graph.add_vertex(1);

    assert!(matches!(graph.add_edge(0, 1, -1), Err(Error::NegativeWeight { .. })));
    assert!(matches!(graph.add_edge(0, 5, 1), Err(Error::InvalidVertex(_))));
    assert!(matches!(graph.add_edge(5, 0, 1), Err(Error::InvalidVertex(_))));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_from_adjacency_adds_missing_neighbours() {
    let mut adjacency: Adjacency<u8, u32> = HashMap::new();
    adjacency.insert(0, HashMap::from([(1, 2), (2, 5)]));

    let graph = DirectedGraph::from_adjacency(&adjacency).unwrap();
    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.contains_vertex(&2));
    assert!(graph.validate().is_ok());
    assert_eq!(graph.outgoing_edges(&1).count(), 0);

    let back = graph.into_adjacency();
    assert_eq!(back[&0], HashMap::from([(1, 2), (2, 5)]));
    assert!(back[&2].is_empty());
}

#[test]
fn test_from_adjacency_rejects_negative_weights() {
    let mut adjacency: Adjacency<u8, i64> = HashMap::new();
    adjacency.insert(0, HashMap::from([(1, -4)]));
    adjacency.insert(1, HashMap::new());

    assert!(matches!(
        DirectedGraph::from_adjacency(&adjacency),
        Err(Error::NegativeWeight { .. })
    ));
}
