use std::collections::HashMap;

use cull_dijkstra::algorithm::ShortestPathAlgorithm;
use cull_dijkstra::graph::generators::{generate_random, generate_random_integer};
use cull_dijkstra::graph::{Adjacency, DirectedGraph, Graph};
use cull_dijkstra::{shortest_paths, Dijkstra, Error};
use ordered_float::OrderedFloat;

// Builds a nested-map adjacency from an edge list; every endpoint becomes a key
fn adjacency<'a>(
    vertices: &[&'a str],
    edges: &[(&'a str, &'a str, u32)],
) -> Adjacency<&'a str, u32> {
    let mut adjacency: Adjacency<&str, u32> =
        vertices.iter().map(|&v| (v, HashMap::new())).collect();
    for &(from, to, weight) in edges {
        adjacency.get_mut(from).unwrap().insert(to, weight);
    }
    adjacency
}

fn diamond() -> Adjacency<&'static str, u32> {
    adjacency(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("A", "C", 4), ("B", "C", 1), ("C", "D", 1)],
    )
}

// Minimum over every simple path, found by exhaustive depth-first enumeration
fn brute_force(graph: &DirectedGraph<usize, u64>, source: usize) -> HashMap<usize, u64> {
    fn walk(
        graph: &DirectedGraph<usize, u64>,
        vertex: usize,
        distance: u64,
        on_path: &mut Vec<bool>,
        best: &mut HashMap<usize, u64>,
    ) {
        let entry = best.entry(vertex).or_insert(u64::MAX);
        if distance < *entry {
            *entry = distance;
        }
        for (&next, weight) in graph.outgoing_edges(&vertex) {
            if !on_path[next] {
                on_path[next] = true;
                walk(graph, next, distance + weight, on_path, best);
                on_path[next] = false;
            }
        }
    }

    let mut on_path = vec![false; graph.vertex_count()];
    on_path[source] = true;
    let mut best = HashMap::new();
    walk(graph, source, 0, &mut on_path, &mut best);
    best
}

// Bellman-Ford over float weights, unreached vertices left out
fn bellman_ford(
    graph: &DirectedGraph<usize, OrderedFloat<f64>>,
    source: usize,
) -> HashMap<usize, OrderedFloat<f64>> {
    let mut dist: HashMap<usize, OrderedFloat<f64>> = HashMap::new();
    dist.insert(source, OrderedFloat(0.0));
    for _ in 1..graph.vertex_count().max(1) {
        let mut changed = false;
        for &u in graph.vertices() {
            let Some(&du) = dist.get(&u) else { continue };
            for (&v, w) in graph.outgoing_edges(&u) {
                let candidate = du + w;
                if dist.get(&v).map_or(true, |&dv| candidate < dv) {
                    dist.insert(v, candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

#[test]
fn test_single_vertex() {
    let graph = adjacency(&["only"], &[]);
    let result = shortest_paths(&graph, &"only", None).unwrap();
    assert_eq!(result, HashMap::from([("only", 0)]));
}

#[test]
fn test_linear_chain() {
    let graph = adjacency(&["A", "B", "C"], &[("A", "B", 3), ("B", "C", 4)]);
    let result = shortest_paths(&graph, &"A", None).unwrap();
    assert_eq!(result, HashMap::from([("A", 0), ("B", 3), ("C", 7)]));
}

#[test]
fn test_diamond_prefers_two_hop_path() {
    let result = shortest_paths(&diamond(), &"A", None).unwrap();
    assert_eq!(result, HashMap::from([("A", 0), ("B", 1), ("C", 2), ("D", 3)]));
}

#[test]
fn test_cull_distance_is_exclusive() {
    let graph = diamond();

    let capped = shortest_paths(&graph, &"A", Some(3)).unwrap();
    assert_eq!(capped, HashMap::from([("A", 0), ("B", 1), ("C", 2)]));

    // C sits exactly on the cap, so it is culled along with D.
    let tighter = shortest_paths(&graph, &"A", Some(2)).unwrap();
    assert_eq!(tighter, HashMap::from([("A", 0), ("B", 1)]));
}

#[test]
fn test_zero_cull_distance_reaches_nothing() {
    let result = shortest_paths(&diamond(), &"A", Some(0)).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_unreachable_vertices_are_absent() {
    let graph = adjacency(
        &["A", "B", "island", "sink"],
        &[("A", "B", 2), ("island", "A", 1), ("island", "sink", 1)],
    );
    let result = shortest_paths(&graph, &"A", None).unwrap();
    assert_eq!(result, HashMap::from([("A", 0), ("B", 2)]));
}

#[test]
fn test_zero_weights_and_self_loops() {
    let graph = adjacency(
        &["A", "B", "C"],
        &[("A", "A", 0), ("A", "B", 0), ("B", "B", 5), ("B", "C", 2), ("C", "A", 0)],
    );
    let result = shortest_paths(&graph, &"A", None).unwrap();
    assert_eq!(result, HashMap::from([("A", 0), ("B", 0), ("C", 2)]));
}

#[test]
fn test_missing_source_is_rejected() {
    let err = shortest_paths(&diamond(), &"Z", None).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(ref v) if v == "\"Z\""));
}

#[test]
fn test_negative_weight_is_rejected() {
    let mut graph: Adjacency<u8, i64> = HashMap::new();
    graph.insert(0, HashMap::from([(1, 4)]));
    graph.insert(1, HashMap::from([(2, -3)]));
    graph.insert(2, HashMap::new());

    let err = shortest_paths(&graph, &0, None).unwrap_err();
    assert!(matches!(
        err,
        Error::NegativeWeight { ref from, ref to, .. } if from == "1" && to == "2"
    ));
}

#[test]
fn test_edge_outside_graph_is_rejected() {
    let mut graph: Adjacency<u8, u32> = HashMap::new();
    graph.insert(0, HashMap::from([(9, 1)]));

    let err = shortest_paths(&graph, &0, None).unwrap_err();
    assert!(matches!(err, Error::UnknownVertex { .. }));
}

#[test]
fn test_sums_past_the_cap_do_not_overflow() {
    let mut graph: Adjacency<char, u8> = HashMap::new();
    graph.insert('a', HashMap::from([('b', 200)]));
    graph.insert('b', HashMap::from([('c', 100)]));
    graph.insert('c', HashMap::new());

    // Default cap is u8::MAX; 300 cannot be represented and lies past it.
    let result = shortest_paths(&graph, &'a', None).unwrap();
    assert_eq!(result, HashMap::from([('a', 0), ('b', 200)]));
}

#[test]
fn test_superseded_entries_are_counted_as_stale() {
    let graph = adjacency(
        &["A", "B", "C", "D"],
        &[("A", "B", 5), ("A", "C", 1), ("C", "B", 1), ("B", "D", 10)],
    );
    let dijkstra: Dijkstra<u32> = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &"A").unwrap();

    assert_eq!(result.distance(&"B"), Some(2));
    assert_eq!(result.distance(&"D"), Some(12));
    assert_eq!(result.stats.pushed, 5);
    assert_eq!(result.stats.stale, 1);
    assert_eq!(result.stats.finalized, 4);
    assert_eq!(result.source, "A");
}

#[test]
fn test_float_weights() {
    let mut graph: DirectedGraph<u32, OrderedFloat<f64>> = DirectedGraph::new();
    for v in 0..4 {
        graph.add_vertex(v);
    }
    graph.add_edge(0, 1, OrderedFloat(0.5)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(0.25)).unwrap();
    graph.add_edge(0, 2, OrderedFloat(1.0)).unwrap();
    graph.add_edge(2, 3, OrderedFloat(2.0)).unwrap();

    let dijkstra = Dijkstra::new().with_cull_distance(OrderedFloat(2.5));
    let result = dijkstra.compute_shortest_paths(&graph, &0).unwrap();

    assert_eq!(result.distance(&2), Some(OrderedFloat(0.75)));
    assert!(!result.is_reachable(&3));
    assert_eq!(result.reachable_count(), 3);
}

#[test]
fn test_matches_brute_force_on_small_graphs() {
    for seed in 0..40 {
        let graph = generate_random_integer(7, 2.0, 9, seed);
        for source in 0..graph.vertex_count() {
            let expected = brute_force(&graph, source);
            let actual = shortest_paths(&graph, &source, None).unwrap();
            assert_eq!(actual, expected, "seed {} source {}", seed, source);
        }
    }
}

#[test]
fn test_matches_bellman_ford_on_float_graphs() {
    for seed in 0..10 {
        let graph = generate_random(200, 3.0, seed);
        let expected = bellman_ford(&graph, 0);
        let actual = shortest_paths(&graph, &0, None).unwrap();
        assert_eq!(actual, expected, "seed {}", seed);
    }
}

#[test]
fn test_raising_the_cap_only_adds_vertices() {
    let graph = generate_random_integer(60, 3.0, 20, 11);
    let uncapped = shortest_paths(&graph, &0, None).unwrap();

    let mut previous: HashMap<usize, u64> = HashMap::new();
    for cull in [0, 1, 5, 10, 20, 40, 80, 1_000] {
        let capped = shortest_paths(&graph, &0, Some(cull)).unwrap();

        for (vertex, distance) in &capped {
            assert!(*distance < cull);
            assert_eq!(uncapped.get(vertex), Some(distance));
        }
        for (vertex, distance) in &uncapped {
            assert_eq!(capped.contains_key(vertex), *distance < cull);
        }
        for (vertex, distance) in &previous {
            assert_eq!(capped.get(vertex), Some(distance));
        }
        previous = capped;
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let graph = generate_random_integer(100, 4.0, 50, 3);
    let dijkstra = Dijkstra::new().with_cull_distance(120u64);

    let first = dijkstra.compute_shortest_paths(&graph, &5).unwrap();
    let second = dijkstra.compute_shortest_paths(&graph, &5).unwrap();
    assert_eq!(first.distances, second.distances);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_adjacency_and_directed_graph_agree() {
    let graph = generate_random_integer(80, 3.0, 15, 21);
    let as_map = graph.clone().into_adjacency();

    assert_eq!(as_map.vertex_count(), graph.vertex_count());
    assert_eq!(as_map.edge_count(), graph.edge_count());
    assert_eq!(
        shortest_paths(&as_map, &0, None).unwrap(),
        shortest_paths(&graph, &0, None).unwrap()
    );
}

#[test]
fn test_algorithm_name() {
    let dijkstra: Dijkstra<u32> = Dijkstra::new();
    let name =
        <Dijkstra<u32> as ShortestPathAlgorithm<&str, u32, Adjacency<&str, u32>>>::name(&dijkstra);
    assert_eq!(name, "Dijkstra");
}

#[test]
fn test_validation_can_be_skipped_for_trusted_graphs() {
    let graph = diamond();
    let trusted: Dijkstra<u32> = Dijkstra::new().with_validation(false);
    let result = trusted.compute_shortest_paths(&graph, &"A").unwrap();
    assert_eq!(result.distances, shortest_paths(&graph, &"A", None).unwrap());

    // The source check still runs.
    assert!(trusted.compute_shortest_paths(&graph, &"Z").is_err());
}

#[test]
fn test_float_sum_rounding_onto_the_cull_is_culled() {
    let first = 0.7_f64;
    // Largest double below 1.0 - 0.7; adding it to 0.7 rounds up to exactly 1.0.
    let second = f64::from_bits((1.0_f64 - first).to_bits() - 1);
    assert!(second < 1.0 - first);
    assert_eq!(first + second, 1.0);

    let mut graph: DirectedGraph<u32, OrderedFloat<f64>> = DirectedGraph::new();
    for v in 0..3 {
        graph.add_vertex(v);
    }
    graph.add_edge(0, 1, OrderedFloat(first)).unwrap();
    graph.add_edge(1, 2, OrderedFloat(second)).unwrap();

    let cull = OrderedFloat(1.0);
    let result = shortest_paths(&graph, &0, Some(cull)).unwrap();

    assert_eq!(result, HashMap::from([(0, OrderedFloat(0.0)), (1, OrderedFloat(first))]));
    assert!(result.values().all(|&distance| distance < cull));
}

#[test]
fn test_unvalidated_negative_weights_do_not_overflow() {
    let mut graph: Adjacency<char, i64> = HashMap::new();
    graph.insert('a', HashMap::from([('b', -1)]));
    graph.insert('b', HashMap::from([('c', 2)]));
    graph.insert('c', HashMap::new());

    // Default cap is i64::MAX; a negative distance must not push the cap check past it.
    let trusted: Dijkstra<i64> = Dijkstra::new().with_validation(false);
    let result = trusted.compute_shortest_paths(&graph, &'a').unwrap();

    assert_eq!(result.distance(&'b'), Some(-1));
    assert_eq!(result.distance(&'c'), Some(1));
}
