use crate::graph::DirectedGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a width*height grid graph with 4-connectivity and unit weights
///
/// Vertex ids are `row * width + column`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, u64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for v in 0..width * height {
        graph.add_vertex(v);
    }

    let index = |row: usize, column: usize| -> usize { row * width + column };

    for row in 0..height {
        for column in 0..width {
            let current = index(row, column);
            let mut neighbors = Vec::with_capacity(4);
            if row > 0 {
                neighbors.push(index(row - 1, column));
            }
            if column > 0 {
                neighbors.push(index(row, column - 1));
            }
            if row + 1 < height {
                neighbors.push(index(row + 1, column));
            }
            if column + 1 < width {
                neighbors.push(index(row, column + 1));
            }
            for neighbor in neighbors {
                graph
                    .add_edge(current, neighbor, 1)
                    .expect("grid endpoints are always vertices");
            }
        }
    }

    graph
}

/// Generates a random directed graph with n vertices and about `edge_factor * n` edges
///
/// Weights are drawn from `[1, 100)`. The same seed always yields the same graph.
pub fn generate_random(
    n: usize,
    edge_factor: f64,
    seed: u64,
) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops and ensure positive weights
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph
                .add_edge(u, v, weight)
                .expect("random endpoints are always vertices");
        }
    }

    graph
}

/// Generates a random graph with small integer weights, zero included
pub fn generate_random_integer(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    seed: u64,
) -> DirectedGraph<usize, u64> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight);
        graph
            .add_edge(u, v, weight)
            .expect("random endpoints are always vertices");
    }

    graph
}
