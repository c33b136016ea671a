use std::time::{Duration, Instant};

use cull_dijkstra::algorithm::ShortestPathAlgorithm;
use cull_dijkstra::graph::generators::generate_random;
use cull_dijkstra::graph::{DirectedGraph, Graph};
use cull_dijkstra::Dijkstra;
use ordered_float::OrderedFloat;

// Function to benchmark one configuration on a graph
fn benchmark_algorithm(
    name: &str,
    algorithm: &Dijkstra<OrderedFloat<f64>>,
    graph: &DirectedGraph<usize, OrderedFloat<f64>>,
    source: usize,
) -> Duration {
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, &source) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("  - {} failed: {}", name, e);
            return Duration::ZERO;
        }
    };
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable vertices in {:?} ({} pushed, {} stale)",
        result.reachable_count(),
        duration,
        result.stats.pushed,
        result.stats.stale
    );

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let cull = OrderedFloat(150.0);

    println!("=====================================================");
    println!("Benchmark: Dijkstra, uncapped vs cull distance {}", cull);
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let uncapped: Dijkstra<OrderedFloat<f64>> = Dijkstra::new();
    let capped = Dijkstra::new().with_cull_distance(cull);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, size as u64);
        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let uncapped_time = benchmark_algorithm("Dijkstra (uncapped)", &uncapped, &graph, 0);
        let capped_time = benchmark_algorithm("Dijkstra (capped)", &capped, &graph, 0);
        results.push((size, uncapped_time, capped_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15}", "Vertices", "Uncapped (ms)", "Capped (ms)");
    println!("-----------------------------------------------------");

    for (size, uncapped_time, capped_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15}",
            size,
            uncapped_time.as_millis(),
            capped_time.as_millis()
        );
    }
}
