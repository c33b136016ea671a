use std::env;
use std::fs;

use cull_dijkstra::algorithm::ShortestPathAlgorithm;
use cull_dijkstra::{Dijkstra, GridTable, TileMap};

/// Configuration for the tile map demo
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub start_row: usize,
    pub start_column: usize,
    pub cull_distance: u32,
    pub tile_map: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            start_row: 0,
            start_column: 0,
            cull_distance: 100,
            tile_map: None,
        }
    }
}

impl DemoConfig {
    /// Positional arguments: [start_row] [start_column] [cull_distance] [tile_map.json]
    fn from_args(args: &[String]) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = DemoConfig::default();
        if let Some(row) = args.get(1) {
            config.start_row = row.parse()?;
        }
        if let Some(column) = args.get(2) {
            config.start_column = column.parse()?;
        }
        if let Some(cull) = args.get(3) {
            config.cull_distance = cull.parse()?;
        }
        config.tile_map = args.get(4).cloned();
        Ok(config)
    }
}

fn default_tile_map() -> Vec<Vec<i32>> {
    vec![
        vec![1, 1, 0, 1, 1, 1],
        vec![1, 1, 0, 1, 0, 1],
        vec![0, 1, 1, 0, 1, 1],
        vec![1, 0, 1, 0, 1, 0],
        vec![0, 1, 1, 1, 1, 1],
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = DemoConfig::from_args(&args)?;
    log::debug!("{:?}", config);

    let map = match &config.tile_map {
        Some(path) => TileMap::from_json(&fs::read_to_string(path)?)?,
        None => TileMap::new(default_tile_map())?,
    };

    println!("TILE MAP (Empty-Space is Non-Walkable)");
    println!("{}", GridTable::from_tile_map(&map));

    println!(
        "Running Dijkstra's Algorithm from (row = {}, column = {})",
        config.start_row, config.start_column
    );
    println!(
        "With a maximum reachable distance of {}",
        config.cull_distance.saturating_sub(1)
    );
    println!();

    let graph = map.to_graph();
    let dijkstra = Dijkstra::new().with_cull_distance(config.cull_distance);
    let result =
        dijkstra.compute_shortest_paths(&graph, &(config.start_row, config.start_column))?;

    println!("DISTANCE MAP (Empty-Space is Unreachable)");
    let table: GridTable<u32> =
        GridTable::from_distances(map.rows(), map.columns(), &result.distances);
    println!("{}", table);

    log::info!("search stats: {}", serde_json::to_string(&result.stats)?);

    Ok(())
}
