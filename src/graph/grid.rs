use serde::{Deserialize, Serialize};

use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// A grid cell as (row, column), row zero at the top
pub type Tile = (usize, usize);

/// A rectangular tile map where a tile is walkable if it is positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTileMap")]
pub struct TileMap {
    tiles: Vec<Vec<i32>>,
}

/// Unchecked shape of a serialized tile map
#[derive(Deserialize)]
struct RawTileMap {
    tiles: Vec<Vec<i32>>,
}

impl TryFrom<RawTileMap> for TileMap {
    type Error = Error;

    fn try_from(raw: RawTileMap) -> Result<Self> {
        TileMap::new(raw.tiles)
    }
}

impl TileMap {
    /// Creates a tile map, rejecting empty or ragged rows
    pub fn new(tiles: Vec<Vec<i32>>) -> Result<Self> {
        let columns = match tiles.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(Error::InvalidTileMap("map has no tiles".to_string())),
        };
        if let Some(row) = tiles.iter().position(|row| row.len() != columns) {
            return Err(Error::InvalidTileMap(format!(
                "row {} has {} tiles, expected {}",
                row,
                tiles[row].len(),
                columns
            )));
        }
        Ok(TileMap { tiles })
    }

    /// Parses a tile map from JSON of the form `{"tiles": [[1, 0], [1, 1]]}`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidTileMap(e.to_string()))
    }

    /// The raw tile values, row by row
    pub fn tiles(&self) -> &[Vec<i32>] {
        &self.tiles
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn columns(&self) -> usize {
        self.tiles[0].len()
    }

    /// Returns true if the tile exists and is walkable
    pub fn is_walkable(&self, (row, column): Tile) -> bool {
        self.tiles
            .get(row)
            .and_then(|r| r.get(column))
            .map_or(false, |&tile| tile > 0)
    }

    /// Walkable 4-directional neighbours of a tile, in north, west, south, east order
    pub fn neighbors(&self, (row, column): Tile) -> Vec<Tile> {
        let mut found = Vec::with_capacity(4);
        if row > 0 {
            found.push((row - 1, column));
        }
        if column > 0 {
            found.push((row, column - 1));
        }
        if row + 1 < self.rows() {
            found.push((row + 1, column));
        }
        if column + 1 < self.columns() {
            found.push((row, column + 1));
        }
        found.retain(|&tile| self.is_walkable(tile));
        found
    }

    /// Builds the movement graph: one vertex per walkable tile, unit-weight
    /// edges between walkable cardinal neighbours
    pub fn to_graph(&self) -> DirectedGraph<Tile, u32> {
        let mut graph = DirectedGraph::with_capacity(self.rows() * self.columns());
        let walkable: Vec<Tile> = (0..self.rows())
            .flat_map(|row| (0..self.columns()).map(move |column| (row, column)))
            .filter(|&tile| self.is_walkable(tile))
            .collect();

        for &tile in &walkable {
            graph.add_vertex(tile);
        }
        for &tile in &walkable {
            for neighbor in self.neighbors(tile) {
                if let Err(e) = graph.add_edge(tile, neighbor, 1) {
                    log::warn!("skipping edge {:?} -> {:?}: {}", tile, neighbor, e);
                }
            }
        }
        graph
    }
}
