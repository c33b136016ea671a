//! Plain-text tables for grid-shaped values.

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::graph::grid::{Tile, TileMap};

/// A rows x columns table of optional cells
///
/// Renders a header of column indices, a rule, then each row prefixed by its
/// index. Missing cells are left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTable<T> {
    cells: Vec<Vec<Option<T>>>,
}

impl<T: Display> GridTable<T> {
    /// Creates an empty table
    pub fn new(rows: usize, columns: usize) -> Self {
        GridTable {
            cells: (0..rows)
                .map(|_| (0..columns).map(|_| None).collect())
                .collect(),
        }
    }

    /// Places distances keyed by tile onto a table; tiles outside it are ignored
    pub fn from_distances<W>(rows: usize, columns: usize, distances: &HashMap<Tile, W>) -> Self
    where
        W: Clone + Into<T>,
    {
        let mut table = GridTable::new(rows, columns);
        for (&tile, distance) in distances {
            table.set(tile, distance.clone().into());
        }
        table
    }

    /// Sets a cell, returning false if it is out of range
    pub fn set(&mut self, (row, column): Tile, value: T) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) => {
                *cell = Some(value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, (row, column): Tile) -> Option<&T> {
        self.cells.get(row)?.get(column)?.as_ref()
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }
}

impl GridTable<i32> {
    /// Table of a tile map's walkable tiles; blocked tiles are left blank
    pub fn from_tile_map(map: &TileMap) -> Self {
        GridTable {
            cells: map
                .tiles()
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|&tile| if tile > 0 { Some(tile) } else { None })
                        .collect()
                })
                .collect(),
        }
    }
}

impl<T: Display> Display for GridTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}", "")?;
        for column in 0..self.columns() {
            write!(f, "{:>4}", column)?;
        }
        writeln!(f)?;

        for _ in 0..=self.columns() {
            write!(f, "----")?;
        }
        writeln!(f)?;

        for (index, row) in self.cells.iter().enumerate() {
            write!(f, "{:>3}|", index)?;
            for cell in row {
                match cell {
                    Some(value) => write!(f, "{:>4}", value.to_string())?,
                    None => write!(f, "{:>4}", "")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
