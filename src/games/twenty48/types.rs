//! 2048 game data structures.
//!
//! Slide numbered tiles around a 4x4 grid; equal tiles that collide merge into
//! their sum.

use crate::core::constants::{GRID_SIZE, SPAWN_TWO_CHANCE};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Row-major 4x4 grid. 0 marks an empty cell.
pub type Grid = [[u32; GRID_SIZE]; GRID_SIZE];

/// Main game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game2048 {
    pub grid: Grid,
    /// Sum of every tile currently on the grid, refreshed after each accepted
    /// move. Starts at 0 even though the opening tiles are already placed.
    pub score: u32,
    pub game_over: bool,
    /// Accepted moves since the last reset.
    pub moves: u32,
}

impl Game2048 {
    /// Create a game with two opening tiles.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let grid = spawn_tile(spawn_tile(empty_grid(), rng), rng);
        Self {
            grid,
            score: 0,
            game_over: false,
            moves: 0,
        }
    }

    /// The largest tile on the grid, 0 for an empty grid.
    pub fn best_tile(&self) -> u32 {
        self.grid.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn tile_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&v| v != 0).count()
    }
}

pub fn empty_grid() -> Grid {
    [[0; GRID_SIZE]; GRID_SIZE]
}

/// Coordinates `(row, col)` of every empty cell, in row-major order.
pub fn empty_cells(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (i, row) in grid.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if value == 0 {
                cells.push((i, j));
            }
        }
    }
    cells
}

/// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
///
/// A full grid is returned unchanged.
pub fn spawn_tile<R: Rng>(mut grid: Grid, rng: &mut R) -> Grid {
    let cells = empty_cells(&grid);
    if cells.is_empty() {
        return grid;
    }
    let (i, j) = cells[rng.gen_range(0..cells.len())];
    grid[i][j] = if rng.gen::<f64>() < SPAWN_TWO_CHANCE {
        2
    } else {
        4
    };
    grid
}

/// Sum of all tile values.
pub fn grid_sum(grid: &Grid) -> u32 {
    grid.iter().flatten().sum()
}
