//! Weighted 2D grid for the pathfinding demos
//!
//! - [`Grid`]: fixed-size matrix of [`Cell`]s, rebuilt from scratch on
//!   resize or reset
//! - [`search`]: Dijkstra and A* over the grid, returning visit order and
//!   the reconstructed path
//!
//! # Cost model
//!
//! Stepping onto an orthogonal neighbor costs `max(1, weight)` of the
//! destination cell; stepping diagonally (only when enabled) costs
//! `max(1, weight) × √2`. Walls are impassable and never surface as
//! neighbors. Keeping start and goal off walls is the caller's job.

pub mod search;

pub use search::{astar, chebyshev, dijkstra, euclidean, manhattan, SearchOptions, SearchResult};

/// Row/column coordinate.
pub type Pos = (usize, usize);

/// One grid cell.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub wall: bool,
    /// Movement cost multiplier; clamped to at least 1 when entering.
    pub weight: u32,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            wall: false,
            weight: 1,
        }
    }
}

/// Fixed-size 2D grid, row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-open grid with unit weights.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, (row, col): Pos) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn cell(&self, (row, col): Pos) -> &Cell {
        &self.cells[row * self.cols + col]
    }

    pub fn cell_mut(&mut self, (row, col): Pos) -> &mut Cell {
        &mut self.cells[row * self.cols + col]
    }

    pub fn set_wall(&mut self, pos: Pos, wall: bool) {
        self.cell_mut(pos).wall = wall;
    }

    pub fn set_weight(&mut self, pos: Pos, weight: u32) {
        self.cell_mut(pos).weight = weight;
    }

    /// Dense index of a position, usable for flat lookup tables.
    pub fn index(&self, (row, col): Pos) -> usize {
        row * self.cols + col
    }

    /// Passable neighbors of `pos` with the cost of stepping onto each.
    ///
    /// Orthogonal neighbors first, then (when `diagonals`) the four diagonal
    /// ones, in a fixed order so exploration is reproducible.
    pub fn neighbors(&self, pos: Pos, diagonals: bool) -> Vec<(Pos, f64)> {
        const ORTHO: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const DIAG: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

        let mut out = Vec::with_capacity(if diagonals { 8 } else { 4 });
        self.push_neighbors(pos, &ORTHO, 1.0, &mut out);
        if diagonals {
            self.push_neighbors(pos, &DIAG, std::f64::consts::SQRT_2, &mut out);
        }
        out
    }

    fn push_neighbors(
        &self,
        (row, col): Pos,
        deltas: &[(isize, isize)],
        multiplier: f64,
        out: &mut Vec<(Pos, f64)>,
    ) {
        for &(dr, dc) in deltas {
            let (nr, nc) = (row as isize + dr, col as isize + dc);
            if nr < 0 || nc < 0 {
                continue;
            }
            let npos = (nr as usize, nc as usize);
            if !self.in_bounds(npos) {
                continue;
            }
            let cell = self.cell(npos);
            if cell.wall {
                continue;
            }
            out.push((npos, f64::from(cell.weight.max(1)) * multiplier));
        }
    }
}
