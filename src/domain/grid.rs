use std::fmt;

use rand::Rng;
use rayon::prelude::*;

use super::Cell;
use crate::error::{LifeError, Result};

/// Moore neighborhood offsets as (row, col) deltas.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid is the fixed-size board, stored row-major.
/// Dimensions never change after creation. Coordinates outside the board
/// read as dead and writes to them are ignored.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Random grid where each cell is alive with probability `alive_probability`
    pub fn random(rows: usize, cols: usize, alive_probability: f64) -> Self {
        Self::random_with(rows, cols, alive_probability, &mut rand::rng())
    }

    /// Random grid drawn from the given source of randomness
    pub fn random_with<R: Rng>(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Self {
        // random_bool panics outside [0, 1]
        let p = if alive_probability.is_finite() {
            alive_probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let cells = (0..rows * cols)
            .map(|_| Cell::from_alive(rng.random_bool(p)))
            .collect();
        Self { rows, cols, cells }
    }

    /// Parse a grid from text rows using `#` (alive) and `.` (dead)
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let cols = rows.first().ok_or(LifeError::EmptyGrid)?.chars().count();
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(LifeError::RaggedRow { row, expected: cols, found });
            }
            for (col, ch) in line.chars().enumerate() {
                cells.push(match ch {
                    '#' => Cell::Alive,
                    '.' => Cell::Dead,
                    _ => return Err(LifeError::InvalidCellChar { ch, row, col }),
                });
            }
        }

        Ok(Self { rows: rows.len(), cols, cells })
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Alive check where anything off the board counts as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out-of-range writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Bring the cell at (row, col) to life.
    /// Signed coordinates come straight from pointer mapping and may fall
    /// off the board; those are ignored. Returns whether the cell changed.
    pub fn paint(&mut self, row: i32, col: i32) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };
        match self.get(row, col) {
            Some(Cell::Dead) => {
                self.set(row, col, Cell::Alive);
                true
            }
            _ => false,
        }
    }

    /// Count live neighbors; the board has hard edges, nothing wraps
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
            })
            .filter(|&(r, c)| self.is_alive(r, c))
            .count() as u8
    }

    fn next_cell(&self, idx: usize) -> Cell {
        let (row, col) = (idx / self.cols, idx % self.cols);
        self.cells[idx].evolve(self.count_live_neighbors(row, col))
    }

    /// Pure functional evolution - returns the next generation (serial)
    pub fn step(&self) -> Self {
        let cells = (0..self.cells.len()).map(|idx| self.next_cell(idx)).collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Same transition as [`Grid::step`], computed on the rayon pool
    pub fn step_parallel(&self) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True iff every cell is dead
    pub fn is_all_dead(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
