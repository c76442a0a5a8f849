//! Hamiltonian tours of the grid
//!
//! A tour visits every cell exactly once and returns to its start, moving one
//! cardinal step at a time. The autopilot strategies precompute one tour and
//! navigate by tour index.

mod boustrophedon;
mod maze;

use std::collections::HashMap;

use rand::Rng;

use crate::game::Position;

/// A closed tour of the grid: every cell exactly once, consecutive entries
/// (cyclically) one cardinal step apart.
#[derive(Debug, Clone)]
pub struct HamiltonianCycle {
    cells: Vec<Position>,
    indices: HashMap<Position, usize>,
}

impl HamiltonianCycle {
    /// Deterministic column-serpentine tour. Both dimensions must be even for
    /// the tour to close; callers validate that before construction.
    pub fn boustrophedon(width: i32, height: i32) -> Self {
        Self::from_cells(boustrophedon::generate(width, height))
    }

    /// Randomized maze-walk tour. Falls back to the boustrophedon tour when
    /// either dimension is odd.
    pub fn randomized(width: i32, height: i32, rng: &mut impl Rng) -> Self {
        Self::from_cells(maze::generate(width, height, rng))
    }

    fn from_cells(cells: Vec<Position>) -> Self {
        let indices = cells
            .iter()
            .enumerate()
            .map(|(index, &cell)| (cell, index))
            .collect();
        Self { cells, indices }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tour index of a cell, `None` for cells off the tour
    pub fn index_of(&self, cell: Position) -> Option<usize> {
        self.indices.get(&cell).copied()
    }

    /// Cell at a tour index, wrapping past the end
    pub fn cell(&self, index: usize) -> Position {
        self.cells[index % self.cells.len()]
    }

    /// Forward distance from `from` to `to` along the tour, in `[0, len)`
    pub fn distance(&self, from: usize, to: usize) -> usize {
        (to + self.cells.len() - from) % self.cells.len()
    }
}
