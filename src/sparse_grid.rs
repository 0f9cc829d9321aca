//! Sparse `Grid` implementation for use in the `Solver`.
//!
//! Cells are kept in a hash map, so the grid grows on demand in any direction
//! and its memory use only depends on the number of letters placed.

use crate::{
    grid::{Grid, Position},
    word::Letter,
};
use rustc_hash::FxHashMap;

/// Sparse grid implementation
#[derive(Debug, Clone, Default)]
pub struct SparseGrid {
    cells: FxHashMap<Position, Letter>,
}

impl Grid for SparseGrid {
    fn with_extent(extent: usize) -> Self {
        SparseGrid {
            cells: FxHashMap::with_capacity_and_hasher(extent, Default::default()),
        }
    }

    fn get(&self, position: Position) -> Option<Letter> {
        self.cells.get(&position).copied()
    }

    fn set(&mut self, position: Position, letter: Letter) {
        let previous = self.cells.insert(position, letter);
        debug_assert!(previous.is_none(), "overwrote an occupied cell");
    }

    fn clear(&mut self, position: Position) {
        self.cells.remove(&position);
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}
