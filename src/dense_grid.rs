//! Dense `Grid` implementation for use in the `Solver`.
//!
//! The benefit of this grid is that the implementation is easy to audit and
//! avoid hashing. Likely more efficient for short word lists, since the buffer
//! is sized up front from the total number of letters.

use crate::{
    grid::{Grid, Position},
    word::Letter,
};

/// Dense grid implementation
#[derive(Debug, Clone)]
pub struct DenseGrid {
    side_length: usize,
    origin: i32,
    occupied: usize,

    data: Vec<Option<Letter>>,
}

impl DenseGrid {
    #[inline]
    fn to_index(&self, position: Position) -> Option<usize> {
        let row = usize::try_from(position.row + self.origin).ok()?;
        let column = usize::try_from(position.column + self.origin).ok()?;

        if row < self.side_length && column < self.side_length {
            Some(row * self.side_length + column)
        } else {
            None
        }
    }
}

impl Grid for DenseGrid {
    fn with_extent(extent: usize) -> Self {
        // Rows reach from -extent to extent. Columns reach from -extent to
        // the end of the seed word plus extent, and the seed is no longer
        // than extent.
        let side_length = 3 * extent + 1;

        DenseGrid {
            side_length,
            origin: extent as i32,
            occupied: 0,
            data: vec![None; side_length * side_length],
        }
    }

    fn get(&self, position: Position) -> Option<Letter> {
        self.to_index(position).and_then(|index| self.data[index])
    }

    fn set(&mut self, position: Position, letter: Letter) {
        let index = self
            .to_index(position)
            .expect("position should be inside of the reserved extent");

        debug_assert!(self.data[index].is_none(), "overwrote an occupied cell");
        self.data[index] = Some(letter);
        self.occupied += 1;
    }

    fn clear(&mut self, position: Position) {
        if let Some(index) = self.to_index(position) {
            if self.data[index].take().is_some() {
                self.occupied -= 1;
            }
        }
    }

    fn len(&self) -> usize {
        self.occupied
    }
}
