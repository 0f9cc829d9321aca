//! The state of a partially filled crossword and the placement of words into
//! it.
//!
//! A `Board` owns a [`Grid`], the [`LetterIndex`] of places where new words
//! can cross existing letters, and the bounding box of the occupied cells.
//! Every successful placement is recorded so that [`Board::undo`] can put the
//! board back exactly as it was, letting sibling branches of the search share
//! one board instead of copying it.

use crate::{
    arrangement::Arrangement,
    grid::{Bounds, Conflict, Direction, Grid, Position, Write},
    letter_index::{LetterIndex, Site},
    word::{Letter, Word, INLINE_WORD_LENGTH},
};
use smallvec::SmallVec;

/// A crossword under construction.
#[derive(Debug)]
pub struct Board<G> {
    grid: G,
    index: LetterIndex,
    bounds: Bounds,
    history: Vec<Placement>,
}

/// Everything needed to reverse one successful placement.
#[derive(Debug)]
struct Placement {
    // Cells that were empty before the placement, in the order written. Each
    // one exposed exactly one site.
    written: SmallVec<[Position; INLINE_WORD_LENGTH]>,
    consumed: (Letter, usize, Site),
    bounds: Bounds,
}

impl<G: Grid> Board<G> {
    /// Create a board holding only `seed`, laid across from `(0, 0)`.
    ///
    /// `extent` is the total number of letters in the word list, see
    /// [`Grid::with_extent`]. Every letter of the seed is exposed for a word
    /// laid down through it.
    pub fn seed(seed: &Word, extent: usize) -> Self {
        let mut grid = G::with_extent(extent.max(seed.len()));
        let mut index = LetterIndex::new();
        let origin = Position::new(0, 0);
        let mut bounds = Bounds::at(origin);

        for (offset, &letter) in seed.letters().iter().enumerate() {
            let position = origin.step(Direction::Across, offset as i32);

            grid.set(position, letter);
            index.expose(
                letter,
                Site {
                    position,
                    direction: Direction::Down,
                },
            );
            bounds.include(position);
        }

        Board {
            grid,
            index,
            bounds,
            history: Vec::new(),
        }
    }

    /// Try to place `word` so that its letter at `cross_index` lands on the
    /// site in `slot` of the letter index list for that letter.
    ///
    /// The word is laid in the direction of the site. Empty cells receive the
    /// word's letter and expose a new site perpendicular to the word. Cells
    /// already holding the same letter are shared and expose nothing new. If
    /// any cell holds a different letter the board is left untouched and the
    /// `Conflict` is returned.
    ///
    /// On success the crossed site is consumed, so no later word in this
    /// branch can cross the same cell in the same direction.
    ///
    /// # Panics
    ///
    /// Panics if `cross_index` is not an index into `word`, or if `slot` is
    /// not an index into the sites of the letter at `cross_index`.
    pub fn try_place(
        &mut self,
        word: &Word,
        cross_index: usize,
        slot: usize,
    ) -> Result<(), Conflict> {
        let letter = word.letters()[cross_index];
        let site = self.index.sites(letter)[slot];
        debug_assert_eq!(self.grid.get(site.position), Some(letter));

        let start = site.position.step(site.direction, -(cross_index as i32));
        let previous_bounds = self.bounds;
        let mut written = SmallVec::new();

        for (offset, &letter) in word.letters().iter().enumerate() {
            let position = start.step(site.direction, offset as i32);

            match self.grid.write(position, letter) {
                Ok(Write::Placed) => {
                    written.push(position);
                    self.index.expose(
                        letter,
                        Site {
                            position,
                            direction: site.direction.perpendicular(),
                        },
                    );
                    self.bounds.include(position);
                }
                Ok(Write::Shared) => {}
                Err(conflict) => {
                    self.erase(&written);
                    self.bounds = previous_bounds;
                    return Err(conflict);
                }
            }
        }

        let consumed = self.index.consume(letter, slot);
        self.history.push(Placement {
            written,
            consumed: (letter, slot, consumed),
            bounds: previous_bounds,
        });

        Ok(())
    }

    /// Reverse the most recent successful placement.
    ///
    /// Returns false if only the seed word is on the board.
    pub fn undo(&mut self) -> bool {
        let Some(placement) = self.history.pop() else {
            return false;
        };

        let (letter, slot, site) = placement.consumed;
        self.index.restore(letter, slot, site);
        self.erase(&placement.written);
        self.bounds = placement.bounds;

        true
    }

    fn erase(&mut self, written: &[Position]) {
        for &position in written.iter().rev() {
            let letter = self
                .grid
                .get(position)
                .expect("written cells should still be occupied");

            self.grid.clear(position);
            self.index.retract(letter);
        }
    }

    /// Return the letter in the cell, if any.
    pub fn get(&self, position: Position) -> Option<Letter> {
        self.grid.get(position)
    }

    /// Return the bounding box of the occupied cells.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Return the current letter index.
    pub fn letter_index(&self) -> &LetterIndex {
        &self.index
    }

    /// Return the number of words placed after the seed word.
    pub fn placed(&self) -> usize {
        self.history.len()
    }

    /// Copy the occupied rectangle of the board.
    pub fn arrangement(&self) -> Arrangement {
        Arrangement::capture(self.bounds, |position| self.grid.get(position))
    }
}
