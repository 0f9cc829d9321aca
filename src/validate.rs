//! Check that a completed grid spells exactly the given words.
//!
//! Every maximal run of two or more letters, read across each row and down
//! each column, has to be one of the words. Taken together the runs have to
//! match the word list exactly, so no word is missing and none is spelled
//! twice. Single letters are crossing points and are not read as words.

use crate::{
    arrangement::Arrangement,
    board::Board,
    error::InvalidGrid,
    grid::{Bounds, Grid, Position},
    word::{Letter, Word, INLINE_WORD_LENGTH},
};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

type Run = SmallVec<[Letter; INLINE_WORD_LENGTH]>;

/// Validator for completed grids over a fixed word list.
#[derive(Debug, Clone)]
pub struct Validator {
    ids: FxHashMap<Box<[Letter]>, usize>,
    // Indexed by word id.
    names: Vec<String>,
    expected: Vec<usize>,
}

impl Validator {
    /// Create a validator for the given words.
    ///
    /// Words with a single letter can never be read back from a grid, so they
    /// are not counted.
    pub fn new<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut validator = Validator {
            ids: FxHashMap::default(),
            names: Vec::new(),
            expected: Vec::new(),
        };

        for word in words.into_iter().filter(|word| word.len() >= 2) {
            let next_id = validator.names.len();
            let id = *validator
                .ids
                .entry(word.letters().into())
                .or_insert(next_id);

            if id == next_id {
                validator.names.push(word.to_string());
                validator.expected.push(0);
            }
            validator.expected[id] += 1;
        }

        validator
    }

    /// Check the occupied rectangle of a board.
    pub fn check<G: Grid>(&self, board: &Board<G>) -> Result<(), InvalidGrid> {
        self.check_cells(board.bounds(), |position| board.get(position))
    }

    /// Check a trimmed arrangement.
    pub fn check_arrangement(&self, arrangement: &Arrangement) -> Result<(), InvalidGrid> {
        let bounds = Bounds {
            min_row: 0,
            max_row: arrangement.height() as i32 - 1,
            min_column: 0,
            max_column: arrangement.width() as i32 - 1,
        };

        self.check_cells(bounds, |position| {
            arrangement.get(position.row as usize, position.column as usize)
        })
    }

    /// Return true if the board spells exactly the word list.
    pub fn is_valid<G: Grid>(&self, board: &Board<G>) -> bool {
        self.check(board).is_ok()
    }

    fn check_cells(
        &self,
        bounds: Bounds,
        get: impl Fn(Position) -> Option<Letter>,
    ) -> Result<(), InvalidGrid> {
        let mut counts = vec![0; self.expected.len()];
        let mut run = Run::new();

        for row in bounds.min_row..=bounds.max_row {
            for column in bounds.min_column..=bounds.max_column {
                match get(Position::new(row, column)) {
                    Some(letter) => run.push(letter),
                    None => self.close_run(&mut run, &mut counts)?,
                }
            }
            self.close_run(&mut run, &mut counts)?;
        }

        for column in bounds.min_column..=bounds.max_column {
            for row in bounds.min_row..=bounds.max_row {
                match get(Position::new(row, column)) {
                    Some(letter) => run.push(letter),
                    None => self.close_run(&mut run, &mut counts)?,
                }
            }
            self.close_run(&mut run, &mut counts)?;
        }

        match counts
            .iter()
            .zip(&self.expected)
            .position(|(seen, expected)| seen < expected)
        {
            Some(id) => Err(InvalidGrid::MissingWord(self.names[id].clone())),
            None => Ok(()),
        }
    }

    fn close_run(&self, run: &mut Run, counts: &mut [usize]) -> Result<(), InvalidGrid> {
        if run.len() >= 2 {
            let Some(&id) = self.ids.get(&run[..]) else {
                return Err(InvalidGrid::UnexpectedWord(
                    run.iter().map(|letter| letter.to_char()).collect(),
                ));
            };

            counts[id] += 1;
            if counts[id] > self.expected[id] {
                return Err(InvalidGrid::RepeatedWord(self.names[id].clone()));
            }
        }

        run.clear();
        Ok(())
    }
}
