//! Coordinates on an unbounded grid and the storage of letters in it.

use crate::word::Letter;
use std::fmt::Debug;

/// A cell coordinate.
///
/// Rows grow downward and columns grow rightward. The seed word of a search
/// starts at `(0, 0)`, so later words may reach negative coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// The row index.
    pub row: i32,
    /// The column index.
    pub column: i32,
}

impl Position {
    /// Create a new `Position`.
    pub const fn new(row: i32, column: i32) -> Self {
        Position { row, column }
    }

    /// Return the position `offset` cells away along `direction`.
    pub fn step(self, direction: Direction, offset: i32) -> Self {
        match direction {
            Direction::Across => Position::new(self.row, self.column + offset),
            Direction::Down => Position::new(self.row + offset, self.column),
        }
    }
}

/// The orientation a word is laid in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// Return the direction at a right angle to this one.
    pub fn perpendicular(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }
}

/// An inclusive bounding box of occupied cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// The smallest occupied row.
    pub min_row: i32,
    /// The largest occupied row.
    pub max_row: i32,
    /// The smallest occupied column.
    pub min_column: i32,
    /// The largest occupied column.
    pub max_column: i32,
}

impl Bounds {
    /// Return the bounding box of a single cell.
    pub fn at(position: Position) -> Self {
        Bounds {
            min_row: position.row,
            max_row: position.row,
            min_column: position.column,
            max_column: position.column,
        }
    }

    /// Grow the bounding box so it contains `position`.
    pub fn include(&mut self, position: Position) {
        self.min_row = self.min_row.min(position.row);
        self.max_row = self.max_row.max(position.row);
        self.min_column = self.min_column.min(position.column);
        self.max_column = self.max_column.max(position.column);
    }

    /// Return the number of rows covered.
    pub fn height(&self) -> usize {
        (self.max_row - self.min_row + 1) as usize
    }

    /// Return the number of columns covered.
    pub fn width(&self) -> usize {
        (self.max_column - self.min_column + 1) as usize
    }
}

/// A cell already holds a different letter from the one being written.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// The contested cell.
    pub position: Position,
    /// The letter already in the cell.
    pub existing: Letter,
    /// The letter that could not be written.
    pub attempted: Letter,
}

/// The outcome of a successful [`Grid::write`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Write {
    /// The cell was empty and now holds the letter.
    Placed,
    /// The cell already held the same letter, so the words share it.
    Shared,
}

/// A trait that describes a two dimensional mapping from cells to letters,
/// which the search writes words into and erases them from.
///
/// Implementations only store letters. The occupied extent and the letter
/// index are kept by the [`Board`](crate::board::Board) that owns the grid.
pub trait Grid: Debug {
    /// Create an empty grid that can hold every cell reachable from a seed
    /// word starting at `(0, 0)`, when the word list holds `extent` letters
    /// in total.
    ///
    /// No placed letter can be more than `extent` cells away from the seed,
    /// in either direction.
    fn with_extent(extent: usize) -> Self
    where
        Self: Sized;

    /// Return the letter in the cell, if any.
    fn get(&self, position: Position) -> Option<Letter>;

    /// Store a letter in an empty cell.
    ///
    /// # Panics
    ///
    /// May panic if `position` is outside of the extent the grid was created
    /// with.
    fn set(&mut self, position: Position, letter: Letter);

    /// Empty the cell.
    fn clear(&mut self, position: Position);

    /// Return the number of occupied cells.
    fn len(&self) -> usize;

    /// Return true if no cell is occupied.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write a letter into the cell if the cell is empty or already holds the
    /// same letter.
    fn write(&mut self, position: Position, letter: Letter) -> Result<Write, Conflict> {
        match self.get(position) {
            None => {
                self.set(position, letter);
                Ok(Write::Placed)
            }
            Some(existing) if existing == letter => Ok(Write::Shared),
            Some(existing) => Err(Conflict {
                position,
                existing,
                attempted: letter,
            }),
        }
    }
}
