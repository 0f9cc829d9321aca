//! Completed grids, trimmed to their occupied rectangle.
//!
//! An `Arrangement` is always indexed from `(0, 0)` at its top left corner,
//! which makes it the canonical key used to recognise duplicate results.

use crate::{
    grid::{Bounds, Position},
    word::Letter,
};
use std::fmt;

/// A rectangle of cells, each either empty or holding a letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Arrangement {
    height: usize,
    width: usize,
    cells: Vec<Option<Letter>>,
}

impl Arrangement {
    /// Copy the cells inside of `bounds` into a new arrangement.
    pub(crate) fn capture(bounds: Bounds, get: impl Fn(Position) -> Option<Letter>) -> Self {
        let cells = (bounds.min_row..=bounds.max_row)
            .flat_map(|row| {
                (bounds.min_column..=bounds.max_column)
                    .map(move |column| Position::new(row, column))
            })
            .map(get)
            .collect();

        Arrangement {
            height: bounds.height(),
            width: bounds.width(),
            cells,
        }
    }

    /// Build an arrangement from rows of text, where a space is an empty cell.
    ///
    /// Short rows are padded with empty cells on the right. Lowercase letters
    /// are uppercased. Returns `None` if any other character is present.
    pub fn from_rows<I, S>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(|c| match c {
                        ' ' => Some(None),
                        c => Letter::from_char(c.to_ascii_uppercase()).map(Some),
                    })
                    .collect::<Option<Vec<_>>>()
            })
            .collect::<Option<Vec<_>>>()?;

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(height * width);
        for mut row in rows {
            row.resize(width, None);
            cells.extend(row);
        }

        Some(Arrangement {
            height,
            width,
            cells,
        })
    }

    /// Return the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Return the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Return the larger of the height and width.
    pub fn max_dim(&self) -> usize {
        self.height.max(self.width)
    }

    /// Return the smaller of the height and width.
    pub fn min_dim(&self) -> usize {
        self.height.min(self.width)
    }

    /// Return the key that results are ordered by, smallest first.
    pub fn size_key(&self) -> (usize, usize) {
        (self.max_dim(), self.min_dim())
    }

    /// Return the letter at the given row and column, if any.
    pub fn get(&self, row: usize, column: usize) -> Option<Letter> {
        if row < self.height && column < self.width {
            self.cells[row * self.width + column]
        } else {
            None
        }
    }

    /// Return the number of occupied cells.
    pub fn letter_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Return an iterator over the rows as text, with a space for each empty
    /// cell.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(move |row| {
            (0..self.width)
                .map(|column| self.get(row, column).map_or(' ', Letter::to_char))
                .collect()
        })
    }

    /// Return the cells as a two dimensional array of characters, with a space
    /// for each empty cell.
    pub fn to_char_rows(&self) -> Vec<Vec<char>> {
        self.rows().map(|row| row.chars().collect()).collect()
    }

    /// Remove empty rows and columns from the edges.
    pub fn trim(&self) -> Arrangement {
        let occupied = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |column| (row, column)))
            .filter(|&(row, column)| self.get(row, column).is_some())
            .map(|(row, column)| Position::new(row as i32, column as i32));

        let bounds = occupied.fold(None, |bounds: Option<Bounds>, position| {
            let mut bounds = bounds.unwrap_or_else(|| Bounds::at(position));
            bounds.include(position);
            Some(bounds)
        });

        match bounds {
            Some(bounds) => Self::capture(bounds, |position| {
                self.get(position.row as usize, position.column as usize)
            }),
            None => Arrangement::default(),
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Arrangement {
        let cells = (0..self.width)
            .flat_map(|column| (0..self.height).map(move |row| (row, column)))
            .map(|(row, column)| self.get(row, column))
            .collect();

        Arrangement {
            height: self.width,
            width: self.height,
            cells,
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index != 0 {
                writeln!(f)?;
            }
            f.write_str(&row)?;
        }
        Ok(())
    }
}
