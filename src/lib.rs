#![deny(missing_docs)]

//! Arrange a list of words into compact interlocking crossword grids.
//!
//! Every order of the words is searched depth first. The first word of an
//! order is laid across, and every later word has to cross a letter that is
//! already on the board. A completed board is kept only if the runs of two or
//! more letters in its rows and columns spell exactly the word list, and only
//! if neither it nor its transpose was found before.
//!
//! ```
//! use crossword_arranger::{generate, SearchMode};
//!
//! let arrangements = generate(["cat", "art"], SearchMode::Exhaustive).unwrap();
//!
//! assert_eq!(arrangements.len(), 2);
//! assert_eq!(arrangements[0].to_string(), "CAT\n R \n T ");
//! ```

pub mod arrangement;
pub mod board;
pub mod dedup;
pub mod dense_grid;
mod error;
pub mod generator;
pub mod grid;
pub mod letter_index;
pub mod solver;
pub mod sparse_grid;
pub mod validate;
pub mod word;

pub use arrangement::Arrangement;
pub use error::{Error, InvalidGrid, WordProblem};
pub use generator::{Generator, Report, SearchMode, Statistics};
pub use grid::Grid;
pub use solver::{SearchStatistics, Solver};
pub use word::{Letter, Word};

/// Return the unique arrangements of `words`, smallest first.
///
/// Words are uppercased before use and may only contain the letters `A` to
/// `Z`. See [`Generator`] to stream the smallest arrangements or to cancel a
/// long search.
pub fn generate<I, S>(words: I, mode: SearchMode) -> Result<Vec<Arrangement>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(Generator::new(words)?.with_mode(mode).run().arrangements)
}
