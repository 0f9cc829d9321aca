use thiserror::Error;

/// Errors returned when a word list cannot be searched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The word list did not contain any words.
    #[error("the word list is empty")]
    EmptyWordList,

    /// One of the words could not be used.
    #[error("word {index} [{word}] is malformed: {problem}")]
    MalformedWord {
        /// Position of the word in the input list.
        index: usize,
        /// The word as it was given.
        word: String,
        /// What is wrong with the word.
        problem: WordProblem,
    },

    /// A search mode name was not recognised.
    #[error("unknown search mode [{0}], expected one of exhaustive, first or smallest")]
    UnknownMode(String),
}

/// The reason a single word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordProblem {
    /// The word has no letters.
    #[error("it has no letters")]
    Empty,

    /// The word contains a character, as given, that is not an ASCII letter.
    #[error("it contains [{0}], which is not a letter from A to Z")]
    InvalidCharacter(char),
}

/// The reason a completed grid was rejected by the
/// [`Validator`](crate::validate::Validator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGrid {
    /// A run of two or more letters spells something that is not in the word
    /// list.
    #[error("the grid spells [{0}], which is not in the word list")]
    UnexpectedWord(String),

    /// A word can be read more times than it was given.
    #[error("[{0}] can be read more often than it was given")]
    RepeatedWord(String),

    /// A word cannot be read anywhere in the grid.
    #[error("[{0}] cannot be read anywhere in the grid")]
    MissingWord(String),
}
