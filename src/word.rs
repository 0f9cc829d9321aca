//! Letters and words that can be placed in a grid.
//!
//! Only the 26 letters `A` through `Z` are supported. ASCII input is
//! uppercased before it is checked, so `"cat"` and `"CAT"` name the same word.

use crate::error::{Error, WordProblem};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::{fmt, str::FromStr};

/// Words up to this length are stored without a heap allocation.
pub const INLINE_WORD_LENGTH: usize = 16;

/// One of the uppercase letters `A` through `Z`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// The number of distinct letters.
    pub const COUNT: usize = 26;

    /// Return the `Letter` for an uppercase ASCII character, or `None` for any
    /// other character.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8 - b'A'))
        } else {
            None
        }
    }

    /// Return the position of this letter in the alphabet.
    ///
    /// The value ranges from 0 to 25.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Return this letter as an uppercase character.
    pub fn to_char(self) -> char {
        char::from(b'A' + self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A non-empty, uppercase word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: SmallVec<[Letter; INLINE_WORD_LENGTH]>,
}

impl Word {
    /// Create a word, uppercasing ASCII letters first.
    ///
    /// Any character that is not an ASCII letter is reported as typed.
    pub fn new(raw: &str) -> Result<Self, WordProblem> {
        if raw.is_empty() {
            return Err(WordProblem::Empty);
        }

        let letters: SmallVec<[Letter; INLINE_WORD_LENGTH]> = raw
            .chars()
            .map(|c| {
                Letter::from_char(c.to_ascii_uppercase()).ok_or(WordProblem::InvalidCharacter(c))
            })
            .collect::<Result<_, _>>()?;
        let text = letters.iter().map(|letter| letter.to_char()).collect();

        Ok(Word { text, letters })
    }

    /// Return the letters of this word in reading order.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Return the uppercased text of this word.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Return the number of letters in this word.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false, words have at least one letter.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromStr for Word {
    type Err = WordProblem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parse a list of words, keeping their order.
///
/// Duplicate words are a caller error. They are not rejected, but every
/// arrangement must then contain the word as many times as it was given, and
/// the searches for the duplicated orders are repeated.
pub fn parse_words<I, S>(words: I) -> Result<Vec<Word>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words = words
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.as_ref();
            Word::new(raw).map_err(|problem| Error::MalformedWord {
                index,
                word: raw.to_owned(),
                problem,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(Error::EmptyWordList);
    }

    let mut seen = FxHashSet::default();
    for word in &words {
        if !seen.insert(word.as_str()) {
            log::warn!("Word [{}] was given more than once.", word);
        }
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip_through_chars() {
        let all: String = ('A'..='Z')
            .map(|c| Letter::from_char(c).unwrap().to_char())
            .collect();
        assert_eq!(all, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");

        assert_eq!(Letter::from_char('A').unwrap().index(), 0);
        assert_eq!(Letter::from_char('Z').unwrap().index(), 25);
        assert_eq!(Letter::from_char('a'), None);
        assert_eq!(Letter::from_char('1'), None);
    }

    #[test]
    fn words_are_uppercased() {
        let word: Word = "Cat".parse().unwrap();

        assert_eq!(word.as_str(), "CAT");
        assert_eq!(word.len(), 3);
        assert_eq!(word.to_string(), "CAT");
        assert_eq!(
            word.letters(),
            &[
                Letter::from_char('C').unwrap(),
                Letter::from_char('A').unwrap(),
                Letter::from_char('T').unwrap()
            ]
        );
    }

    #[test]
    fn malformed_words_are_rejected() {
        assert_eq!(Word::new(""), Err(WordProblem::Empty));
        assert_eq!(Word::new("ca t"), Err(WordProblem::InvalidCharacter(' ')));
        assert_eq!(Word::new("b4"), Err(WordProblem::InvalidCharacter('4')));
    }

    #[test]
    fn only_ascii_letters_are_uppercased() {
        assert_eq!(Word::new("straße"), Err(WordProblem::InvalidCharacter('ß')));
        assert_eq!(Word::new("ı"), Err(WordProblem::InvalidCharacter('ı')));
        assert_eq!(Word::new("café"), Err(WordProblem::InvalidCharacter('é')));
        assert_eq!(Word::new("MiXeD").unwrap().as_str(), "MIXED");
    }

    #[test]
    fn parse_word_lists() {
        let words = parse_words(["dog", "cat"]).unwrap();
        assert_eq!(
            words.iter().map(Word::as_str).collect::<Vec<_>>(),
            vec!["DOG", "CAT"]
        );

        assert_eq!(
            parse_words(Vec::<String>::new()),
            Err(Error::EmptyWordList)
        );

        assert_eq!(
            parse_words(["dog", "", "cat"]),
            Err(Error::MalformedWord {
                index: 1,
                word: String::new(),
                problem: WordProblem::Empty,
            })
        );
    }

    #[test]
    fn duplicates_are_tolerated() {
        let words = parse_words(["cat", "CAT"]).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], words[1]);
    }
}
