//! Index from each letter to the places on the grid where a new word could
//! cross it.

use crate::{
    grid::{Direction, Position},
    word::Letter,
};

/// An existing letter that a new word could cross.
///
/// The new word is laid in `direction`, which is perpendicular to the word
/// that placed the letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Site {
    /// The cell holding the letter.
    pub position: Position,
    /// The direction a crossing word would be laid in.
    pub direction: Direction,
}

/// Exposure sites grouped by letter, in the order they were exposed.
#[derive(Debug, Clone, Default)]
pub struct LetterIndex {
    sites: [Vec<Site>; Letter::COUNT],
}

impl LetterIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sites where `letter` is currently exposed.
    pub fn sites(&self, letter: Letter) -> &[Site] {
        &self.sites[letter.index()]
    }

    /// Return the total number of sites for all letters.
    pub fn len(&self) -> usize {
        self.sites.iter().map(Vec::len).sum()
    }

    /// Return true if no letter is exposed anywhere.
    pub fn is_empty(&self) -> bool {
        self.sites.iter().all(Vec::is_empty)
    }

    /// Add a new site at the end of the list for `letter`.
    pub fn expose(&mut self, letter: Letter, site: Site) {
        self.sites[letter.index()].push(site);
    }

    /// Remove the most recently exposed site for `letter`.
    pub(crate) fn retract(&mut self, letter: Letter) -> Option<Site> {
        self.sites[letter.index()].pop()
    }

    /// Remove the site in `slot` of the list for `letter`, keeping the order of
    /// the remaining sites.
    pub(crate) fn consume(&mut self, letter: Letter, slot: usize) -> Site {
        self.sites[letter.index()].remove(slot)
    }

    /// Put a consumed site back into the `slot` it was removed from.
    pub(crate) fn restore(&mut self, letter: Letter, slot: usize, site: Site) {
        self.sites[letter.index()].insert(slot, site);
    }
}
