//! Recognise arrangements that were already found, and collect the rest.
//!
//! Two arrangements are the same if their trimmed cells are equal, or if one
//! is the other with rows and columns swapped.

use crate::arrangement::Arrangement;
use rustc_hash::FxHashSet;

/// Set of arrangements accepted so far.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    seen: FxHashSet<Arrangement>,
}

impl Deduplicator {
    /// Create an empty `Deduplicator`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return true if `arrangement`, or its transpose, was accepted before.
    pub fn contains(&self, arrangement: &Arrangement) -> bool {
        self.seen.contains(arrangement) || self.seen.contains(&arrangement.transpose())
    }

    /// Accept `arrangement` unless it, or its transpose, was accepted before.
    ///
    /// Returns true if the arrangement is new.
    pub fn insert(&mut self, arrangement: &Arrangement) -> bool {
        if self.contains(arrangement) {
            false
        } else {
            self.seen.insert(arrangement.clone())
        }
    }

    /// Return the number of accepted arrangements.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Return true if nothing was accepted yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// What happened to an arrangement offered to an [`Accumulator`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Offer {
    /// The arrangement, or its transpose, was already collected.
    Duplicate,
    /// The arrangement was collected.
    Accepted,
    /// The arrangement was collected and is strictly smaller than everything
    /// collected before it.
    NewSmallest,
}

/// The unique arrangements found by a run, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    seen: Deduplicator,
    arrangements: Vec<Arrangement>,
    smallest: Option<usize>,
    duplicates: usize,
}

impl Accumulator {
    /// Create an empty `Accumulator`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect `arrangement` if it is new.
    pub fn offer(&mut self, arrangement: Arrangement) -> Offer {
        if !self.seen.insert(&arrangement) {
            self.duplicates += 1;
            return Offer::Duplicate;
        }

        let is_smallest = self
            .smallest()
            .map_or(true, |smallest| arrangement.size_key() < smallest.size_key());

        self.arrangements.push(arrangement);
        if is_smallest {
            self.smallest = Some(self.arrangements.len() - 1);
            Offer::NewSmallest
        } else {
            Offer::Accepted
        }
    }

    /// Return the smallest arrangement collected, the earliest one on ties.
    pub fn smallest(&self) -> Option<&Arrangement> {
        self.smallest.map(|index| &self.arrangements[index])
    }

    /// Return the collected arrangements in discovery order.
    pub fn arrangements(&self) -> &[Arrangement] {
        &self.arrangements
    }

    /// Return the number of arrangements that were turned away as duplicates.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Return the number of collected arrangements.
    pub fn len(&self) -> usize {
        self.arrangements.len()
    }

    /// Return true if nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.arrangements.is_empty()
    }

    /// Return the collected arrangements, smallest first and in discovery
    /// order among equal sizes.
    pub fn into_sorted(self) -> Vec<Arrangement> {
        let mut arrangements = self.arrangements;
        arrangements.sort_by_key(Arrangement::size_key);
        arrangements
    }
}
