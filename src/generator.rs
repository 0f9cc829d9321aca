//! Search every order of a word list and gather the unique arrangements.
//!
//! Each permutation of the words seeds an independent [`Solver`], with the
//! first word of the permutation as the seed. The [`SearchMode`] decides when
//! to stop.

use crate::{
    arrangement::Arrangement,
    dedup::{Accumulator, Offer},
    error::Error,
    grid::Grid,
    solver::{SearchStatistics, Solver},
    sparse_grid::SparseGrid,
    validate::Validator,
    word::{parse_words, Word},
};
use instant::{Duration, Instant};
use itertools::Itertools;
use std::{
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

/// When to stop searching.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// Search every order of the words and return every unique arrangement.
    #[default]
    Exhaustive,
    /// Stop after the first order of the words that has any valid
    /// arrangement, and return every arrangement of that order.
    FirstFound,
    /// Search every order, reporting each arrangement that is smaller than
    /// all of those found before it as soon as it is found.
    SmallestStreaming,
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exhaustive" | "all" => Ok(SearchMode::Exhaustive),
            "first" | "first-found" | "fast" => Ok(SearchMode::FirstFound),
            "smallest" | "smallest-streaming" | "ideal" => Ok(SearchMode::SmallestStreaming),
            _ => Err(Error::UnknownMode(s.to_owned())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchMode::Exhaustive => "exhaustive",
            SearchMode::FirstFound => "first-found",
            SearchMode::SmallestStreaming => "smallest-streaming",
        })
    }
}

/// Counters describing a whole run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// The number of word orders searched.
    pub orders: usize,
    /// The work done by the searches, summed over all orders.
    pub search: SearchStatistics,
    /// The number of valid arrangements discarded as duplicates.
    pub duplicates: usize,
    /// The time the run took.
    pub duration: Duration,
    /// True if the run stopped early because the cancel flag was set.
    pub cancelled: bool,
}

/// The result of a run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Unique arrangements, smallest first and in discovery order among equal
    /// sizes.
    pub arrangements: Vec<Arrangement>,
    /// Counters describing the run.
    pub statistics: Statistics,
}

impl Report {
    /// Return the smallest arrangement, if any was found.
    pub fn smallest(&self) -> Option<&Arrangement> {
        self.arrangements.first()
    }

    /// Return true if no arrangement was found.
    pub fn is_empty(&self) -> bool {
        self.arrangements.is_empty()
    }
}

/// A configured search over a word list.
#[derive(Debug, Clone)]
pub struct Generator {
    words: Vec<Word>,
    validator: Validator,
    mode: SearchMode,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl Generator {
    /// Create a generator for the given words, in exhaustive mode.
    pub fn new<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = parse_words(words)?;
        let validator = Validator::new(&words);

        Ok(Generator {
            words,
            validator,
            mode: SearchMode::default(),
            cancel_flag: None,
        })
    }

    /// Use the given search mode.
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Stop searching once `flag` is set.
    ///
    /// The flag is checked between orders and before every placement. A
    /// cancelled run reports the arrangements found up to that point.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Return the parsed words.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Return the search mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Return the validator for the word list.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Return every order of the words, as permutations of their positions.
    pub fn orders(&self) -> impl Iterator<Item = Vec<&Word>> + '_ {
        self.words.iter().permutations(self.words.len())
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn solver<'w, G: Grid>(&'w self, order: Vec<&'w Word>) -> Solver<'w, G> {
        let solver = Solver::new(order, &self.validator);

        match &self.cancel_flag {
            Some(flag) => solver.with_cancel_flag(Arc::clone(flag)),
            None => solver,
        }
    }

    /// Run the search.
    pub fn run(&self) -> Report {
        self.run_with(|_| {})
    }

    /// Run the search, calling `on_smallest` with every arrangement that is
    /// smaller than all of those found before it.
    ///
    /// `on_smallest` is only called in [`SearchMode::SmallestStreaming`].
    pub fn run_with<F>(&self, on_smallest: F) -> Report
    where
        F: FnMut(&Arrangement),
    {
        self.run_in::<SparseGrid, F>(on_smallest)
    }

    /// Run the search on the given grid representation.
    pub fn run_in<G, F>(&self, mut on_smallest: F) -> Report
    where
        G: Grid,
        F: FnMut(&Arrangement),
    {
        let started = Instant::now();
        let mut accumulator = Accumulator::new();
        let mut statistics = Statistics::default();

        log::debug!(
            "Searching orders of {} words in {} mode.",
            self.words.len(),
            self.mode
        );

        for order in self.orders() {
            if self.is_cancelled() {
                statistics.cancelled = true;
                break;
            }

            log::trace!("Searching order [{}].", order.iter().join(", "));
            statistics.orders += 1;

            let mut solver = self.solver::<G>(order);
            while let Some(arrangement) = solver.next_arrangement() {
                match accumulator.offer(arrangement) {
                    Offer::Duplicate => continue,
                    Offer::NewSmallest if self.mode == SearchMode::SmallestStreaming => {
                        if let Some(smallest) = accumulator.smallest() {
                            log::info!(
                                "Smallest arrangement so far is {}x{}.",
                                smallest.height(),
                                smallest.width()
                            );
                            on_smallest(smallest);
                        }
                    }
                    Offer::NewSmallest | Offer::Accepted => {}
                }

                log::debug!("Found arrangement {}.", accumulator.len());
            }

            statistics.search += solver.statistics();
            if solver.is_cancelled() {
                statistics.cancelled = true;
                break;
            }
            if self.mode == SearchMode::FirstFound && !accumulator.is_empty() {
                break;
            }
        }

        statistics.duplicates = accumulator.duplicates();
        statistics.duration = started.elapsed();
        log::debug!(
            "Found {} arrangements in {:?}: {:?}.",
            accumulator.len(),
            statistics.duration,
            statistics
        );

        Report {
            arrangements: accumulator.into_sorted(),
            statistics,
        }
    }

    /// Run the search with each order on the rayon thread pool.
    ///
    /// The results of the orders are merged in order, so the arrangements are
    /// the same as those from [`Generator::run`]. Smallest arrangements are
    /// not streamed.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> Report {
        use rayon::iter::{IntoParallelIterator, ParallelIterator};
        use std::sync::{Mutex, PoisonError};

        let started = Instant::now();
        let orders: Vec<_> = self.orders().collect();
        let totals = Mutex::new(Statistics::default());

        log::debug!(
            "Searching {} orders of {} words in {} mode on the thread pool.",
            orders.len(),
            self.words.len(),
            self.mode
        );

        let search = |order: Vec<&Word>| -> Vec<Arrangement> {
            if self.is_cancelled() {
                totals
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .cancelled = true;
                return Vec::new();
            }

            let mut solver = self.solver::<SparseGrid>(order);
            let arrangements: Vec<_> = solver.by_ref().collect();

            let mut totals = totals.lock().unwrap_or_else(PoisonError::into_inner);
            totals.orders += 1;
            totals.search += solver.statistics();
            totals.cancelled |= solver.is_cancelled();

            arrangements
        };

        let batches: Vec<Vec<Arrangement>> = match self.mode {
            SearchMode::FirstFound => orders
                .into_par_iter()
                .map(search)
                .find_first(|batch| !batch.is_empty())
                .into_iter()
                .collect(),
            SearchMode::Exhaustive | SearchMode::SmallestStreaming => {
                orders.into_par_iter().map(search).collect()
            }
        };

        let mut accumulator = Accumulator::new();
        for arrangement in batches.into_iter().flatten() {
            accumulator.offer(arrangement);
        }

        let mut statistics = totals.into_inner().unwrap_or_else(PoisonError::into_inner);
        statistics.duplicates = accumulator.duplicates();
        statistics.duration = started.elapsed();
        log::debug!(
            "Found {} arrangements in {:?}: {:?}.",
            accumulator.len(),
            statistics.duration,
            statistics
        );

        Report {
            arrangements: accumulator.into_sorted(),
            statistics,
        }
    }
}
