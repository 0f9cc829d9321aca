//! Depth first search over the placements of one order of words.

use crate::{
    arrangement::Arrangement, board::Board, grid::Grid, sparse_grid::SparseGrid,
    validate::Validator, word::Word,
};
use std::{
    collections::VecDeque,
    ops::AddAssign,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

/// Solver that iteratively returns the valid arrangements for one fixed order
/// of the words.
///
/// The first word of the order is the seed. Every later word is tried at
/// every letter of the word against every place on the board where that
/// letter is exposed, depth first, in that order. Arrangements are returned
/// trimmed but not deduplicated.
#[derive(Debug)]
pub struct Solver<'w, G = SparseGrid> {
    order: Vec<&'w Word>,
    validator: &'w Validator,
    cancel_flag: Option<Arc<AtomicBool>>,

    // Values used to track the state of searching
    board: Board<G>,
    stack: Vec<Frame>,
    seed_pending: bool,
    cancelled: bool,
    statistics: SearchStatistics,
}

/// Counters describing the work done by a search.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of placements tried.
    pub placements: usize,
    /// The number of placements that ran into a different letter.
    pub conflicts: usize,
    /// The number of times a word had nowhere to cross the board.
    pub dead_ends: usize,
    /// The number of boards that held every word.
    pub completed: usize,
    /// The number of completed boards the validator rejected.
    pub rejected: usize,
}

impl AddAssign for SearchStatistics {
    fn add_assign(&mut self, other: Self) {
        self.placements += other.placements;
        self.conflicts += other.conflicts;
        self.dead_ends += other.dead_ends;
        self.completed += other.completed;
        self.rejected += other.rejected;
    }
}

#[derive(Debug)]
enum FrameState {
    // Before placing the front candidate
    Place,
    // After placing, before undoing
    Undo,
}

#[derive(Debug)]
struct Frame {
    // Index into the order of the word this frame places.
    depth: usize,
    candidates: VecDeque<Candidate>,
    state: FrameState,
}

#[derive(Debug, Copy, Clone)]
struct Candidate {
    cross_index: usize,
    slot: usize,
}

impl<'w, G> Solver<'w, G>
where
    G: Grid,
{
    /// Create a new `Solver` for the given order of words.
    ///
    /// # Panics
    ///
    /// Panics if `order` is empty.
    pub fn new(order: Vec<&'w Word>, validator: &'w Validator) -> Self {
        let seed = *order.first().expect("order should hold at least one word");
        let extent = order.iter().map(|word| word.len()).sum();
        let board = Board::seed(seed, extent);

        let mut solver = Self {
            order,
            validator,
            cancel_flag: None,

            board,
            stack: Vec::new(),
            seed_pending: false,
            cancelled: false,
            statistics: SearchStatistics::default(),
        };

        // With a single word the seed is already complete, don't bother to
        // put a stack frame in
        if solver.order.len() == 1 {
            solver.seed_pending = true;
        } else if let Some(frame) = Self::frame_for(&solver.board, solver.order[1], 1) {
            solver.stack.push(frame);
        } else {
            solver.statistics.dead_ends += 1;
        }

        solver
    }

    /// Stop searching once `flag` is set.
    ///
    /// The flag is checked before every placement.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Return the counters for the search so far.
    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// Return true if the search stopped because the cancel flag was set.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Collect a frame with every candidate placement of `word` on the board.
    ///
    /// Returns `None` if the word shares no letter with any exposed site.
    fn frame_for(board: &Board<G>, word: &Word, depth: usize) -> Option<Frame> {
        let candidates: VecDeque<_> = word
            .letters()
            .iter()
            .enumerate()
            .flat_map(|(cross_index, &letter)| {
                (0..board.letter_index().sites(letter).len())
                    .map(move |slot| Candidate { cross_index, slot })
            })
            .collect();

        if candidates.is_empty() {
            None
        } else {
            Some(Frame {
                depth,
                candidates,
                state: FrameState::Place,
            })
        }
    }

    /// Validate a board that holds every word.
    fn complete(
        board: &Board<G>,
        validator: &Validator,
        statistics: &mut SearchStatistics,
    ) -> Option<Arrangement> {
        statistics.completed += 1;

        match validator.check(board) {
            Ok(()) => Some(board.arrangement()),
            Err(reason) => {
                log::trace!("Rejected completed board: {}.", reason);
                statistics.rejected += 1;
                None
            }
        }
    }

    fn check_cancelled(&mut self) -> bool {
        if !self.cancelled
            && self
                .cancel_flag
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            log::debug!("Search cancelled with {} frames open.", self.stack.len());
            self.cancelled = true;
            self.stack.clear();
        }

        self.cancelled
    }

    /// Return all remaining arrangements.
    pub fn all_arrangements(&mut self) -> Vec<Arrangement> {
        self.collect()
    }

    /// Compute up to the next valid arrangement, returning `None` if there are
    /// no more.
    pub fn next_arrangement(&mut self) -> Option<Arrangement> {
        enum StackOp<T> {
            Push(T),
            Pop,
            None,
        }

        if self.check_cancelled() {
            return None;
        }

        if self.seed_pending {
            self.seed_pending = false;
            return Self::complete(&self.board, self.validator, &mut self.statistics);
        }

        while !self.stack.is_empty() {
            if self.check_cancelled() {
                return None;
            }

            let curr_frame = self.stack.last_mut()?;

            let (stack_op, possible_arrangement) = match curr_frame.state {
                // Place the word of this frame at the front candidate, and if
                // that works either go one word deeper or check the board.
                FrameState::Place => {
                    let Candidate { cross_index, slot } = *curr_frame
                        .candidates
                        .front()
                        .expect("frames should never be left without candidates");
                    let word = self.order[curr_frame.depth];

                    self.statistics.placements += 1;
                    match self.board.try_place(word, cross_index, slot) {
                        Err(conflict) => {
                            log::trace!("Could not place [{}]: {:?}.", word, conflict);
                            self.statistics.conflicts += 1;
                            curr_frame.candidates.pop_front();

                            if curr_frame.candidates.is_empty() {
                                (StackOp::Pop, None)
                            } else {
                                (StackOp::None, None)
                            }
                        }
                        Ok(()) => {
                            curr_frame.state = FrameState::Undo;

                            // This is where the recursion happens, but we also
                            // have to check for a finished board here.
                            let next_depth = curr_frame.depth + 1;
                            if next_depth == self.order.len() {
                                let arrangement = Self::complete(
                                    &self.board,
                                    self.validator,
                                    &mut self.statistics,
                                );
                                (StackOp::None, arrangement)
                            } else {
                                match Self::frame_for(
                                    &self.board,
                                    self.order[next_depth],
                                    next_depth,
                                ) {
                                    Some(frame) => (StackOp::Push(frame), None),
                                    None => {
                                        self.statistics.dead_ends += 1;
                                        (StackOp::None, None)
                                    }
                                }
                            }
                        }
                    }
                }
                // Take the word of this frame back off the board and move on to
                // the next candidate.
                FrameState::Undo => {
                    self.board.undo();
                    curr_frame.candidates.pop_front();

                    if curr_frame.candidates.is_empty() {
                        (StackOp::Pop, None)
                    } else {
                        curr_frame.state = FrameState::Place;
                        (StackOp::None, None)
                    }
                }
            };

            match stack_op {
                StackOp::Push(val) => {
                    self.stack.push(val);
                }
                StackOp::Pop => {
                    self.stack.pop();
                }
                StackOp::None => {}
            }

            if possible_arrangement.is_some() {
                return possible_arrangement;
            }
        }

        None
    }
}

impl<'w, G> Iterator for Solver<'w, G>
where
    G: Grid,
{
    type Item = Arrangement;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_arrangement()
    }
}
