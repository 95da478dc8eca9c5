//! Exhaustive word discovery: every lexicon word that some simple king-move path spells.
//!
//! The walk is a depth-first backtracking search started from every cell in
//! row-major order, trying neighbours in [`crate::board::NEIGHBOR_OFFSETS`] order.
//! Each branch carries the faces spelled so far; as soon as no lexicon word starts
//! with them the branch is abandoned. Because the lexicon is sorted, each step only
//! narrows the index range of the previous step instead of searching the whole list.
//!
//! Visited markers live in a buffer owned by the call, so concurrent calls on the
//! same `&Board` / `&Lexicon` never interfere.
//!
//! # Examples
//!
//! ```
//! use gridwords::board::Board;
//! use gridwords::lexicon::Lexicon;
//! use gridwords::search;
//!
//! let board = Board::new(&["c", "a", "t", "s"], 2, 2)?;
//! let lexicon = Lexicon::build(["cat", "cats", "act"], 3)?;
//! let found = search::enumerate(&board, &lexicon, 3);
//!
//! let words: Vec<&str> = found.iter().map(|d| d.word.as_str()).collect();
//! assert_eq!(words, vec!["cat", "cats", "act"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::board::{Board, Position};
use crate::budget::{budget_stop, Budget, SearchLimits, SearchStatus};
use crate::lexicon::Lexicon;
use crate::path::{DiscoveredWord, Path};
use log::{debug, warn};
use std::collections::HashSet;
use std::ops::{ControlFlow, Range};

/// Outcome of a (possibly limited) enumeration.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Words found, in discovery order, one witness path each.
    /// A partial list if `status` is not `Complete`.
    pub words: Vec<DiscoveredWord>,
    /// Whether the search covered the whole board or stopped early.
    pub status: SearchStatus,
    /// Number of cells entered during the walk.
    pub nodes_visited: u64,
}

/// All words of `lexicon` with at least `min_length` characters that a simple
/// path on `board` spells, each with the first path found for it.
///
/// An empty result is a normal outcome. A `min_length` of 0 behaves like 1.
#[must_use]
pub fn enumerate(board: &Board, lexicon: &Lexicon, min_length: usize) -> Vec<DiscoveredWord> {
    enumerate_with_limits(board, lexicon, min_length, &SearchLimits::unbounded()).words
}

/// Like [`enumerate`], but stops once `limits` are spent and returns the words
/// found up to that point.
#[must_use]
pub fn enumerate_with_limits(
    board: &Board,
    lexicon: &Lexicon,
    min_length: usize,
    limits: &SearchLimits,
) -> SearchResult {
    let mut search = PathSearch::new(board, lexicon, min_length.max(1), limits);

    debug!(
        "enumerating {}x{} board against {} words (min length {})",
        board.rows(),
        board.cols(),
        lexicon.len(),
        search.min_length
    );

    let everything = 0..lexicon.len();
    for start in board.positions() {
        if search.visit(start, everything.clone()).is_break() {
            break;
        }
    }

    let status = search.budget.status();
    let nodes_visited = search.budget.steps();
    if status.is_complete() {
        debug!(
            "enumeration finished: {} words, {} nodes, {:.3}s",
            search.found.len(),
            nodes_visited,
            search.budget.elapsed().as_secs_f64()
        );
    } else {
        warn!(
            "enumeration stopped early ({status:?}): {} words after {} nodes",
            search.found.len(),
            nodes_visited
        );
    }

    SearchResult { words: search.found, status, nodes_visited }
}

/// State for one enumeration call.
struct PathSearch<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    min_length: usize,
    /// Indexed by row-major cell index; set on entering a cell, cleared on leaving.
    visited: Vec<bool>,
    path: Vec<Position>,
    candidate: String,
    seen: HashSet<String>,
    found: Vec<DiscoveredWord>,
    budget: Budget,
}

impl<'a> PathSearch<'a> {
    fn new(board: &'a Board, lexicon: &'a Lexicon, min_length: usize, limits: &SearchLimits) -> Self {
        Self {
            board,
            lexicon,
            min_length,
            visited: vec![false; board.cell_count()],
            path: Vec::with_capacity(board.cell_count()),
            candidate: String::new(),
            seen: HashSet::new(),
            found: Vec::new(),
            budget: Budget::new(limits),
        }
    }

    /// Enter `pos`, whose predecessors spelled a prefix whose lexicon run is `within`.
    fn visit(&mut self, pos: Position, within: Range<usize>) -> ControlFlow<()> {
        budget_stop!(self.budget);

        let board = self.board;
        let idx = board.index_of(pos);
        debug_assert!(!self.visited[idx], "entered visited cell {pos}");

        let mark = self.candidate.len();
        self.candidate.push_str(board.face_at(pos));

        let run = self.lexicon.narrow(within, &self.candidate);
        let mut flow = ControlFlow::Continue(());

        // prune: nothing in the lexicon starts with the candidate
        if !run.is_empty() {
            self.visited[idx] = true;
            self.path.push(pos);

            self.record_if_word(&run);

            if self.path.len() < board.cell_count() {
                for next in board.neighbors_of(pos) {
                    if self.visited[board.index_of(next)] {
                        continue;
                    }
                    flow = self.visit(next, run.clone());
                    if flow.is_break() {
                        break;
                    }
                }
            }

            self.path.pop();
            self.visited[idx] = false;
        }

        self.candidate.truncate(mark);
        flow
    }

    /// First discovery wins; later paths to the same word are ignored.
    fn record_if_word(&mut self, run: &Range<usize>) {
        if self.candidate.chars().count() < self.min_length
            || !self.lexicon.range_holds_word(run, &self.candidate)
            || self.seen.contains(&self.candidate)
        {
            return;
        }

        self.seen.insert(self.candidate.clone());
        self.found.push(DiscoveredWord {
            word: self.candidate.clone(),
            path: Path::from(self.path.clone()),
        });
    }
}
