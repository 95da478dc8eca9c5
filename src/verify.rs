//! On-demand check of a single word against the board.
//!
//! Same backtracking shape as [`crate::search`], but guided by the target word
//! instead of the lexicon: from each cell only neighbours whose face matches the
//! next unmatched characters are tried. The word does not have to be in any
//! lexicon, and no minimum length applies here; both are the caller's business.

use crate::board::{Board, Position};
use crate::budget::{budget_stop, Budget, SearchLimits, SearchStatus};
use crate::path::Path;
use log::debug;
use std::ops::ControlFlow;

/// Outcome of a (possibly limited) verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyResult {
    /// The first path found, if any.
    pub path: Option<Path>,
    /// `Complete` unless the limits ran out before an answer was known.
    pub status: SearchStatus,
}

/// A simple king-move path on `board` spelling `word`, or `None` if there is none.
///
/// Matching is case-insensitive. Start cells are tried row-major and neighbours in
/// [`crate::board::NEIGHBOR_OFFSETS`] order; the first complete path wins. An empty
/// word is never found.
///
/// ```
/// use gridwords::board::{Board, Position};
/// use gridwords::verify::verify;
///
/// let board = Board::new(&["c", "a", "t", "s"], 2, 2)?;
/// let path = verify(&board, "TACS").expect("on board");
/// assert_eq!(path.positions()[0], Position::new(1, 0));
/// assert!(verify(&board, "cacs").is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn verify(board: &Board, word: &str) -> Option<Path> {
    verify_with_limits(board, word, &SearchLimits::unbounded()).path
}

/// Like [`verify`], but gives up once `limits` are spent.
///
/// When the limits run out `path` is `None` and `status` says why; that is "unknown",
/// not "not on board".
#[must_use]
pub fn verify_with_limits(board: &Board, word: &str, limits: &SearchLimits) -> VerifyResult {
    let target = word.trim().to_lowercase();
    if target.is_empty() {
        return VerifyResult { path: None, status: SearchStatus::Complete };
    }

    let mut verifier = PathVerifier::new(board, &target, limits);
    let mut outcome = None;
    for start in board.positions() {
        if !target.starts_with(board.face_at(start)) {
            continue;
        }
        if let ControlFlow::Break(halt) = verifier.visit(start, 0) {
            outcome = Some(halt);
            break;
        }
    }

    let path = match outcome {
        Some(Halt::Found) => Some(Path::from(verifier.path)),
        Some(Halt::BudgetSpent) | None => None,
    };
    let status = verifier.budget.status();

    debug!(
        "verify '{target}': {} after {} steps",
        if path.is_some() { "found" } else { "not found" },
        verifier.budget.steps()
    );

    VerifyResult { path, status }
}

/// Why the walk stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    Found,
    BudgetSpent,
}

/// State for one verification call.
struct PathVerifier<'a> {
    board: &'a Board,
    target: &'a str,
    /// Indexed by row-major cell index; set on entering a cell, cleared on leaving.
    visited: Vec<bool>,
    path: Vec<Position>,
    budget: Budget,
}

impl<'a> PathVerifier<'a> {
    fn new(board: &'a Board, target: &'a str, limits: &SearchLimits) -> Self {
        Self {
            board,
            target,
            visited: vec![false; board.cell_count()],
            path: Vec::with_capacity(board.cell_count()),
            budget: Budget::new(limits),
        }
    }

    /// Enter `pos`, whose face is known to match `target[matched..]`.
    ///
    /// On `Break(Found)` the cell stays on `self.path`, which then holds the full path.
    fn visit(&mut self, pos: Position, matched: usize) -> ControlFlow<Halt> {
        budget_stop!(self.budget, Halt::BudgetSpent);

        let board = self.board;
        let idx = board.index_of(pos);
        let matched = matched + board.face_at(pos).len();

        self.visited[idx] = true;
        self.path.push(pos);

        let mut flow = ControlFlow::Continue(());
        if matched == self.target.len() {
            flow = ControlFlow::Break(Halt::Found);
        } else {
            let rest = &self.target[matched..];
            for next in board.neighbors_of(pos) {
                if self.visited[board.index_of(next)] || !rest.starts_with(board.face_at(next)) {
                    continue;
                }
                flow = self.visit(next, matched);
                if flow.is_break() {
                    break;
                }
            }
        }

        if flow != ControlFlow::Break(Halt::Found) {
            self.path.pop();
            self.visited[idx] = false;
        }
        flow
    }
}
