//! Paths across the board and the words they spell.

use crate::board::{Board, Position};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// An ordered sequence of board positions.
///
/// Paths produced by the search and the verifier are always simple king-move
/// chains; [`Path::is_valid_on`] checks that for paths from anywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Position>);

impl Path {
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenated faces along the path.
    #[must_use]
    pub fn spell(&self, board: &Board) -> String {
        self.0.iter().map(|&p| board.face_at(p)).collect()
    }

    /// Row-major tile indices, the form a UI uses to highlight tiles.
    #[must_use]
    pub fn indices(&self, board: &Board) -> Vec<usize> {
        self.0.iter().map(|&p| board.index_of(p)).collect()
    }

    /// True iff every position is on `board`, consecutive positions are
    /// king-move neighbours and no position repeats.
    #[must_use]
    pub fn is_valid_on(&self, board: &Board) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().all(|&p| board.contains(p) && seen.insert(p))
            && self.0.windows(2).all(|w| w[0].is_adjacent(&w[1]))
    }
}

impl From<Vec<Position>> for Path {
    fn from(positions: Vec<Position>) -> Self {
        Self(positions)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(Position::to_string).collect();
        write!(f, "{}", parts.join("->"))
    }
}

/// A lexicon word found on the board, with one witness path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredWord {
    pub word: String,
    pub path: Path,
}

impl fmt::Display for DiscoveredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.path)
    }
}
