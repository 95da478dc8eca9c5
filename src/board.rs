//! The letter grid for one round.
//!
//! A board is built once from a flat, row-major list of faces and never changes
//! afterwards; a new round gets a new board. Faces are stored in canonical
//! lowercase form and may be longer than one character ("qu").

use crate::config::validate_dimensions;
use crate::errors::BoardError;
use serde::Serialize;
use std::fmt;

/// King-move offsets, row delta ascending then column delta ascending.
///
/// Witness paths depend on this order, so it must not change.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A (row, column) location on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// King-move adjacency: both deltas in {-1, 0, 1}, not both zero.
    #[must_use]
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A position together with the face shown there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    pub position: Position,
    pub face: &'a str,
}

/// Immutable rows × cols grid of tile faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    faces: Vec<String>,
}

impl Board {
    /// Build a board from `rows * cols` faces listed row-major.
    ///
    /// Faces are trimmed and lowercased ("Qu" becomes "qu").
    ///
    /// # Errors
    ///
    /// - [`BoardError::Config`] if `rows` or `cols` is zero, or their product overflows
    /// - [`BoardError::SizeMismatch`] if `letter_grid.len() != rows * cols`
    /// - [`BoardError::EmptyFace`] if any face is empty after trimming
    pub fn new<S: AsRef<str>>(letter_grid: &[S], rows: usize, cols: usize) -> Result<Self, BoardError> {
        let expected = validate_dimensions(rows, cols)?;
        if letter_grid.len() != expected {
            return Err(BoardError::SizeMismatch { rows, cols, expected, actual: letter_grid.len() });
        }

        let faces = letter_grid
            .iter()
            .enumerate()
            .map(|(i, face)| {
                let face = face.as_ref().trim();
                if face.is_empty() {
                    Err(BoardError::EmptyFace { row: i / cols, col: i % cols })
                } else {
                    Ok(face.to_lowercase())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows, cols, faces })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of tiles; no simple path is longer than this.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major index of `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is off the board.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> usize {
        assert!(self.contains(pos), "position {pos} is off a {}x{} board", self.rows, self.cols);
        pos.row * self.cols + pos.col
    }

    /// Canonical lowercase face at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is off the board.
    #[must_use]
    pub fn face_at(&self, pos: Position) -> &str {
        &self.faces[self.index_of(pos)]
    }

    #[must_use]
    pub fn cell_at(&self, pos: Position) -> Cell<'_> {
        Cell { position: pos, face: self.face_at(pos) }
    }

    /// All positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> + '_ {
        self.positions().map(|pos| self.cell_at(pos))
    }

    /// The up-to-8 king-move neighbours of `pos`, clipped at the edges (no wraparound),
    /// in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors_of(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            let next = Position::new(row, col);
            self.contains(next).then_some(next)
        })
    }
}

impl fmt::Display for Board {
    /// One line per row, faces in title case ("Qu") padded to a common width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.faces.iter().map(|s| s.chars().count()).max().unwrap_or(1);
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| {
                    let face = title_case(self.face_at(Position::new(row, col)));
                    format!("{face:<width$}")
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

fn title_case(face: &str) -> String {
    let mut chars = face.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
