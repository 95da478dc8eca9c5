//! Validated settings for one game: board shape and minimum word length.

use crate::errors::ConfigError;

/// Rows on the classic board
pub const DEFAULT_ROWS: usize = 4;
/// Columns on the classic board
pub const DEFAULT_COLS: usize = 4;
/// Shortest word that scores in the classic game
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Board shape and minimum word length, checked once up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    min_length: usize,
    cell_count: usize,
}

impl GameConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] if either dimension is zero and
    /// [`ConfigError::InvalidMinLength`] if `min_length` is zero. A shape whose
    /// tile count overflows `usize` is [`ConfigError::BoardTooLarge`].
    pub fn new(rows: usize, cols: usize, min_length: usize) -> Result<Self, ConfigError> {
        let cell_count = validate_dimensions(rows, cols)?;
        validate_min_length(min_length)?;
        Ok(Self { rows, cols, min_length, cell_count })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Number of tiles, which is also the longest possible path.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            min_length: DEFAULT_MIN_LENGTH,
            cell_count: DEFAULT_ROWS * DEFAULT_COLS,
        }
    }
}

/// Checked tile count of a `rows` x `cols` board.
pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<usize, ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::InvalidDimensions { rows, cols });
    }
    rows.checked_mul(cols).ok_or(ConfigError::BoardTooLarge { rows, cols })
}

pub(crate) fn validate_min_length(min_length: usize) -> Result<(), ConfigError> {
    if min_length == 0 {
        Err(ConfigError::InvalidMinLength { min_length })
    } else {
        Ok(())
    }
}
