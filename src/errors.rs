//! Error types for configuration and board construction, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - C001: `InvalidMinLength` (Minimum word length must be positive)
//! - C002: `InvalidDimensions` (Board rows and columns must be positive)
//! - B001: `SizeMismatch` (Letter grid length differs from rows × cols)
//! - B002: `EmptyFace` (A tile face is empty)
//! - B003: `Config` (Invalid configuration while building a board (wraps [`ConfigError`]))
//!
//! Neither family is recoverable where it is raised: the caller has to supply a
//! corrected configuration or grid and construct again. "Word not on board" and
//! "no words found" are ordinary results, never errors.
//!
//! # Examples
//!
//! ```
//! use gridwords::board::Board;
//! use gridwords::errors::BoardError;
//!
//! match Board::new(&["c", "a", "t"], 2, 2) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

/// Invalid game or engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid minimum word length: {min_length}")]
    InvalidMinLength { min_length: usize },

    #[error("invalid board dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("board too large: {rows}x{cols} tiles cannot be counted")]
    BoardTooLarge { rows: usize, cols: usize },
}

impl ConfigError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidMinLength { .. } => "C001",
            ConfigError::InvalidDimensions { .. } => "C002",
            ConfigError::BoardTooLarge { .. } => "C003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ConfigError::InvalidMinLength { .. } => "Minimum word length must be positive",
            ConfigError::InvalidDimensions { .. } => "Board rows and columns must be positive",
            ConfigError::BoardTooLarge { .. } => "Board has more tiles than can be addressed",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ConfigError::InvalidMinLength { .. } => "The lexicon keeps only words at least as long as the configured minimum. A minimum of zero would admit the empty word, which no path can spell.",
            ConfigError::InvalidDimensions { .. } => "A board needs at least one row and one column. Zero in either dimension leaves no tiles to search.",
            ConfigError::BoardTooLarge { .. } => "The tile count rows x cols overflows the platform's index type, so no board of that shape can exist.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidMinLength { .. } => Some("Use a minimum word length of 1 or more (the classic game uses 3 or 4)"),
            ConfigError::InvalidDimensions { .. } => Some("Use at least 1 row and 1 column (the classic board is 4x4)"),
            ConfigError::BoardTooLarge { .. } => Some("Use a board of realistic size (the classic board is 4x4)"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A letter grid that cannot be turned into a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("letter grid has {actual} tiles but a {rows}x{cols} board needs {expected}")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("tile at ({row}, {col}) has an empty face")]
    EmptyFace { row: usize, col: usize },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BoardError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BoardError::SizeMismatch { .. } => "B001",
            BoardError::EmptyFace { .. } => "B002",
            BoardError::Config(_) => "B003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BoardError::SizeMismatch { .. } => "Letter grid length differs from rows x cols",
            BoardError::EmptyFace { .. } => "A tile face is empty",
            BoardError::Config(_) => "Invalid configuration while building a board",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            BoardError::SizeMismatch { .. } => "The letter grid is read row-major, one face per tile, so it must hold exactly rows x cols faces.",
            BoardError::EmptyFace { .. } => "Every tile must show at least one letter. Multi-letter faces such as 'Qu' are allowed.",
            BoardError::Config(_) => "The board dimensions were rejected. This wraps an underlying ConfigError (see Configuration Errors section for specific error codes).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BoardError::SizeMismatch { .. } => Some("Example: a 2x2 board needs four faces, e.g. \"c a t s\""),
            BoardError::EmptyFace { .. } => Some("Give every tile a letter; separate faces with spaces or commas"),
            BoardError::Config(_) => None, // ConfigError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            BoardError::Config(ce) => {
                // delegate to ConfigError's detailed display
                format!("{}\n  caused by: {}", self.code(), ce.display_detailed())
            }
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_config_errors() -> Vec<ConfigError> {
        vec![
            ConfigError::InvalidMinLength { min_length: 0 },
            ConfigError::InvalidDimensions { rows: 0, cols: 4 },
            ConfigError::BoardTooLarge { rows: usize::MAX, cols: 2 },
        ]
    }

    fn all_board_errors() -> Vec<BoardError> {
        vec![
            BoardError::SizeMismatch { rows: 2, cols: 2, expected: 4, actual: 3 },
            BoardError::EmptyFace { row: 1, col: 0 },
            BoardError::Config(ConfigError::InvalidDimensions { rows: 0, cols: 0 }),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = ConfigError::InvalidMinLength { min_length: 0 };
        assert_eq!(err.code(), "C001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("C001"));
        assert!(detailed.contains("minimum word length"));
    }

    /// Codes are unique across both families
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = HashSet::new();
        for code in all_config_errors().iter().map(ConfigError::code)
            .chain(all_board_errors().iter().map(BoardError::code)) {
            assert!(codes.insert(code), "Duplicate error code found: {code}");
        }
        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn test_error_code_format() {
        for err in all_board_errors() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters (B0XX)");
            assert!(code.starts_with("B0"));
            assert!(code[1..].parse::<u16>().is_ok());
        }
        for err in all_config_errors() {
            assert!(err.code().starts_with("C0"));
        }
    }

    #[test]
    fn test_size_mismatch_message_includes_counts() {
        let err = BoardError::SizeMismatch { rows: 2, cols: 2, expected: 4, actual: 3 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("3 tiles"));
        assert!(detailed.contains("needs 4"));
        assert!(detailed.contains("B001"));
        assert!(detailed.contains("Example"));
    }

    #[test]
    fn test_wrapped_config_error_shows_both_codes() {
        let err = BoardError::from(ConfigError::InvalidDimensions { rows: 0, cols: 3 });
        let detailed = err.display_detailed();
        assert!(detailed.contains("B003"));
        assert!(detailed.contains("C002"));
        assert!(detailed.contains("0x3"));
    }

    #[test]
    fn test_help_text_adds_information() {
        for err in all_config_errors() {
            if let Some(help) = err.help() {
                assert!(help.len() > 10);
                assert_ne!(help, err.to_string());
            }
        }
    }
}
