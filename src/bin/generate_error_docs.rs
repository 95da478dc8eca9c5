//! Generate error code documentation from the error enums themselves.
//!
//! Codes, descriptions, details and help text come straight from the
//! `code()`, `description()`, `details()` and `help()` methods of
//! `BoardError` and `ConfigError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use gridwords::errors::{BoardError, ConfigError};

/// Emit one documentation section per error value.
/// Works for any type with `code()`, `description()`, `details()`, `help()` and `display_detailed()`.
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_board_error_variants() -> Vec<BoardError> {
    vec![
        BoardError::SizeMismatch { rows: 4, cols: 4, expected: 16, actual: 15 },
        BoardError::EmptyFace { row: 1, col: 2 },
        BoardError::Config(ConfigError::InvalidDimensions { rows: 0, cols: 4 }),
    ]
}

fn all_config_error_variants() -> Vec<ConfigError> {
    vec![
        ConfigError::InvalidMinLength { min_length: 0 },
        ConfigError::InvalidDimensions { rows: 0, cols: 4 },
        ConfigError::BoardTooLarge { rows: usize::MAX, cols: 2 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Board Errors (B001–B003)](#board-errors)");
    println!("- [Configuration Errors (C001–C003)](#configuration-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    println!("## Board Errors\n");
    println!("Errors raised while turning a letter grid into a board. B003 wraps a configuration error.\n");
    generate_error_docs!(all_board_error_variants());

    println!("## Configuration Errors\n");
    println!("Errors raised when board dimensions or the minimum word length are out of range.\n");
    generate_error_docs!(all_config_error_variants());

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: {}", ConfigError::InvalidMinLength { min_length: 0 }.display_detailed());
    println!("```\n");
    println!("1. Note the error code (e.g., `C001`)");
    println!("2. Look it up in this document for a detailed explanation");
    println!("3. Follow the suggested fix\n");
}
