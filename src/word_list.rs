//! `word_list`: load and preprocess the raw word list that feeds the lexicon
//!
//! This module reads a word list either from a file or from an in-memory string.
//! It is plumbing around the engine: the lexicon only needs a collection of words,
//! and this is the usual way to get one.
//!
//! The parsing logic:
//! - One word per line.
//! - Empty lines and lines starting with `#` are skipped.
//! - An optional `;score` suffix (the scored-list format) is accepted and ignored.
//! - Entries containing whitespace are skipped.
//! - All words are normalized to lowercase.
//! - The final list is sorted and deduplicated.
//!
//! Length filtering is NOT done here; that belongs to [`crate::lexicon::Lexicon::build`].

use log::debug;

/// A processed, ready-to-use word list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Lowercase words, sorted and without duplicates.
    /// Example: `["able", "acid", "acorn", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines and trims each one.
    /// 2. Skips empty lines and `#` comments.
    /// 3. Keeps only the part before the first `;`.
    /// 4. Skips entries with inner whitespace.
    /// 5. Converts to lowercase.
    /// 6. Sorts and deduplicates.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }

                let word = line.split(';').next().unwrap_or(line).trim();
                if word.is_empty() || word.chars().any(char::is_whitespace) {
                    None
                } else {
                    Some(word.to_lowercase())
                }
            })
            .collect();

        // `dedup()` only removes adjacent duplicates, so sort first
        words.sort();
        words.dedup();

        debug!("parsed word list: {} unique words", words.len());
        WordList { words }
    }

    /// Read from a file path and parse.
    ///
    /// # Example:
    /// `let word_list = WordList::load_from_path("enable1.txt")?;`
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let word_list = WordList::parse_from_str("cat\ndog\nbird");
        assert_eq!(word_list.words, vec!["bird", "cat", "dog"]);
    }

    #[test]
    fn test_parse_deduplicates() {
        let word_list = WordList::parse_from_str("cat\ndog\ncat\nCAT");
        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let word_list = WordList::parse_from_str("QUIT\nDog");
        assert_eq!(word_list.words, vec!["dog", "quit"]);
    }

    #[test]
    fn test_parse_skips_empty_lines_and_comments() {
        let word_list = WordList::parse_from_str("# header\ncat\n\n\n  # indented comment\ndog\n\n");
        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_accepts_scored_lines() {
        let word_list = WordList::parse_from_str("cat;50\ndog;60\nbird");
        assert_eq!(word_list.words, vec!["bird", "cat", "dog"]);
    }

    #[test]
    fn test_parse_skips_entries_with_spaces() {
        let word_list = WordList::parse_from_str("ice cream\ncat\n  dog  ");
        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let word_list = WordList::parse_from_str("");
        assert!(word_list.is_empty());
        assert_eq!(word_list.len(), 0);
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let err = WordList::load_from_path("definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
