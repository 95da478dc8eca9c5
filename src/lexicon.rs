//! The dictionary the search runs against.
//!
//! Words are kept in one sorted `Vec<String>`. Every word sharing a prefix sits in
//! a contiguous run, so both exact lookups and prefix lookups are binary searches,
//! and a search that extends a prefix one tile at a time can keep narrowing the
//! run it already has instead of starting over (see [`Lexicon::narrow`]).

use crate::config::validate_min_length;
use crate::errors::ConfigError;
use log::debug;
use std::ops::Range;

/// Immutable set of lowercase words, each at least `min_length` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
    min_length: usize,
}

impl Lexicon {
    /// Build a lexicon from any collection of words.
    ///
    /// Words are trimmed and lowercased; words shorter than `min_length` characters
    /// (and empty ones) are dropped; duplicates collapse. The result does not depend
    /// on the input order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMinLength`] if `min_length` is zero.
    pub fn build<I, S>(words: I, min_length: usize) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validate_min_length(min_length)?;

        let mut seen = 0usize;
        let mut kept: Vec<String> = words
            .into_iter()
            .inspect(|_| seen += 1)
            .filter_map(|w| {
                let w = w.as_ref().trim().to_lowercase();
                (w.chars().count() >= min_length).then_some(w)
            })
            .collect();

        kept.sort_unstable();
        kept.dedup();

        debug!(
            "lexicon built: {} words kept of {} supplied (min length {})",
            kept.len(),
            seen,
            min_length
        );

        Ok(Self { words: kept, min_length })
    }

    /// Exact membership.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    /// True iff some stored word begins with `prefix`.
    ///
    /// `has_prefix("")` is true iff the lexicon is non-empty.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        !self.prefix_range(prefix).is_empty()
    }

    /// Index range of all words starting with `prefix`.
    #[must_use]
    pub fn prefix_range(&self, prefix: &str) -> Range<usize> {
        self.narrow(0..self.words.len(), prefix)
    }

    /// Narrow `within` to the words that start with `prefix`.
    ///
    /// `within` must already be the range of some prefix of `prefix` (or the whole
    /// lexicon); the result is then exactly `prefix_range(prefix)`.
    #[must_use]
    pub fn narrow(&self, within: Range<usize>, prefix: &str) -> Range<usize> {
        let slice = &self.words[within.clone()];
        // sorted order puts [< prefix][starts with prefix][> prefix]
        let lo = slice.partition_point(|w| w.as_str() < prefix);
        let hi = lo + slice[lo..].partition_point(|w| w.starts_with(prefix));
        (within.start + lo)..(within.start + hi)
    }

    /// True iff the run `range` (as returned by [`Lexicon::narrow`] for `prefix`)
    /// contains `prefix` itself as a whole word.
    #[must_use]
    pub(crate) fn range_holds_word(&self, range: &Range<usize>, prefix: &str) -> bool {
        // the prefix itself sorts first in its own run
        !range.is_empty() && self.words[range.start] == prefix
    }

    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(words: &[&str], min_length: usize) -> Lexicon {
        Lexicon::build(words.iter().copied(), min_length).unwrap()
    }

    #[test]
    fn test_build_filters_short_words() {
        let lex = lexicon(&["a", "at", "cat", "cats"], 3);
        assert_eq!(lex.iter().collect::<Vec<_>>(), vec!["cat", "cats"]);
        assert_eq!(lex.min_length(), 3);
    }

    #[test]
    fn test_build_lowercases_and_dedups() {
        let lex = lexicon(&["Cat", "CAT", "cat", " dog "], 1);
        assert_eq!(lex.iter().collect::<Vec<_>>(), vec!["cat", "dog"]);
        assert_eq!(lex.len(), 2);
    }

    #[test]
    fn test_build_is_order_independent() {
        let a = lexicon(&["zebra", "apple", "mango", "apple"], 2);
        let b = lexicon(&["mango", "apple", "zebra"], 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_rejects_zero_min_length() {
        let err = Lexicon::build(["cat"], 0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidMinLength { min_length: 0 });
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        let lex = lexicon(&["été", "ab"], 3);
        assert!(lex.contains("été"));
        assert!(!lex.contains("ab"));
    }

    #[test]
    fn test_contains() {
        let lex = lexicon(&["cat", "cats", "act"], 3);
        assert!(lex.contains("cat"));
        assert!(lex.contains("cats"));
        assert!(lex.contains("act"));
        assert!(!lex.contains("ca"));
        assert!(!lex.contains("catsup"));
        assert!(!lex.contains(""));
    }

    #[test]
    fn test_has_prefix() {
        let lex = lexicon(&["cat", "cats", "act", "quit"], 3);
        assert!(lex.has_prefix("c"));
        assert!(lex.has_prefix("ca"));
        assert!(lex.has_prefix("cats"));
        assert!(lex.has_prefix("qu"));
        assert!(!lex.has_prefix("catsu"));
        assert!(!lex.has_prefix("b"));
        assert!(!lex.has_prefix("z"));
    }

    #[test]
    fn test_empty_prefix_iff_non_empty() {
        assert!(lexicon(&["cat"], 3).has_prefix(""));
        assert!(!lexicon(&[], 3).has_prefix(""));
        // everything filtered out
        assert!(!lexicon(&["at"], 3).has_prefix(""));
    }

    #[test]
    fn test_has_prefix_is_monotonic() {
        let lex = lexicon(&["bead", "bear", "beat", "cab"], 3);
        for missing in ["bz", "ca_", "d"] {
            assert!(!lex.has_prefix(missing));
            for ext in ["a", "e", "zz"] {
                assert!(!lex.has_prefix(&format!("{missing}{ext}")));
            }
        }
    }

    #[test]
    fn test_prefix_range_and_narrow_agree() {
        let lex = lexicon(&["bead", "bear", "beat", "bee", "cab", "cat"], 3);
        let b = lex.prefix_range("b");
        assert_eq!(b, 0..4);
        let be = lex.narrow(b, "be");
        assert_eq!(be, lex.prefix_range("be"));
        let bea = lex.narrow(be.clone(), "bea");
        assert_eq!(bea, 0..3);
        let bee = lex.narrow(be, "bee");
        assert_eq!(bee, 3..4);
        assert!(lex.range_holds_word(&bee, "bee"));
        assert!(!lex.range_holds_word(&bea, "bea"));
        assert!(lex.narrow(bea, "beaz").is_empty());
    }

    #[test]
    fn test_length_filter_counts_stored_form() {
        // 'İ' lowercases to "i" plus a combining dot, two chars
        let lex = lexicon(&["İ", "A"], 2);
        assert_eq!(lex.iter().collect::<Vec<_>>(), vec!["i\u{307}"]);
        assert!(lex.iter().all(|w| w.chars().count() >= lex.min_length()));
    }
}
