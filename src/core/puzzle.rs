//! Puzzle parameters
//!
//! `QueryRequest` is what a presentation layer hands over; it is turned into a
//! validated `Puzzle` plus `WordFilters` before the query engine sees it.

use super::rules::{MIN_WORD_LENGTH, letter_count};
use super::{LetterSet, PUZZLE_LETTERS};
use crate::error::InputError;
use std::path::PathBuf;

/// Number of letters surrounding the center letter
pub const OTHER_LETTERS: usize = 6;

/// Default dictionary file used when none is given
pub const DEFAULT_DICTIONARY: &str = "words.txt";

/// A validated puzzle: one center letter and six others
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    letters: LetterSet,
}

impl Puzzle {
    /// Validate raw center and other-letter strings
    ///
    /// Surrounding whitespace is ignored and input is lowercased.
    ///
    /// # Errors
    /// - `InputError::CenterLength` if `center` is not exactly one character
    /// - `InputError::OtherLettersLength` if `others` is not exactly six characters
    /// - `InputError::NonAlphabetic` if any character is outside `a..=z`
    /// - `InputError::PuzzleLetters` if a letter repeats, so fewer than seven remain
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new("a", "ELPXYZ").unwrap();
    /// assert_eq!(puzzle.center(), 'a');
    ///
    /// assert!(Puzzle::new("ab", "elpxyz").is_err());
    /// assert!(Puzzle::new("a", "elp").is_err());
    /// assert!(Puzzle::new("a", "aelpxy").is_err());
    /// ```
    pub fn new(center: &str, others: &str) -> Result<Self, InputError> {
        let center = center.trim();
        let others = others.trim();

        let mut center_chars = center.chars();
        let center_letter = match (center_chars.next(), center_chars.next()) {
            (Some(c), None) => c,
            _ => return Err(InputError::CenterLength(letter_count(center))),
        };

        let others_len = letter_count(others);
        if others_len != OTHER_LETTERS {
            return Err(InputError::OtherLettersLength(others_len));
        }

        let letters = LetterSet::from_parts(center_letter, others)?;
        if letters.len() != PUZZLE_LETTERS {
            return Err(InputError::PuzzleLetters(letters.len()));
        }
        Ok(Self { letters })
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.letters.center()
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }
}

impl From<LetterSet> for Puzzle {
    fn from(letters: LetterSet) -> Self {
        Self { letters }
    }
}

/// Query-level constraints applied on top of the puzzle rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFilters {
    pub min_length: usize,
    /// 0 means no upper bound
    pub max_length: usize,
    /// Empty means no substring requirement; stored lowercase
    pub must_contain: String,
}

impl Default for WordFilters {
    fn default() -> Self {
        Self {
            min_length: MIN_WORD_LENGTH,
            max_length: 0,
            must_contain: String::new(),
        }
    }
}

impl WordFilters {
    #[must_use]
    pub fn new(min_length: usize, max_length: usize, must_contain: &str) -> Self {
        Self {
            min_length,
            max_length,
            must_contain: must_contain.trim().to_lowercase(),
        }
    }

    /// Check length bounds and the required substring
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        let len = letter_count(word);
        len >= self.min_length
            && (self.max_length == 0 || len <= self.max_length)
            && (self.must_contain.is_empty() || word.contains(self.must_contain.as_str()))
    }
}

/// Everything a presentation layer supplies for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub dictionary_path: PathBuf,
    pub center: String,
    pub other_letters: String,
    pub min_length: usize,
    pub max_length: usize,
    pub must_contain: String,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
            center: String::new(),
            other_letters: String::new(),
            min_length: MIN_WORD_LENGTH,
            max_length: 0,
            must_contain: String::new(),
        }
    }
}

impl QueryRequest {
    #[must_use]
    pub fn new(
        dictionary_path: impl Into<PathBuf>,
        center: impl Into<String>,
        other_letters: impl Into<String>,
    ) -> Self {
        Self {
            dictionary_path: dictionary_path.into(),
            center: center.into(),
            other_letters: other_letters.into(),
            ..Self::default()
        }
    }

    /// Validate the letters of the request
    ///
    /// # Errors
    /// Returns an `InputError` if the center or other letters are malformed.
    pub fn puzzle(&self) -> Result<Puzzle, InputError> {
        Puzzle::new(&self.center, &self.other_letters)
    }

    #[must_use]
    pub fn filters(&self) -> WordFilters {
        WordFilters::new(self.min_length, self.max_length, &self.must_contain)
    }
}

/// Parse a length typed by a user
///
/// Blank input yields `default`.
///
/// # Errors
/// Returns `InputError::InvalidNumber` for anything that is not a non-negative integer.
pub fn parse_length(field: &'static str, input: &str, default: usize) -> Result<usize, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }

    trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_valid() {
        let puzzle = Puzzle::new(" A ", "elpxyz\n").unwrap();
        assert_eq!(puzzle.center(), 'a');
        assert_eq!(puzzle.letters().len(), 7);
    }

    #[test]
    fn puzzle_rejects_bad_center() {
        assert_eq!(Puzzle::new("", "elpxyz"), Err(InputError::CenterLength(0)));
        assert_eq!(Puzzle::new("ab", "elpxyz"), Err(InputError::CenterLength(2)));
    }

    #[test]
    fn puzzle_rejects_bad_other_letters() {
        assert_eq!(
            Puzzle::new("a", "elpx"),
            Err(InputError::OtherLettersLength(4))
        );
        assert_eq!(
            Puzzle::new("a", "elpxyzq"),
            Err(InputError::OtherLettersLength(7))
        );
    }

    #[test]
    fn puzzle_rejects_non_letters() {
        assert_eq!(
            Puzzle::new("a", "elp1yz"),
            Err(InputError::NonAlphabetic('1'))
        );
    }

    #[test]
    fn puzzle_rejects_repeated_letters() {
        assert_eq!(
            Puzzle::new("a", "aelpxx"),
            Err(InputError::PuzzleLetters(5))
        );
        assert_eq!(
            Puzzle::new("e", "aelpxy"),
            Err(InputError::PuzzleLetters(6))
        );
    }

    #[test]
    fn filters_default() {
        let filters = WordFilters::default();
        assert_eq!(filters.min_length, 4);
        assert_eq!(filters.max_length, 0);
        assert!(filters.must_contain.is_empty());
    }

    #[test]
    fn filters_max_zero_is_unbounded() {
        let filters = WordFilters::new(4, 0, "");
        assert!(filters.accepts("appallyleapzaxa"));
    }

    #[test]
    fn filters_length_bounds() {
        let filters = WordFilters::new(5, 6, "");
        assert!(!filters.accepts("pale"));
        assert!(filters.accepts("apple"));
        assert!(filters.accepts("appeal"));
        assert!(!filters.accepts("applaud"));
    }

    #[test]
    fn filters_substring_is_lowercased() {
        let filters = WordFilters::new(4, 0, " EX ");
        assert_eq!(filters.must_contain, "ex");
        assert!(filters.accepts("example"));
        assert!(!filters.accepts("apple"));
    }

    #[test]
    fn request_defaults() {
        let request = QueryRequest::new("dict.txt", "a", "elpxyz");
        assert_eq!(request.min_length, 4);
        assert_eq!(request.max_length, 0);
        assert_eq!(request.filters(), WordFilters::default());
        assert!(request.puzzle().is_ok());
    }

    #[test]
    fn parse_length_handles_blank_and_numbers() {
        assert_eq!(parse_length("Minimum length", "", 4), Ok(4));
        assert_eq!(parse_length("Minimum length", " 7 ", 4), Ok(7));
        assert_eq!(
            parse_length("Maximum length", "seven", 0),
            Err(InputError::InvalidNumber {
                field: "Maximum length",
                value: "seven".to_string()
            })
        );
        assert!(parse_length("Maximum length", "-1", 0).is_err());
    }
}
