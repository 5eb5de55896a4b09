//! Spelling Bee word rules
//!
//! Pure predicates over a word, the center letter and the puzzle letter set.

use super::LetterSet;

/// Shortest word the puzzle accepts
pub const MIN_WORD_LENGTH: usize = 4;

/// Number of letters in a word (not bytes)
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Check whether a word is a legal answer for the puzzle
///
/// A legal word has at least four letters, contains the center letter and uses
/// nothing outside `letters`. Query-level bounds such as a maximum length are
/// applied separately.
///
/// # Examples
/// ```
/// use spelling_bee::core::{LetterSet, is_valid};
///
/// let letters = LetterSet::from_parts('a', "elpxyz").unwrap();
/// assert!(is_valid("apple", 'a', &letters));
/// assert!(!is_valid("banana", 'a', &letters));
/// assert!(!is_valid("ape", 'a', &letters));
/// ```
#[must_use]
pub fn is_valid(word: &str, center: char, letters: &LetterSet) -> bool {
    letter_count(word) >= MIN_WORD_LENGTH
        && word.contains(center)
        && word.chars().all(|c| letters.contains(c))
}

/// Check whether a word uses every letter of the puzzle at least once
#[must_use]
pub fn is_pangram(word: &str, letters: &LetterSet) -> bool {
    letters.is_covered_by(word)
}
