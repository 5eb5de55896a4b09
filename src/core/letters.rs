//! Puzzle letter set
//!
//! A `LetterSet` is the center letter plus the six surrounding letters, stored as a
//! 26-bit mask so membership and pangram checks are single bit operations.

use crate::error::InputError;
use std::fmt;

/// Number of distinct letters in a well-formed puzzle
pub const PUZZLE_LETTERS: usize = 7;

/// The set of letters a puzzle allows, with its mandatory center letter
///
/// Invariant: the center letter is always a member. Duplicate letters collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet {
    mask: u32,
    center: char,
}

impl LetterSet {
    /// Build a letter set from a center letter and the remaining letters
    ///
    /// Input is lowercased; duplicates (including repeats of the center) collapse.
    /// Length is not checked here, see [`crate::core::Puzzle`] for the strict form.
    ///
    /// # Errors
    /// Returns `InputError::NonAlphabetic` if any character is outside `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let letters = LetterSet::from_parts('a', "elpxyz").unwrap();
    /// assert_eq!(letters.len(), 7);
    /// assert!(letters.contains('x'));
    /// assert!(!letters.contains('b'));
    /// ```
    pub fn from_parts(center: char, others: &str) -> Result<Self, InputError> {
        let center = center.to_ascii_lowercase();
        let mut mask = bit(center).ok_or(InputError::NonAlphabetic(center))?;

        for c in others.chars() {
            let c = c.to_ascii_lowercase();
            mask |= bit(c).ok_or(InputError::NonAlphabetic(c))?;
        }

        Ok(Self { mask, center })
    }

    /// The mandatory center letter
    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center
    }

    /// Check whether a letter belongs to the set
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        bit(letter).is_some_and(|b| self.mask & b != 0)
    }

    /// Number of distinct letters in the set (at most 7 for a puzzle)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Check whether every letter of the set appears in `word`
    #[inline]
    #[must_use]
    pub fn is_covered_by(&self, word: &str) -> bool {
        mask_of(word) & self.mask == self.mask
    }

    /// Letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (b'a'..=b'z')
            .map(char::from)
            .filter(|&c| self.contains(c))
    }

    /// The letters other than the center, in alphabetical order
    #[must_use]
    pub fn outer(&self) -> Vec<char> {
        self.iter().filter(|&c| c != self.center).collect()
    }
}

impl fmt::Display for LetterSet {
    /// Formats as `a, e, l, p, x, y, z`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = self.iter().map(String::from).collect();
        write!(f, "{}", letters.join(", "))
    }
}

#[inline]
fn bit(letter: char) -> Option<u32> {
    letter
        .is_ascii_lowercase()
        .then(|| 1 << (letter as u32 - 'a' as u32))
}

/// Bitmask of the `a..=z` letters occurring in `word`
fn mask_of(word: &str) -> u32 {
    word.chars().filter_map(bit).fold(0, |acc, b| acc | b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_collects_seven_letters() {
        let letters = LetterSet::from_parts('a', "elpxyz").unwrap();
        assert_eq!(letters.len(), PUZZLE_LETTERS);
        assert_eq!(letters.center(), 'a');
        for c in "aelpxyz".chars() {
            assert!(letters.contains(c), "missing {c}");
        }
        assert!(!letters.contains('b'));
    }

    #[test]
    fn from_parts_lowercases_input() {
        let letters = LetterSet::from_parts('A', "ELPXYZ").unwrap();
        assert_eq!(letters.center(), 'a');
        assert!(letters.contains('x'));
        assert!(!letters.contains('X'));
    }

    #[test]
    fn duplicates_collapse() {
        let letters = LetterSet::from_parts('a', "aappll").unwrap();
        assert_eq!(letters.len(), 3);
    }

    #[test]
    fn center_is_always_a_member() {
        let letters = LetterSet::from_parts('q', "").unwrap();
        assert!(letters.contains('q'));
        assert_eq!(letters.len(), 1);
    }

    #[test]
    fn non_alphabetic_rejected() {
        assert_eq!(
            LetterSet::from_parts('1', "abcdef"),
            Err(InputError::NonAlphabetic('1'))
        );
        assert_eq!(
            LetterSet::from_parts('a', "bc-def"),
            Err(InputError::NonAlphabetic('-'))
        );
        assert!(LetterSet::from_parts('a', "bcdéf").is_err());
    }

    #[test]
    fn covered_by_requires_every_letter() {
        let letters = LetterSet::from_parts('p', "angrmx").unwrap();
        assert!(!letters.is_covered_by("pangram"));

        let letters = LetterSet::from_parts('p', "angrm").unwrap();
        assert!(letters.is_covered_by("pangram"));
    }

    #[test]
    fn outer_excludes_center() {
        let letters = LetterSet::from_parts('l', "aepxyz").unwrap();
        assert_eq!(letters.outer(), vec!['a', 'e', 'p', 'x', 'y', 'z']);
    }

    #[test]
    fn display_is_sorted() {
        let letters = LetterSet::from_parts('z', "yxplea").unwrap();
        assert_eq!(letters.to_string(), "a, e, l, p, x, y, z");
    }
}
