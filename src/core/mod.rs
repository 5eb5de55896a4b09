//! Core domain types for Spelling Bee
//!
//! Letter sets, validated puzzle parameters and the word rules. Everything here is
//! pure and free of I/O.

mod letters;
mod puzzle;
mod rules;

pub use letters::{LetterSet, PUZZLE_LETTERS};
pub use puzzle::{
    DEFAULT_DICTIONARY, OTHER_LETTERS, Puzzle, QueryRequest, WordFilters, parse_length,
};
pub use rules::{MIN_WORD_LENGTH, is_pangram, is_valid, letter_count};
