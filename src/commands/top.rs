//! Corpus-ranked "top N" mode
//!
//! Takes all seven letters as one string plus the center, ranks every valid word by
//! corpus relevance and keeps the best few.

use crate::core::{LetterSet, PUZZLE_LETTERS, Puzzle, WordFilters};
use crate::error::InputError;
use crate::solver::{CorpusScorer, QueryEngine, QueryResult};

/// Number of words kept when no count is given
pub const DEFAULT_TOP: usize = 20;

/// Build a puzzle from seven letters that include the center
///
/// # Errors
///
/// - `InputError::CenterLength` if `center` is not exactly one character
/// - `InputError::NonAlphabetic` for characters outside `a..=z`
/// - `InputError::PuzzleLetters` unless the letters form seven distinct letters
///   including the center
///
/// # Examples
/// ```
/// use spelling_bee::commands::top::puzzle_from_letters;
///
/// let puzzle = puzzle_from_letters("AELPXYZ", "a").unwrap();
/// assert_eq!(puzzle.center(), 'a');
/// assert!(puzzle_from_letters("aelpxy", "a").is_err());
/// ```
pub fn puzzle_from_letters(letters: &str, center: &str) -> Result<Puzzle, InputError> {
    let center = center.trim();
    let mut chars = center.chars();
    let center_letter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(InputError::CenterLength(center.chars().count())),
    };

    let set = LetterSet::from_parts(center_letter, letters.trim())?;
    let includes_center = letters
        .to_lowercase()
        .contains(center_letter.to_ascii_lowercase());
    if set.len() != PUZZLE_LETTERS || !includes_center {
        return Err(InputError::PuzzleLetters(set.len()));
    }

    Ok(Puzzle::from(set))
}

/// Rank every valid word by corpus relevance and keep the first `count`
#[must_use]
pub fn top_words(
    puzzle: &Puzzle,
    scorer: CorpusScorer,
    dictionary: &[String],
    count: usize,
) -> QueryResult {
    let engine = QueryEngine::new(scorer, dictionary);
    let mut result = engine.query(puzzle, &WordFilters::default());
    result.truncate(count);
    result
}
