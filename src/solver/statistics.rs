//! Result-set summaries

use super::ranking::ScoredWord;
use crate::core::{LetterSet, is_pangram, letter_count};

/// Summary of a result set, recomputed on demand
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    pub total_words: usize,
    pub pangrams_count: usize,
    /// 0 for an empty result set
    pub avg_length: f64,
    /// Sum of scores as produced by whichever scorer ran
    pub total_points: f64,
}

impl Statistics {
    /// Summarize ranked results for the letters that produced them
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    /// use spelling_bee::solver::{ScoredWord, Statistics};
    ///
    /// let letters = LetterSet::from_parts('p', "angrmx").unwrap();
    /// let stats = Statistics::summarize(&[], &letters);
    /// assert_eq!(stats.total_words, 0);
    /// assert_eq!(stats.avg_length, 0.0);
    /// ```
    #[must_use]
    pub fn summarize(results: &[ScoredWord], letters: &LetterSet) -> Self {
        let total_words = results.len();
        let pangrams_count = results
            .iter()
            .filter(|r| is_pangram(&r.word, letters))
            .count();
        let total_letters: usize = results.iter().map(|r| letter_count(&r.word)).sum();
        let avg_length = if total_words == 0 {
            0.0
        } else {
            total_letters as f64 / total_words as f64
        };
        let total_points = results.iter().fold(0.0, |acc, r| acc + r.score);

        Self {
            total_words,
            pangrams_count,
            avg_length,
            total_points,
        }
    }
}
