//! Result ordering and score rescaling

use crate::core::letter_count;
use std::cmp::Ordering;

/// A word with the score it earned in one query
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: String,
    pub score: f64,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Total order for results: highest score, then longest word, then alphabetical
#[must_use]
pub fn compare(a: &ScoredWord, b: &ScoredWord) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| letter_count(&b.word).cmp(&letter_count(&a.word)))
        .then_with(|| a.word.cmp(&b.word))
}

/// Sort results into ranking order
pub fn rank(results: &mut [ScoredWord]) {
    results.sort_by(compare);
}

/// Check whether results are already in ranking order
#[must_use]
pub fn is_ranked(results: &[ScoredWord]) -> bool {
    results
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Rescale scores so the maximum becomes 100
///
/// A set whose maximum is not positive (empty, or all zero) is left untouched.
///
/// # Examples
/// ```
/// use spelling_bee::solver::{ScoredWord, normalize_scores};
///
/// let mut results = vec![ScoredWord::new("apple", 4.0), ScoredWord::new("pale", 1.0)];
/// normalize_scores(&mut results);
/// assert_eq!(results[0].score, 100.0);
/// assert_eq!(results[1].score, 25.0);
/// ```
pub fn normalize_scores(results: &mut [ScoredWord]) {
    let max = results
        .iter()
        .map(|r| r.score)
        .fold(f64::NEG_INFINITY, f64::max);

    if !(max.is_finite() && max > 0.0) {
        return;
    }

    for result in results {
        result.score = result.score / max * 100.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[(&str, f64)]) -> Vec<ScoredWord> {
        items.iter().map(|&(w, s)| ScoredWord::new(w, s)).collect()
    }

    fn order(results: &[ScoredWord]) -> Vec<&str> {
        results.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn rank_by_score_descending() {
        let mut results = words(&[("pale", 1.0), ("apple", 2.0), ("pangram", 11.0)]);
        rank(&mut results);
        assert_eq!(order(&results), vec!["pangram", "apple", "pale"]);
    }

    #[test]
    fn ties_broken_by_length_then_alphabet() {
        let mut results = words(&[("zeal", 3.0), ("peal", 3.0), ("appeal", 3.0), ("leap", 3.0)]);
        rank(&mut results);
        assert_eq!(order(&results), vec!["appeal", "leap", "peal", "zeal"]);
    }

    #[test]
    fn rank_is_idempotent() {
        let mut results = words(&[("pale", 1.0), ("apple", 2.0), ("leap", 1.0), ("appeal", 3.0)]);
        rank(&mut results);
        let once = results.clone();
        rank(&mut results);
        assert_eq!(results, once);
        assert!(is_ranked(&results));
    }

    #[test]
    fn is_ranked_detects_disorder() {
        let results = words(&[("pale", 1.0), ("apple", 2.0)]);
        assert!(!is_ranked(&results));
        assert!(is_ranked(&[]));
    }

    #[test]
    fn normalize_scales_to_hundred() {
        let mut results = words(&[("a", 50.0), ("b", 25.0), ("c", 0.0)]);
        normalize_scores(&mut results);
        assert!((results[0].score - 100.0).abs() < f64::EPSILON);
        assert!((results[1].score - 50.0).abs() < f64::EPSILON);
        assert!(results[2].score.abs() < f64::EPSILON);
    }

    #[test]
    fn normalize_all_zero_is_noop() {
        let mut results = words(&[("a", 0.0), ("b", 0.0)]);
        normalize_scores(&mut results);
        assert!(results.iter().all(|r| r.score == 0.0 && !r.score.is_nan()));
    }

    #[test]
    fn normalize_empty_is_noop() {
        let mut results: Vec<ScoredWord> = Vec::new();
        normalize_scores(&mut results);
        assert!(results.is_empty());
    }
}
