//! Word scoring strategies
//!
//! Defines the Scorer trait and the two concrete schemes: the puzzle's own point
//! rules, and a corpus-informed relevance score. One scorer is used for a whole
//! result set.

use super::frequency::FrequencyModel;
use super::ranking::{ScoredWord, normalize_scores};
use crate::core::{LetterSet, is_pangram, letter_count};
use std::sync::Arc;

/// Bonus points for using every puzzle letter
pub const PANGRAM_BONUS: f64 = 7.0;

/// Default bigram weight in the corpus blend
pub const DEFAULT_BIGRAM_WEIGHT: f64 = 0.5;

/// A scheme for scoring accepted words
pub trait Scorer: Sync {
    /// Score a single word for the given puzzle letters
    fn score(&self, word: &str, letters: &LetterSet) -> f64;

    /// Adjust the scores of the complete result set before ranking
    fn finalize(&self, _results: &mut [ScoredWord]) {}

    /// Whether every score this scorer produces is a whole number
    fn is_integral(&self) -> bool {
        false
    }
}

/// Puzzle point rules
///
/// A four-letter word is worth 1 point, longer words 1 point per letter beyond
/// three, and a pangram earns 7 more.
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::solver::{RuleScorer, Scorer};
///
/// let letters = LetterSet::from_parts('a', "elpxyz").unwrap();
/// assert_eq!(RuleScorer.score("apple", &letters), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleScorer;

impl RuleScorer {
    /// Points before any pangram bonus
    #[must_use]
    pub fn base_points(word: &str) -> f64 {
        letter_count(word).saturating_sub(3).max(1) as f64
    }
}

impl Scorer for RuleScorer {
    fn score(&self, word: &str, letters: &LetterSet) -> f64 {
        let base = Self::base_points(word);
        if is_pangram(word, letters) {
            base + PANGRAM_BONUS
        } else {
            base
        }
    }

    fn is_integral(&self) -> bool {
        true
    }
}

/// Corpus-informed relevance
///
/// Blends the word's bigram and trigram corpus counts, optionally divided by word
/// length, and optionally rescaled so the best word in the set scores 100.
#[derive(Debug, Clone)]
pub struct CorpusScorer {
    model: Arc<FrequencyModel>,
    weight: f64,
    length_normalized: bool,
    rescale: bool,
}

impl CorpusScorer {
    #[must_use]
    pub fn new(model: Arc<FrequencyModel>) -> Self {
        Self {
            model,
            weight: DEFAULT_BIGRAM_WEIGHT,
            length_normalized: false,
            rescale: false,
        }
    }

    /// Set the bigram weight (clamped to `0.0..=1.0`); trigrams get the rest
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight.clamp(0.0, 1.0);
        self
    }

    /// Divide each combined score by the word length
    #[must_use]
    pub fn length_normalized(mut self, enabled: bool) -> Self {
        self.length_normalized = enabled;
        self
    }

    /// Rescale the finished result set to `0..=100`
    #[must_use]
    pub fn rescaled(mut self, enabled: bool) -> Self {
        self.rescale = enabled;
        self
    }

    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }
}

impl Scorer for CorpusScorer {
    fn score(&self, word: &str, _letters: &LetterSet) -> f64 {
        let combined = self.model.combined_score(word, self.weight);
        let len = letter_count(word);
        if self.length_normalized && len > 0 {
            combined / len as f64
        } else {
            combined
        }
    }

    fn finalize(&self, results: &mut [ScoredWord]) {
        if self.rescale {
            normalize_scores(results);
        }
    }
}

/// Runtime selection between the scoring schemes
///
/// Keeps static dispatch inside the query engine while letting the CLI choose.
#[derive(Debug, Clone)]
pub enum ScoringStrategy {
    /// Puzzle point rules (default)
    Rules(RuleScorer),
    /// Corpus n-gram relevance
    Corpus(CorpusScorer),
}

impl Default for ScoringStrategy {
    fn default() -> Self {
        Self::Rules(RuleScorer)
    }
}

impl ScoringStrategy {
    /// Create a strategy from its name
    ///
    /// Supported names: "rules", "corpus", "corpus-normalized". Defaults to rules if
    /// the name is unrecognized. `model` is only used by the corpus schemes.
    #[must_use]
    pub fn from_name(name: &str, model: Arc<FrequencyModel>) -> Self {
        match name {
            "corpus" | "frequency" => Self::Corpus(CorpusScorer::new(model)),
            "corpus-normalized" | "normalized" => {
                Self::Corpus(CorpusScorer::new(model).length_normalized(true))
            }
            _ => Self::Rules(RuleScorer),
        }
    }

    /// Short label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rules(_) => "puzzle points",
            Self::Corpus(c) if c.length_normalized => "corpus relevance (per letter)",
            Self::Corpus(_) => "corpus relevance",
        }
    }
}

impl Scorer for ScoringStrategy {
    fn score(&self, word: &str, letters: &LetterSet) -> f64 {
        match self {
            Self::Rules(s) => s.score(word, letters),
            Self::Corpus(s) => s.score(word, letters),
        }
    }

    fn finalize(&self, results: &mut [ScoredWord]) {
        match self {
            Self::Rules(s) => s.finalize(results),
            Self::Corpus(s) => s.finalize(results),
        }
    }

    fn is_integral(&self) -> bool {
        match self {
            Self::Rules(s) => s.is_integral(),
            Self::Corpus(s) => s.is_integral(),
        }
    }
}
