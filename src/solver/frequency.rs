//! Corpus letter n-gram frequencies
//!
//! Bigram and trigram occurrence counts taken from a reference text. The model is
//! built once and is read-only afterwards.

use crate::wordlists::REFERENCE_CORPUS;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fs;
use std::hash::Hash;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// How corpus tokens are turned into n-gram windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorpusMode {
    /// Tokens are joined with single spaces and counted as one text, so windows
    /// may span a word boundary (e.g. `"e t"`)
    #[default]
    Joined,
    /// Each token is counted on its own and the counts are summed
    PerToken,
}

impl CorpusMode {
    /// Create a mode from its name
    ///
    /// Supported names: "joined", "per-token". Defaults to joined if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "per-token" | "per-word" | "token" => Self::PerToken,
            _ => Self::Joined,
        }
    }
}

/// Bigram and trigram counts over lowercase `a..=z` text
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    bigrams: FxHashMap<[u8; 2], u64>,
    trigrams: FxHashMap<[u8; 3], u64>,
}

impl FrequencyModel {
    /// A model with no counts; every lookup yields 0
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Count n-grams over corpus tokens
    ///
    /// Text is lowercased and every character outside `a..=z` and whitespace is
    /// removed before counting.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::solver::{CorpusMode, FrequencyModel};
    ///
    /// let model = FrequencyModel::build(["Apple", "pie"], CorpusMode::Joined);
    /// assert_eq!(model.bigram_score("pp"), 1);
    /// // joined text keeps the space, so windows cross token boundaries
    /// assert_eq!(model.bigram_score("e "), 1);
    /// assert_eq!(model.bigram_score("ep"), 0);
    /// assert_eq!(model.trigram_score("app"), 1);
    /// ```
    pub fn build<I, S>(tokens: I, mode: CorpusMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let model = match mode {
            CorpusMode::Joined => {
                let joined = tokens
                    .into_iter()
                    .map(|t| t.as_ref().to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                let text = clean(&joined);
                Self {
                    bigrams: count_windows(text.as_bytes()),
                    trigrams: count_windows(text.as_bytes()),
                }
            }
            CorpusMode::PerToken => {
                let cleaned: Vec<String> = tokens.into_iter().map(|t| clean(t.as_ref())).collect();
                Self {
                    bigrams: count_token_windows(&cleaned),
                    trigrams: count_token_windows(&cleaned),
                }
            }
        };

        info!(
            bigrams = model.bigrams.len(),
            trigrams = model.trigrams.len(),
            ?mode,
            "frequency model built"
        );
        model
    }

    /// Build from the reference corpus compiled into the binary
    #[must_use]
    pub fn reference(mode: CorpusMode) -> Self {
        Self::build(
            REFERENCE_CORPUS.iter().flat_map(|line| line.split_whitespace()),
            mode,
        )
    }

    /// Build from a text file, splitting it on whitespace
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, mode: CorpusMode) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::build(text.split_whitespace(), mode))
    }

    /// Build from a text file, degrading to the empty model if it is unavailable
    pub fn load_or_empty<P: AsRef<Path>>(path: P, mode: CorpusMode) -> Self {
        let path = path.as_ref();
        Self::from_file(path, mode).unwrap_or_else(|e| {
            warn!(
                "Corpus '{}' unavailable ({e}); corpus scores will be 0",
                path.display()
            );
            Self::empty()
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bigrams.is_empty() && self.trigrams.is_empty()
    }

    /// Number of distinct bigrams seen
    #[must_use]
    pub fn distinct_bigrams(&self) -> usize {
        self.bigrams.len()
    }

    /// Number of distinct trigrams seen
    #[must_use]
    pub fn distinct_trigrams(&self) -> usize {
        self.trigrams.len()
    }

    /// Sum of corpus counts for every overlapping bigram of `word`
    #[must_use]
    pub fn bigram_score(&self, word: &str) -> u64 {
        window_score(&self.bigrams, word)
    }

    /// Sum of corpus counts for every overlapping trigram of `word`
    #[must_use]
    pub fn trigram_score(&self, word: &str) -> u64 {
        window_score(&self.trigrams, word)
    }

    /// Weighted blend: `bigram * weight + trigram * (1 - weight)`
    #[must_use]
    pub fn combined_score(&self, word: &str, weight: f64) -> f64 {
        self.bigram_score(word) as f64 * weight + self.trigram_score(word) as f64 * (1.0 - weight)
    }
}

/// Lowercase and keep only `a..=z` plus whitespace (normalized to a space)
fn clean(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_lowercase() {
                Some(c)
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect()
}

fn count_windows<const N: usize>(bytes: &[u8]) -> FxHashMap<[u8; N], u64> {
    bytes
        .par_windows(N)
        .fold(FxHashMap::default, |mut counts, window| {
            if let Ok(key) = <[u8; N]>::try_from(window) {
                *counts.entry(key).or_insert(0) += 1;
            }
            counts
        })
        .reduce(FxHashMap::default, merge_counts)
}

fn count_token_windows<const N: usize>(tokens: &[String]) -> FxHashMap<[u8; N], u64> {
    tokens
        .par_iter()
        .fold(FxHashMap::default, |mut counts, token| {
            for window in token.as_bytes().windows(N) {
                if let Ok(key) = <[u8; N]>::try_from(window) {
                    *counts.entry(key).or_insert(0) += 1;
                }
            }
            counts
        })
        .reduce(FxHashMap::default, merge_counts)
}

fn merge_counts<K: Eq + Hash>(
    mut left: FxHashMap<K, u64>,
    right: FxHashMap<K, u64>,
) -> FxHashMap<K, u64> {
    if left.len() < right.len() {
        return merge_counts(right, left);
    }
    for (key, count) in right {
        *left.entry(key).or_insert(0) += count;
    }
    left
}

fn window_score<const N: usize>(counts: &FxHashMap<[u8; N], u64>, word: &str) -> u64 {
    word.as_bytes()
        .windows(N)
        .filter_map(|window| <[u8; N]>::try_from(window).ok())
        .map(|key| counts.get(&key).copied().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_non_letters() {
        assert_eq!(clean("Mr. Bennet's\tdog!"), "mr bennets dog");
        assert_eq!(clean("café"), "caf");
    }

    #[test]
    fn joined_counts_cross_word_boundaries() {
        let model = FrequencyModel::build(["ab", "ba"], CorpusMode::Joined);
        // "ab ba": ab, "b ", " b", ba
        assert_eq!(model.distinct_bigrams(), 4);
        assert_eq!(model.bigram_score("ab"), 1);
        assert_eq!(model.bigram_score("ba"), 1);
        // "ab ", "b b"... trigrams: "ab ", "b b", " ba"
        assert_eq!(model.distinct_trigrams(), 3);
    }

    #[test]
    fn boundary_windows_keep_the_space() {
        let joined = FrequencyModel::build(["Apple", "pie"], CorpusMode::Joined);
        assert_eq!(joined.bigram_score("e "), 1);
        assert_eq!(joined.bigram_score("ep"), 0);
        assert_eq!(joined.trigram_score("e p"), 1);

        let per_token = FrequencyModel::build(["Apple", "pie"], CorpusMode::PerToken);
        assert_eq!(per_token.bigram_score("e "), 0);
    }

    #[test]
    fn per_token_counts_stay_inside_words() {
        let model = FrequencyModel::build(["ab", "ba"], CorpusMode::PerToken);
        assert_eq!(model.distinct_bigrams(), 2);
        assert_eq!(model.distinct_trigrams(), 0);
        assert_eq!(model.bigram_score("abab"), 3); // ab + ba + ab
    }

    #[test]
    fn repeated_ngrams_accumulate() {
        let model = FrequencyModel::build(["the", "then", "there"], CorpusMode::PerToken);
        assert_eq!(model.bigram_score("th"), 3);
        assert_eq!(model.trigram_score("the"), 3);
        assert_eq!(model.trigram_score("her"), 1);
    }

    #[test]
    fn unknown_ngrams_score_zero() {
        let model = FrequencyModel::build(["apple"], CorpusMode::Joined);
        assert_eq!(model.bigram_score("zz"), 0);
        assert_eq!(model.trigram_score("xyz"), 0);
        assert_eq!(model.bigram_score("a"), 0);
    }

    #[test]
    fn combined_score_weights() {
        let model = FrequencyModel::build(["apple"], CorpusMode::PerToken);
        // bigrams of "apple": ap, pp, pl, le = 4; trigrams: app, ppl, ple = 3
        assert_eq!(model.bigram_score("apple"), 4);
        assert_eq!(model.trigram_score("apple"), 3);
        assert!((model.combined_score("apple", 0.5) - 3.5).abs() < f64::EPSILON);
        assert!((model.combined_score("apple", 1.0) - 4.0).abs() < f64::EPSILON);
        assert!((model.combined_score("apple", 0.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_model_scores_zero() {
        let model = FrequencyModel::empty();
        assert!(model.is_empty());
        assert_eq!(model.bigram_score("apple"), 0);
        assert!(model.combined_score("apple", 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn non_ascii_words_do_not_panic() {
        let model = FrequencyModel::build(["cafe"], CorpusMode::Joined);
        assert_eq!(model.bigram_score("café"), 2); // ca, af
    }

    #[test]
    fn reference_corpus_has_counts() {
        let model = FrequencyModel::reference(CorpusMode::Joined);
        assert!(!model.is_empty());
        assert!(model.bigram_score("th") > 0);
    }

    #[test]
    fn missing_corpus_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let model = FrequencyModel::load_or_empty(dir.path().join("none.txt"), CorpusMode::Joined);
        assert!(model.is_empty());
    }

    #[test]
    fn from_file_reads_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "Apple pie.\nApple tart!").unwrap();

        let model = FrequencyModel::from_file(&path, CorpusMode::PerToken).unwrap();
        assert_eq!(model.trigram_score("app"), 2);
    }

    #[test]
    fn corpus_mode_from_name() {
        assert_eq!(CorpusMode::from_name("per-token"), CorpusMode::PerToken);
        assert_eq!(CorpusMode::from_name("joined"), CorpusMode::Joined);
        assert_eq!(CorpusMode::from_name("unknown"), CorpusMode::Joined);
    }
}
