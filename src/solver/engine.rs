//! Main Spelling Bee query interface

use super::ranking::{ScoredWord, rank};
use super::scoring::Scorer;
use super::statistics::Statistics;
use crate::core::{LetterSet, Puzzle, QueryRequest, WordFilters, is_pangram, is_valid};
use crate::error::InputError;
use rayon::prelude::*;
use tracing::debug;

/// Ranked words for one puzzle, with the letter set that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub results: Vec<ScoredWord>,
    pub letters: LetterSet,
}

impl QueryResult {
    /// Summary of the result set
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::summarize(&self.results, &self.letters)
    }

    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        is_pangram(word, &self.letters)
    }

    /// Keep only the first `n` ranked words
    pub fn truncate(&mut self, n: usize) {
        self.results.truncate(n);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Query engine
///
/// Filters a dictionary against a puzzle, scores the survivors with one scorer and
/// ranks them.
pub struct QueryEngine<'a, S: Scorer> {
    scorer: S,
    dictionary: &'a [String],
}

impl<'a, S: Scorer> QueryEngine<'a, S> {
    /// Create a new engine
    ///
    /// # Parameters
    /// - `scorer`: The scoring scheme applied to every accepted word
    /// - `dictionary`: Lowercase candidate words in file order
    pub const fn new(scorer: S, dictionary: &'a [String]) -> Self {
        Self { scorer, dictionary }
    }

    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [String] {
        self.dictionary
    }

    /// Dictionary words that satisfy the puzzle rules and the query filters
    ///
    /// Words are returned in dictionary order.
    #[must_use]
    pub fn filter_candidates(&self, puzzle: &Puzzle, filters: &WordFilters) -> Vec<&'a str> {
        let center = puzzle.center();
        let letters = puzzle.letters();

        self.dictionary
            .par_iter()
            .map(String::as_str)
            .filter(|word| is_valid(word, center, &letters) && filters.accepts(word))
            .collect()
    }

    /// Find, score and rank every accepted word
    #[must_use]
    pub fn query(&self, puzzle: &Puzzle, filters: &WordFilters) -> QueryResult {
        let letters = puzzle.letters();
        let candidates = self.filter_candidates(puzzle, filters);

        let mut results: Vec<ScoredWord> = candidates
            .par_iter()
            .map(|&word| ScoredWord::new(word, self.scorer.score(word, &letters)))
            .collect();

        self.scorer.finalize(&mut results);
        rank(&mut results);

        debug!(
            center = %puzzle.center(),
            letters = %letters,
            dictionary = self.dictionary.len(),
            matches = results.len(),
            "query complete"
        );

        QueryResult { results, letters }
    }

    /// Validate a request and run it
    ///
    /// The dictionary path in the request is ignored here; the engine already owns
    /// its dictionary.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` if the request letters are malformed.
    pub fn run(&self, request: &QueryRequest) -> Result<QueryResult, InputError> {
        let puzzle = request.puzzle()?;
        Ok(self.query(&puzzle, &request.filters()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{CorpusMode, CorpusScorer, FrequencyModel, RuleScorer, is_ranked};
    use std::sync::Arc;

    fn dictionary() -> Vec<String> {
        [
            "apple", "banana", "example", "flying", "pangram", "pale", "leap", "peal",
            "appeal", "axle", "ape", "zeal", "apex",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
    }

    fn words(result: &QueryResult) -> Vec<&str> {
        result.results.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn query_finds_valid_words() {
        let dict = dictionary();
        let engine = QueryEngine::new(RuleScorer, &dict);
        let puzzle = Puzzle::new("a", "elpxyz").unwrap();

        let result = engine.query(&puzzle, &WordFilters::default());

        assert!(words(&result).contains(&"apple"));
        assert!(!words(&result).contains(&"banana"));
        assert!(!words(&result).contains(&"ape"));
        assert!(!words(&result).contains(&"example")); // 'm' not allowed
        assert_eq!(result.letters.len(), 7);
    }

    #[test]
    fn query_ranks_results() {
        let dict = dictionary();
        let engine = QueryEngine::new(RuleScorer, &dict);
        let puzzle = Puzzle::new("a", "elpxyz").unwrap();

        let result = engine.query(&puzzle, &WordFilters::default());

        assert!(is_ranked(&result.results));
        assert_eq!(
            words(&result),
            vec!["appeal", "apple", "apex", "axle", "leap", "pale", "peal", "zeal"]
        );
    }

    #[test]
    fn apple_scores_two_points() {
        let dict = dictionary();
        let engine = QueryEngine::new(RuleScorer, &dict);
        let puzzle = Puzzle::new("a", "elpxyz").unwrap();

        let result = engine.query(&puzzle, &WordFilters::default());
        let apple = result.results.iter().find(|r| r.word == "apple").unwrap();
        assert!((apple.score - 2.0).abs() < f64::EPSILON);
        assert!(!result.is_pangram("apple"));
    }

    #[test]
    fn filters_apply() {
        let dict = dictionary();
        let engine = QueryEngine::new(RuleScorer, &dict);
        let puzzle = Puzzle::new("a", "elpxyz").unwrap();

        let result = engine.query(&puzzle, &WordFilters::new(5, 5, ""));
        assert_eq!(words(&result), vec!["apple"]);

        let result = engine.query(&puzzle, &WordFilters::new(4, 0, "EA"));
        assert_eq!(words(&result), vec!["appeal", "leap", "peal", "zeal"]);
    }

    #[test]
    fn filter_candidates_keeps_dictionary_order() {
        let dict = dictionary();
        let engine = QueryEngine::new(RuleScorer, &dict);
        let puzzle = Puzzle::new("a", "elpxyz").unwrap();

        let candidates = engine.filter_candidates(&puzzle, &WordFilters::default());
        assert_eq!(
            candidates,
            vec!["apple", "pale", "leap", "peal", "appeal", "axle", "zeal", "apex"]
        );
    }

    #[test]
    fn empty_dictionary_gives_empty_result() {
        let dict: Vec<String> = Vec::new();
        let engine = QueryEngine::new(RuleScorer, &dict);
        let puzzle = Puzzle::new("a", "elpxyz").unwrap();

        let result = engine.query(&puzzle, &WordFilters::default());
        assert!(result.is_empty());
        assert_eq!(result.statistics().total_words, 0);
    }

    #[test]
    fn run_rejects_bad_input() {
        let dict = dictionary();
        let engine = QueryEngine::new(RuleScorer, &dict);
        let request = QueryRequest::new("words.txt", "a", "elp");

        assert_eq!(
            engine.run(&request),
            Err(InputError::OtherLettersLength(3))
        );
    }

    #[test]
    fn corpus_scoring_with_rescale() {
        let dict = dictionary();
        let model = Arc::new(FrequencyModel::build(["apple", "apple", "pale"], CorpusMode::PerToken));
        let engine = QueryEngine::new(CorpusScorer::new(model).rescaled(true), &dict);
        let puzzle = Puzzle::new("a", "elpxyz").unwrap();

        let result = engine.query(&puzzle, &WordFilters::default());
        assert!(is_ranked(&result.results));
        assert_eq!(result.results[0].word, "apple");
        assert!((result.results[0].score - 100.0).abs() < 1e-9);
        assert!(result.results.iter().all(|r| (0.0..=100.0).contains(&r.score)));
    }

    #[test]
    fn corpus_scoring_with_empty_model_is_all_zero() {
        let dict = dictionary();
        let model = Arc::new(FrequencyModel::empty());
        let engine = QueryEngine::new(CorpusScorer::new(model).rescaled(true), &dict);
        let puzzle = Puzzle::new("a", "elpxyz").unwrap();

        let result = engine.query(&puzzle, &WordFilters::default());
        assert!(!result.is_empty());
        assert!(result.results.iter().all(|r| r.score == 0.0));
        // All scores tie, so longest words lead
        assert_eq!(result.results[0].word, "appeal");
    }
}
