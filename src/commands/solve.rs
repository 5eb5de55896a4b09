//! One-shot query command
//!
//! Runs a single request against a cached dictionary and hands back the ranked
//! words together with the filters that produced them.

use crate::core::{QueryRequest, WordFilters};
use crate::error::{ExportError, InputError};
use crate::solver::{QueryEngine, QueryResult, Scorer, Statistics};
use crate::output::export_csv;
use crate::wordlists::DictionaryStore;
use std::path::{Path, PathBuf};

/// Configuration for a one-shot query
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    pub request: QueryRequest,
    /// Write results here after they are shown
    pub csv_path: Option<PathBuf>,
    /// Append summary rows to the CSV
    pub include_summary: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(request: QueryRequest) -> Self {
        Self {
            request,
            ..Self::default()
        }
    }
}

/// Result of a one-shot query
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub result: QueryResult,
    pub statistics: Statistics,
    pub filters: WordFilters,
}

impl SolveResult {
    /// Write the results to the configured CSV file, if there is one
    ///
    /// Returns the path written to, or `None` when no export was requested.
    ///
    /// # Errors
    ///
    /// Returns an `ExportError` if the file cannot be written. The results are
    /// left as they were.
    pub fn export<'c>(&self, config: &'c SolveConfig) -> Result<Option<&'c Path>, ExportError> {
        let Some(path) = config.csv_path.as_deref() else {
            return Ok(None);
        };
        export_csv(path, &self.result, config.include_summary)?;
        Ok(Some(path))
    }
}

/// Run one query
///
/// An unreadable dictionary is logged by the store and yields an empty result set.
///
/// # Errors
///
/// Returns an `InputError` if the center or other letters are malformed. The
/// dictionary is not touched in that case.
pub fn solve_puzzle<S: Scorer>(
    config: &SolveConfig,
    scorer: S,
    store: &DictionaryStore,
) -> Result<SolveResult, InputError> {
    let puzzle = config.request.puzzle()?;
    let filters = config.request.filters();

    let dictionary = store.load_or_empty(&config.request.dictionary_path);
    let engine = QueryEngine::new(scorer, &dictionary);
    let result = engine.query(&puzzle, &filters);
    let statistics = result.statistics();

    Ok(SolveResult {
        result,
        statistics,
        filters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::RuleScorer;
    use std::fs;

    fn write_dictionary(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("words.txt");
        fs::write(&path, "Apple\nbanana\n\nexample\nflying\npangram\nexpel\naxle\n").unwrap();
        path
    }

    #[test]
    fn solve_returns_ranked_words_and_stats() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dictionary(&dir);
        let store = DictionaryStore::new();

        let config = SolveConfig::new(QueryRequest::new(&path, "a", "elpxyz"));
        let solved = solve_puzzle(&config, RuleScorer, &store).unwrap();

        let words: Vec<&str> = solved.result.results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "axle"]);
        assert_eq!(solved.statistics.total_words, 2);
        assert!((solved.statistics.total_points - 3.0).abs() < f64::EPSILON);
        assert!(store.is_cached(&path));
    }

    #[test]
    fn must_contain_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dictionary(&dir);
        let store = DictionaryStore::new();

        let mut request = QueryRequest::new(&path, "e", "axlpyz");
        request.must_contain = "EX".to_string();
        let solved = solve_puzzle(&SolveConfig::new(request), RuleScorer, &store).unwrap();

        assert_eq!(solved.filters.must_contain, "ex");
        assert!(!solved.result.is_empty());
        assert!(solved.result.results.iter().all(|r| r.word.contains("ex")));
    }

    #[test]
    fn missing_dictionary_gives_empty_result() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new();
        let config = SolveConfig::new(QueryRequest::new(
            dir.path().join("absent.txt"),
            "a",
            "elpxyz",
        ));

        let solved = solve_puzzle(&config, RuleScorer, &store).unwrap();
        assert!(solved.result.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn export_writes_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dictionary(&dir);
        let store = DictionaryStore::new();
        let csv = dir.path().join("out.csv");

        let mut config = SolveConfig::new(QueryRequest::new(&path, "a", "elpxyz"));
        let solved = solve_puzzle(&config, RuleScorer, &store).unwrap();
        assert_eq!(solved.export(&config).unwrap(), None);

        config.csv_path = Some(csv.clone());
        assert_eq!(solved.export(&config).unwrap(), Some(csv.as_path()));
        assert_eq!(crate::output::import_csv(&csv).unwrap().len(), 2);
    }

    #[test]
    fn failed_export_keeps_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dictionary(&dir);
        let store = DictionaryStore::new();

        let mut config = SolveConfig::new(QueryRequest::new(&path, "a", "elpxyz"));
        config.csv_path = Some(dir.path().join("missing").join("out.csv"));
        let solved = solve_puzzle(&config, RuleScorer, &store).unwrap();

        let err = solved.export(&config).unwrap_err();
        assert!(err.to_string().contains("out.csv"));
        assert_eq!(solved.result.len(), 2);
    }

    #[test]
    fn bad_letters_are_rejected_before_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dictionary(&dir);
        let store = DictionaryStore::new();

        let config = SolveConfig::new(QueryRequest::new(&path, "ae", "lpxyz"));
        let err = solve_puzzle(&config, RuleScorer, &store).unwrap_err();

        assert_eq!(err, InputError::CenterLength(2));
        assert!(!store.is_cached(&path));
    }
}
