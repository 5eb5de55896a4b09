//! Spelling Bee solving
//!
//! Corpus frequencies, scoring schemes, ranking, the query engine and result
//! statistics.

mod engine;
pub mod frequency;
pub mod ranking;
pub mod scoring;
mod statistics;

pub use engine::{QueryEngine, QueryResult};
pub use frequency::{CorpusMode, FrequencyModel};
pub use ranking::{ScoredWord, compare, is_ranked, normalize_scores, rank};
pub use scoring::{
    CorpusScorer, DEFAULT_BIGRAM_WEIGHT, PANGRAM_BONUS, RuleScorer, Scorer, ScoringStrategy,
};
pub use statistics::Statistics;
