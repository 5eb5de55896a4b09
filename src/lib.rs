//! Spelling Bee Helper
//!
//! Finds every dictionary word a Spelling Bee puzzle accepts, scores it with puzzle
//! points or corpus n-gram relevance, and ranks the results.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::{Puzzle, WordFilters};
//! use spelling_bee::solver::{QueryEngine, RuleScorer};
//!
//! let dictionary: Vec<String> = ["apple", "banana", "pale", "appeal"]
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//!
//! let puzzle = Puzzle::new("a", "elpxyz").unwrap();
//! let engine = QueryEngine::new(RuleScorer, &dictionary);
//! let result = engine.query(&puzzle, &WordFilters::default());
//!
//! assert_eq!(result.results[0].word, "appeal");
//! assert_eq!(result.statistics().total_words, 3);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Scoring and querying
pub mod solver;

// Dictionaries and the reference corpus
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and CSV export
pub mod output;

// Interactive TUI interface
pub mod interactive;
