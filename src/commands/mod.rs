//! Command implementations

pub mod simple;
pub mod solve;
pub mod top;

pub use simple::{DEFAULT_EXPORT, run_session, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_puzzle};
pub use top::{DEFAULT_TOP, puzzle_from_letters, top_words};
