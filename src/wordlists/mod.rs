//! Word lists and reference text
//!
//! Dictionary loading with a per-path cache, plus the reference corpus compiled
//! into the binary.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{REFERENCE_CORPUS, REFERENCE_CORPUS_LINES};
pub use store::{Dictionary, DictionaryStore};
