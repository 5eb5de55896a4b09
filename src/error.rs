//! Error types shared by the solver and its presentation layers

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The dictionary file could not be opened or read
#[derive(Error, Debug)]
#[error("Failed to load dictionary '{}': {source}", path.display())]
pub struct DictionaryLoadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Malformed puzzle input, rejected before a query runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please provide exactly one center letter (got {0} characters)")]
    CenterLength(usize),

    #[error("Please provide exactly six other letters (got {0} characters)")]
    OtherLettersLength(usize),

    #[error("Please provide seven distinct letters including the center (got {0})")]
    PuzzleLetters(usize),

    #[error("'{0}' is not a letter from a to z")]
    NonAlphabetic(char),

    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Results could not be written to (or read back from) a delimited file
#[derive(Error, Debug)]
#[error("Failed to write CSV file '{}': {source}", path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: csv::Error,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    DictionaryLoad(#[from] DictionaryLoadError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Malformed CSV row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
