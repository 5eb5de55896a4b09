//! Word list loading utilities
//!
//! Reads plain-text dictionaries: one word per line, any case, blank lines ignored.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize dictionary text into a word list
///
/// Each line is trimmed and lowercased; blank lines are dropped. File order is kept.
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::parse_words;
///
/// let words = parse_words("Apple\n\n  banana \r\nEXAMPLE\n");
/// assert_eq!(words, vec!["apple", "banana", "example"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}
