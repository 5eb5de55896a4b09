//! Formatting utilities for terminal output

use crate::core::LetterSet;

/// Format a score: whole numbers for puzzle points, two decimals otherwise
#[must_use]
pub fn format_score(score: f64, integral: bool) -> String {
    if integral {
        format!("{score:.0}")
    } else {
        format!("{score:.2}")
    }
}

/// Pangram column text for on-screen tables
#[must_use]
pub const fn pangram_flag(is_pangram: bool) -> &'static str {
    if is_pangram { "Yes" } else { "" }
}

/// Letters in alphabetical order with the center called out
#[must_use]
pub fn letters_label(letters: &LetterSet) -> String {
    format!("{letters} (Center = '{}')", letters.center())
}

/// Maximum length, with 0 shown as unbounded
#[must_use]
pub fn max_length_label(max_length: usize) -> String {
    if max_length == 0 {
        "No limit".to_string()
    } else {
        max_length.to_string()
    }
}

/// Required substring, or "None"
#[must_use]
pub fn must_contain_label(must_contain: &str) -> String {
    if must_contain.is_empty() {
        "None".to_string()
    } else {
        format!("'{must_contain}'")
    }
}

/// Hive line: center letter in brackets followed by the outer letters
#[must_use]
pub fn hive_label(center: char, outer: &[char]) -> String {
    let mut out = format!("[{}]", center.to_ascii_uppercase());
    for &c in outer {
        out.push(' ');
        out.push(c.to_ascii_uppercase());
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || !value.is_finite() {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value.max(0.0) / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
