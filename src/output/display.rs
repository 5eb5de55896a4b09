//! Display functions for query results

use super::formatters::{
    create_progress_bar, format_score, letters_label, max_length_label, must_contain_label,
    pangram_flag,
};
use crate::core::WordFilters;
use crate::solver::{QueryResult, Statistics};
use colored::Colorize;
use std::path::Path;

const RULE_WIDTH: usize = 60;
const WORD_COLUMN: usize = 24;

/// Print the parameters a query ran with
pub fn print_query_header(result: &QueryResult, dictionary: &Path, filters: &WordFilters) {
    println!("\n{}", "═".repeat(RULE_WIDTH).bright_yellow());
    println!(
        "{} {}",
        "Letters Used     :".bold(),
        letters_label(&result.letters)
    );
    println!("{} {}", "Dictionary       :".bold(), dictionary.display());
    println!("{} {}", "Min Word Length  :".bold(), filters.min_length);
    println!(
        "{} {}",
        "Max Word Length  :".bold(),
        max_length_label(filters.max_length)
    );
    println!(
        "{} {}",
        "Must Contain     :".bold(),
        must_contain_label(&filters.must_contain)
    );
    println!("{}", "═".repeat(RULE_WIDTH).bright_yellow());
}

/// Print the summary block
pub fn print_statistics(stats: &Statistics, integral: bool) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Total Words:          {}", stats.total_words);
    println!(
        "   Number of Pangrams:   {}",
        stats.pangrams_count.to_string().bright_green()
    );
    println!("   Average Word Length:  {:.2}", stats.avg_length);
    println!(
        "   Sum of All Scores:    {}",
        format_score(stats.total_points, integral).bright_yellow()
    );
}

/// Print the ranked results table
///
/// Each row carries a bar scaled against the top score, so the spread of a corpus
/// ranking is visible at a glance.
pub fn print_results_table(result: &QueryResult, integral: bool) {
    if result.is_empty() {
        println!("\n{}", "No words matched this puzzle.".yellow());
        return;
    }

    let top = result.results.first().map_or(0.0, |r| r.score);

    println!(
        "\n   {:<width$} {:>8}  {:<8} ",
        "Word".bold(),
        "Score".bold(),
        "Pangram?".bold(),
        width = WORD_COLUMN
    );
    println!("   {}", "─".repeat(RULE_WIDTH - 3).bright_black());

    for row in &result.results {
        let pangram = result.is_pangram(&row.word);
        let word = if pangram {
            row.word.bright_green().bold()
        } else {
            row.word.cyan()
        };
        println!(
            "   {:<width$} {:>8}  {:<8} {}",
            word,
            format_score(row.score, integral).magenta(),
            pangram_flag(pangram).green(),
            create_progress_bar(row.score, top, 12).bright_black(),
            width = WORD_COLUMN
        );
    }
}

/// Print a full report: header, statistics and table
pub fn print_query_result(
    result: &QueryResult,
    dictionary: &Path,
    filters: &WordFilters,
    integral: bool,
) {
    print_query_header(result, dictionary, filters);
    print_statistics(&result.statistics(), integral);
    print_results_table(result, integral);
    println!();
}
