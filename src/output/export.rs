//! Delimited-text export of results
//!
//! Layout: a `word,score,pangram` header, one row per ranked word with `Yes`/`No`
//! in the pangram column, and optionally a blank separator row followed by labelled
//! summary rows.

use crate::error::{Error, ExportError};
use crate::solver::QueryResult;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::info;

/// Column headers of the word rows
pub const HEADER: [&str; 3] = ["word", "score", "pangram"];

/// One word row read back from an export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub word: String,
    pub score: f64,
    pub pangram: bool,
}

/// Write results as CSV to any writer
///
/// Scores are written in their shortest exact form, so reading them back yields the
/// same values.
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_results<W: io::Write>(
    writer: W,
    result: &QueryResult,
    include_summary: bool,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    wtr.write_record(HEADER)?;
    for row in &result.results {
        let pangram = if result.is_pangram(&row.word) { "Yes" } else { "No" };
        let score = row.score.to_string();
        wtr.write_record([row.word.as_str(), score.as_str(), pangram])?;
    }

    if include_summary {
        let stats = result.statistics();
        wtr.write_record(std::iter::empty::<&str>())?;
        let summary = [
            ("Total Words", stats.total_words.to_string()),
            ("Number of Pangrams", stats.pangrams_count.to_string()),
            ("Average Word Length", format!("{:.2}", stats.avg_length)),
            ("Sum of All Scores", stats.total_points.to_string()),
        ];
        for (label, value) in &summary {
            wtr.write_record([*label, value.as_str()])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Export results to a CSV file
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be created or written.
pub fn export_csv(
    path: impl AsRef<Path>,
    result: &QueryResult,
    include_summary: bool,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let to_export_error = |source: csv::Error| ExportError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| to_export_error(e.into()))?;
    write_results(file, result, include_summary).map_err(to_export_error)?;

    info!(path = %path.display(), rows = result.len(), "results exported");
    Ok(())
}

/// Read the word rows of an export
///
/// Reading stops at the blank separator row (or any short row), so summary rows
/// are never mistaken for words.
///
/// # Errors
///
/// Returns an error if the CSV is unreadable or a word row has a non-numeric score.
pub fn read_results<R: io::Read>(reader: R) -> Result<Vec<ExportRow>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        if record.len() < HEADER.len() || record.iter().all(str::is_empty) {
            break;
        }

        let score = record[1].trim().parse().map_err(|_| Error::MalformedRow {
            row: idx + 2,
            reason: format!("score '{}' is not a number", &record[1]),
        })?;

        rows.push(ExportRow {
            word: record[0].to_string(),
            score,
            pangram: record[2].trim().eq_ignore_ascii_case("yes"),
        });
    }

    Ok(rows)
}

/// Read the word rows of an exported CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn import_csv(path: impl AsRef<Path>) -> Result<Vec<ExportRow>, Error> {
    let file = File::open(path)?;
    read_results(file)
}
