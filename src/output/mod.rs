//! Terminal output and file export
//!
//! Display utilities for query results, plus CSV export of ranked words.

pub mod display;
pub mod export;
pub mod formatters;

pub use display::{print_query_header, print_query_result, print_results_table, print_statistics};
pub use export::{ExportRow, export_csv, import_csv, read_results, write_results};
