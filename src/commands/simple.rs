//! Simple interactive CLI mode
//!
//! Text prompt loop without the full-screen form. Every prompt shows its default
//! and an empty answer accepts it.

use crate::core::{DEFAULT_DICTIONARY, OTHER_LETTERS, Puzzle, QueryRequest, parse_length};
use crate::error::Error;
use crate::output::{export_csv, print_query_result};
use crate::solver::{QueryEngine, Scorer};
use crate::wordlists::DictionaryStore;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::error;

/// Default file name offered by the export prompt
pub const DEFAULT_EXPORT: &str = "results.csv";

/// Line-oriented prompt over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question, returning `None` once input is exhausted
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing fails.
    pub fn ask(&mut self, prompt: &str, default: &str) -> io::Result<Option<String>> {
        if default.is_empty() {
            write!(self.output, "{prompt}: ")?;
        } else {
            write!(self.output, "{prompt} [default: {default}]: ")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        Ok(Some(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        }))
    }

    /// Ask a yes/no question
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading or writing fails.
    pub fn confirm(&mut self, prompt: &str, default_yes: bool) -> io::Result<Option<bool>> {
        let default = if default_yes { "y" } else { "n" };
        let answer = self.ask(&format!("{prompt} (y/n)"), default)?;
        Ok(answer.map(|a| a.to_lowercase().starts_with('y')))
    }

    /// Print a message on its own line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

/// Collect the fields of one query, re-asking after malformed answers
///
/// `previous` supplies the defaults shown at each prompt, except the substring
/// filter: a blank answer there always means no substring. Returns `None` if input
/// ends before the request is complete.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub fn read_request<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    previous: &QueryRequest,
) -> io::Result<Option<QueryRequest>> {
    let previous_path = previous.dictionary_path.display().to_string();
    let Some(dictionary) = prompter.ask("Enter path to dictionary file", &previous_path)? else {
        return Ok(None);
    };

    let (center, other_letters) = loop {
        let Some(center) = prompter.ask("Enter the center letter (required)", &previous.center)?
        else {
            return Ok(None);
        };
        let Some(others) = prompter.ask(
            &format!("Enter the other {OTHER_LETTERS} letters (required)"),
            &previous.other_letters,
        )?
        else {
            return Ok(None);
        };

        match Puzzle::new(&center, &others) {
            Ok(_) => break (center.to_lowercase(), others.to_lowercase()),
            Err(e) => prompter.say(&format!("❌ {e}"))?,
        }
    };

    let Some(min_length) = ask_length(
        prompter,
        "Minimum word length?",
        "min_length",
        previous.min_length,
    )?
    else {
        return Ok(None);
    };
    let Some(max_length) = ask_length(
        prompter,
        "Maximum word length? [0 = no limit]",
        "max_length",
        previous.max_length,
    )?
    else {
        return Ok(None);
    };
    let Some(must_contain) = prompter.ask("Must contain substring (optional)", "")? else {
        return Ok(None);
    };

    Ok(Some(QueryRequest {
        dictionary_path: PathBuf::from(dictionary),
        center,
        other_letters,
        min_length,
        max_length,
        must_contain: must_contain.to_lowercase(),
    }))
}

fn ask_length<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
    field: &'static str,
    default: usize,
) -> io::Result<Option<usize>> {
    loop {
        let Some(answer) = prompter.ask(prompt, &default.to_string())? else {
            return Ok(None);
        };
        match parse_length(field, &answer, default) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => prompter.say(&format!("❌ {e}"))?,
        }
    }
}

/// Run the prompt loop over arbitrary input and output
///
/// Results are printed to stdout; prompts and messages go to `output`. Returns the
/// number of queries run.
///
/// # Errors
///
/// Returns an error if reading input or writing prompts fails. Failed exports are
/// reported and the session continues.
pub fn run_session<S, R, W>(
    scorer: &S,
    store: &DictionaryStore,
    input: R,
    output: W,
) -> Result<usize, Error>
where
    S: Scorer + Clone,
    R: BufRead,
    W: Write,
{
    let mut prompter = Prompter::new(input, output);
    let mut request = QueryRequest::new(DEFAULT_DICTIONARY, "", "");
    let mut queries = 0;

    loop {
        let Some(next) = read_request(&mut prompter, &request)? else {
            break;
        };
        request = next;

        // Validated while reading, so this only fails if the request was altered
        let puzzle = request.puzzle()?;
        let filters = request.filters();
        let dictionary = store.load_or_empty(&request.dictionary_path);
        let engine = QueryEngine::new(scorer.clone(), &dictionary);
        let result = engine.query(&puzzle, &filters);
        queries += 1;

        print_query_result(
            &result,
            &request.dictionary_path,
            &filters,
            scorer.is_integral(),
        );

        if prompter.confirm("Export to CSV?", false)? == Some(true) {
            let Some(path) = prompter.ask("Enter CSV file name", DEFAULT_EXPORT)? else {
                break;
            };
            match export_csv(&path, &result, true) {
                Ok(()) => prompter.say(&format!("✓ Results exported to {path}"))?,
                Err(e) => {
                    error!("{e}");
                    prompter.say(&format!("❌ {e}"))?;
                }
            }
        }

        if prompter.confirm("Do you want to run another query?", true)? != Some(true) {
            break;
        }
    }

    prompter.say(&format!("\n{}", "Goodbye!".bright_green().bold()))?;
    Ok(queries)
}

/// Run the simple interactive CLI mode on the terminal
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: Scorer + Clone>(scorer: &S, store: &DictionaryStore) -> Result<(), Error> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Spelling Bee - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let stdin = io::stdin();
    run_session(scorer, store, stdin.lock(), io::stdout())?;
    Ok(())
}
