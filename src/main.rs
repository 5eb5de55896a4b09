//! Spelling Bee Helper - CLI
//!
//! Full-screen form, prompt loop and one-shot modes over the same query engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use spelling_bee::{
    commands::{DEFAULT_TOP, SolveConfig, puzzle_from_letters, run_simple, solve_puzzle, top_words},
    core::{DEFAULT_DICTIONARY, QueryRequest, WordFilters},
    output::print_query_result,
    solver::{CorpusMode, CorpusScorer, FrequencyModel, Scorer, ScoringStrategy},
    wordlists::DictionaryStore,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Level, error};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling Bee solver with puzzle scoring, pangram detection and corpus-informed ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Scoring: rules (default), corpus, corpus-normalized
    #[arg(
        short,
        long,
        global = true,
        default_value = "rules",
        value_parser = ["rules", "corpus", "corpus-normalized"]
    )]
    scoring: String,

    /// Reference text for corpus scoring (default: built-in corpus)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// How corpus n-grams are counted: joined (default) or per-token
    #[arg(long, global = true, default_value = "joined", value_parser = ["joined", "per-token"])]
    corpus_mode: String,

    /// Weight of bigrams against trigrams in corpus scores (0.0 to 1.0)
    #[arg(long, global = true, default_value_t = 0.5)]
    weight: f64,

    /// Rescale corpus scores to 0-100 against the best word
    #[arg(long, global = true)]
    rescale: bool,

    /// Debug-level logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive form (default)
    Play,

    /// Simple prompt mode without the full-screen form
    Simple,

    /// Solve one puzzle and print the ranked words
    Solve {
        /// Center letter
        #[arg(short, long)]
        center: String,

        /// The six other letters
        #[arg(short, long)]
        others: String,

        /// Minimum word length
        #[arg(long, default_value_t = 4)]
        min: usize,

        /// Maximum word length (0 = no limit)
        #[arg(long, default_value_t = 0)]
        max: usize,

        /// Only keep words containing this substring
        #[arg(long, default_value = "")]
        contains: String,

        /// Export results to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Append summary rows to the CSV
        #[arg(long, requires = "csv")]
        summary: bool,
    },

    /// Rank a puzzle's words by corpus relevance and keep the best
    Top {
        /// All seven letters, center included
        #[arg(short, long)]
        letters: String,

        /// Center letter
        #[arg(short, long)]
        center: String,

        /// Number of words to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
        count: usize,
    },
}

impl Cli {
    fn corpus_needed(&self) -> bool {
        self.scoring != "rules" || matches!(self.command, Some(Commands::Top { .. }))
    }
}

fn init_logging(cli: &Cli, full_screen: bool) {
    if full_screen && !cli.verbose {
        return;
    }

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the corpus model once, with a spinner while it counts
fn build_model(cli: &Cli) -> Result<Arc<FrequencyModel>> {
    if !cli.corpus_needed() {
        return Ok(Arc::new(FrequencyModel::empty()));
    }

    let mode = CorpusMode::from_name(&cli.corpus_mode);
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message("Counting corpus n-grams...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let model = match &cli.corpus {
        Some(path) => FrequencyModel::load_or_empty(path, mode),
        None => FrequencyModel::reference(mode),
    };

    spinner.finish_and_clear();
    Ok(Arc::new(model))
}

fn build_scorer(cli: &Cli, model: Arc<FrequencyModel>) -> ScoringStrategy {
    match ScoringStrategy::from_name(&cli.scoring, model) {
        ScoringStrategy::Corpus(scorer) => {
            ScoringStrategy::Corpus(scorer.with_weight(cli.weight).rescaled(cli.rescale))
        }
        rules => rules,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let full_screen = matches!(cli.command, None | Some(Commands::Play));
    init_logging(&cli, full_screen);

    let model = build_model(&cli)?;
    let store = DictionaryStore::global();

    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli, model, store),
        Some(Commands::Simple) => {
            run_simple(&build_scorer(&cli, model), store)?;
            Ok(())
        }
        Some(Commands::Solve {
            center,
            others,
            min,
            max,
            contains,
            csv,
            summary,
        }) => {
            let mut request = QueryRequest::new(&cli.dictionary, center.as_str(), others.as_str());
            request.min_length = *min;
            request.max_length = *max;
            request.must_contain.clone_from(contains);

            let config = SolveConfig {
                request,
                csv_path: csv.clone(),
                include_summary: *summary,
            };
            run_solve_command(&config, build_scorer(&cli, model), store)
        }
        Some(Commands::Top {
            letters,
            center,
            count,
        }) => run_top_command(&cli, letters, center, *count, model, store),
    }
}

fn run_solve_command(
    config: &SolveConfig,
    scorer: ScoringStrategy,
    store: &DictionaryStore,
) -> Result<()> {
    let integral = scorer.is_integral();
    let solved = solve_puzzle(config, scorer, store)?;

    print_query_result(
        &solved.result,
        &config.request.dictionary_path,
        &solved.filters,
        integral,
    );

    // A failed export is reported; the printed results stand
    match solved.export(config) {
        Ok(Some(path)) => println!(
            "{}",
            format!("✓ Results exported to {}", path.display()).green()
        ),
        Ok(None) => {}
        Err(e) => {
            error!("{e}");
            eprintln!("{}", format!("❌ {e}").red());
        }
    }

    Ok(())
}

fn run_top_command(
    cli: &Cli,
    letters: &str,
    center: &str,
    count: usize,
    model: Arc<FrequencyModel>,
    store: &DictionaryStore,
) -> Result<()> {
    let puzzle = puzzle_from_letters(letters, center)?;
    let scorer = CorpusScorer::new(model)
        .with_weight(cli.weight)
        .length_normalized(cli.scoring == "corpus-normalized")
        .rescaled(cli.rescale);

    let dictionary = store.load_or_empty(&cli.dictionary);
    let result = top_words(&puzzle, scorer, &dictionary, count);

    println!(
        "\n{}",
        format!("Top {} words by corpus relevance", result.len())
            .bright_cyan()
            .bold()
    );
    print_query_result(&result, &cli.dictionary, &WordFilters::default(), false);
    Ok(())
}

fn run_play_command(
    cli: &Cli,
    model: Arc<FrequencyModel>,
    store: &'static DictionaryStore,
) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    let app = App::new(store, build_scorer(cli, model))
        .with_dictionary(&cli.dictionary.display().to_string());
    run_tui(app)
}
