use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use wordgrid::board::Board;
use wordgrid::solver::{self, BoggleSolver};
use wordgrid::validation::ValidationPolicy;
use wordgrid::word_list;

/// Find every word in a word list that can be traced on a letter grid
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// The board: rows separated by '/', cells by spaces (e.g., "a b c / d qu e / f g st")
    board: String,

    /// Path to the word list file (one word, or word;score, per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Minimum score filter (only applies to word;score lines)
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Require the board to have as many rows as columns
    #[arg(long)]
    square: bool,

    /// Enable debug logging (same as setting WORDGRID_DEBUG)
    #[arg(short, long)]
    debug: bool,
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], printing any error before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    if let Err(e) = try_main(&cli) {
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordgrid CLI.
///
/// Steps:
/// 1. Parse the board text.
/// 2. Load the word list from disk, applying the minimum score filter.
/// 3. Validate and search the board.
/// 4. Print each word on stdout, diagnostics on stderr.
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let board: Board = cli.board.parse().map_err(|e: Box<wordgrid::errors::BoardError>| {
        solver::SolverError::InvalidBoard(e)
    })?;

    let t_load = Instant::now();
    let word_list = word_list::WordList::load_from_path(&cli.word_list, cli.min_score)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let policy = if cli.square {
        ValidationPolicy::SQUARE
    } else {
        ValidationPolicy::RECTANGULAR
    };

    let mut boggle = BoggleSolver::new(board, &word_list.words).with_policy(policy);
    log::debug!("Board {}x{}: {}", boggle.rows(), boggle.cols(), boggle.board());

    let result = boggle.solve()?;

    for word in &result.words {
        println!("{word}");
    }

    eprintln!(
        "Loaded {} words in {:.3}s; searched in {:.3}s ({} found).",
        word_list.len(),
        load_secs,
        result.elapsed.as_secs_f64(),
        result.words.len()
    );

    Ok(())
}
