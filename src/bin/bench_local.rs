//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of boards on *your* machine.
//! - Loads the word list once (and builds the prefix index once), then searches each board
//!   several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few found words:        `cargo run --bin bench_local --release -- -p 5`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Boards live in `get_cases()` below.
//! - Only `discover_words` is timed; validation and printing stay outside.
//! - One warm-up run per board is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordgrid::board::Board;
use wordgrid::solver::BoggleSolver;
use wordgrid::validation::{validate_board, ValidationPolicy};
use wordgrid::word_list;

/// Simple local benchmark runner: load word list once, time several boards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word, or word;score, per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Minimum score filter
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Number of repeats per board (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many found words per board (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: a board in text form.
#[derive(Clone)]
struct Case {
    board: &'static str,
}

/// Edit/add new boards here. The summary displays the board text as the "name".
fn get_cases() -> Vec<Case> {
    vec![
        Case { board: "c a t / r e d / o n e" },
        Case { board: "t r e st / qu i e t / a n d o / l e r m" },
        Case { board: "p e r t / l a t g / o i n e / d e r c" },
        Case { board: "a b c d e / f g h i j / k l m n o / p qu r st t / u v w x y" },
        Case { board: "e e e e / e e e e / e e e e / e e e e" },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_BOARD_LEN: usize = 48;

fn main() -> std::io::Result<()> {
    /// One row in the benchmark summary: (board text, median seconds, number of words).
    type SummaryRow = (String, f64, usize);

    let cli = Cli::parse();

    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let wl = word_list::WordList::load_from_path(&cli.word_list, cli.min_score)?;
    let mut solver = BoggleSolver::new(Board::default(), &wl.words);
    let load_secs = t_load.elapsed().as_secs_f64();
    eprintln!(
        "Loaded {} words ({} prefixes) in {:.3}s",
        wl.len(),
        solver.prefix_index().len(),
        load_secs
    );

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, case.board);

        let board: Board = match case.board.parse() {
            Ok(board) => board,
            Err(e) => {
                eprintln!("  ✗ Bad board: {}", e.display_detailed());
                continue;
            }
        };
        if let Err(e) = validate_board(&board, &ValidationPolicy::RECTANGULAR) {
            eprintln!("  ✗ Invalid board: {}", e.display_detailed());
            continue;
        }
        solver.set_board(board);

        // warm-up, untimed
        let _warmup = solver.discover_words();

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_words: Vec<String> = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_search = Instant::now();
            let words = black_box(&mut solver).discover_words();
            let search_secs = t_search.elapsed().as_secs_f64();

            times.push(search_secs);
            last_words = words;

            eprintln!(
                "  run {:>2}/{:>2}: {:.4}s ({} words)",
                rep + 1,
                cli.num_repeats,
                search_secs,
                last_words.len()
            );
        }

        let med = median(times);

        if cli.print_limit > 0 {
            last_words.sort();
            for word in last_words.iter().take(cli.print_limit) {
                println!("{}", word.to_uppercase());
            }
        }

        eprintln!(
            "  → median {:.4}s over {} run(s); last run found {} {}.",
            med,
            cli.num_repeats,
            last_words.len(),
            pluralizer(last_words.len(), "word".into(), None),
        );

        summary.push((case.board.to_string(), med, last_words.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_BOARD_LEN$} | {:>10} | {:>7}", "board", "median (s)", "# words");
    eprintln!("{:-<MAX_BOARD_LEN$}-+-{:-<10}-+-{:-<7}", "", "", "");
    for (board, med, num_words) in &summary {
        let display = if board.chars().count() > MAX_BOARD_LEN {
            // "- 1" for the "…"
            format!("{}…", board.chars().take(MAX_BOARD_LEN - 1).collect::<String>())
        } else {
            board.clone()
        };
        eprintln!("{display:<MAX_BOARD_LEN$} | {med:>10.4} | {num_words:>7}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}
