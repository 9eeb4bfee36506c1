//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `BoardError` and `SolverError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordgrid::errors::BoardError;
use wordgrid::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            let code = error.code();
            let description = error.description();
            let details = error.details();
            let help = error.help();

            println!("### {}: {}\n", code, description);
            println!("**Details:** {}\n", details);

            if let Some(help_text) = help {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `BoardError` variants for documentation
fn all_board_error_variants() -> Vec<BoardError> {
    vec![
        BoardError::Malformed { near: "1 / c d".to_string() },
        BoardError::EmptyBoard,
        BoardError::RaggedRow { row: 2, expected: 4, found: 3 },
        BoardError::NotSquare { rows: 3, cols: 4 },
        BoardError::IllegalFace { row: 0, col: 1, face: "q".to_string() },
    ]
}

/// Helper to create all `SolverError` variants for documentation
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::InvalidBoard(Box::new(BoardError::RaggedRow { row: 1, expected: 2, found: 1 })),
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Solver Errors (S001)](#solver-errors)");
    println!("- [Board Errors (B001–B005)](#board-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    generate_solver_error_docs();
    generate_board_error_docs();

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: S001");
    println!("  caused by: Cell (0, 1) holds \"q\", which is not a legal die face (B005)");
    println!("Use 'qu' instead of 'q' and 'st' instead of 's'");
    println!("```\n");
    println!("1. Note the error code (e.g., `B005`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");

    println!("## Error Display Formats\n");
    println!("Errors are displayed in two formats:\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}

fn generate_solver_error_docs() {
    println!("## Solver Errors\n");
    println!("Top-level errors from the solver. These wrap lower-level board errors.\n");
    generate_error_docs!(all_solver_error_variants());
}

fn generate_board_error_docs() {
    println!("## Board Errors\n");
    println!("Errors that occur when parsing board text or validating a board before a search.\n");
    generate_error_docs!(all_board_error_variants());
}
