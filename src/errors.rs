//! Error types for board parsing and validation, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (B001-B005) for documentation lookup:
//!
//! - B001: `Malformed` (Board text could not be parsed)
//! - B002: `EmptyBoard` (Board has no cells)
//! - B003: `RaggedRow` (Row length differs from the first row)
//! - B004: `NotSquare` (Square board required but rows != columns)
//! - B005: `IllegalFace` (Cell is not a legal die face)
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::BoardError;
//!
//! let err = BoardError::IllegalFace { row: 0, col: 1, face: "bb".to_string() };
//! assert_eq!(err.code(), "B005");
//! println!("{}", err.display_detailed());
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::io;

/// Errors raised while turning caller input into a searchable board.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    #[error("Board text could not be parsed near \"{near}\"")]
    Malformed { near: String },

    #[error("Board has no cells")]
    EmptyBoard,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Board is {rows}x{cols}, but a square board is required")]
    NotSquare { rows: usize, cols: usize },

    #[error("Cell ({row}, {col}) holds \"{face}\", which is not a legal die face")]
    IllegalFace { row: usize, col: usize, face: String },
}

impl From<BoardError> for io::Error {
    fn from(be: BoardError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, be.to_string())
    }
}

impl<'a> NomParseError<&'a str> for Box<BoardError> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Box::new(BoardError::Malformed { near: input.chars().take(16).collect() })
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl BoardError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BoardError::Malformed { .. } => "B001",
            BoardError::EmptyBoard => "B002",
            BoardError::RaggedRow { .. } => "B003",
            BoardError::NotSquare { .. } => "B004",
            BoardError::IllegalFace { .. } => "B005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BoardError::Malformed { .. } => "Board text could not be parsed",
            BoardError::EmptyBoard => "Board has no cells",
            BoardError::RaggedRow { .. } => "Row length differs from the first row",
            BoardError::NotSquare { .. } => "Square board required but rows and columns differ",
            BoardError::IllegalFace { .. } => "Cell is not a legal die face",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            BoardError::Malformed { .. } => "Board text is a list of rows separated by '/' or newlines. Each row is a list of cells separated by spaces or commas, and each cell is a run of letters.",
            BoardError::EmptyBoard => "A board needs at least one row with at least one cell before it can be searched.",
            BoardError::RaggedRow { .. } => "Every row of a board must have the same number of cells as the first row.",
            BoardError::NotSquare { .. } => "The square-board policy is enabled, so the number of rows must equal the number of columns.",
            BoardError::IllegalFace { .. } => "Each cell must hold a single letter other than 'q' or 's', or one of the digraphs 'qu' and 'st'.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BoardError::Malformed { .. } => Some("Example: 'a b c / d qu e / f g st'"),
            BoardError::EmptyBoard => Some("Provide at least one cell, e.g. 'a b / c d'"),
            BoardError::RaggedRow { .. } => Some("Pad or trim rows so that they all have the same length"),
            BoardError::NotSquare { .. } => Some("Drop the square-board requirement or supply an NxN board"),
            BoardError::IllegalFace { .. } => Some("Use 'qu' instead of 'q' and 'st' instead of 's'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
