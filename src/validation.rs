//! Board validation, run once before a search.
//!
//! A board is searchable when it has at least one cell, every row is as long as the
//! first, and every cell holds a legal die face (`qu`, `st`, or a single letter other
//! than `q` and `s`). The solver itself never re-checks any of this.

use crate::board::Board;
use crate::die_face::{DIGRAPHS, SINGLE_FACE_LETTERS};
use crate::errors::BoardError;
use fancy_regex::Regex;
use std::sync::LazyLock;

/// Matches exactly one legal die face (input is lowercased first):
/// `^(qu|st|[abcdefghijklmnoprtuvwxyz])$`
///
/// If a new `LazyLock<Regex>` is added, add it to `wasm::validate_internal_regexes` too!
pub(crate) static FACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^({}|[{}])$", DIGRAPHS.join("|"), SINGLE_FACE_LETTERS)).unwrap()
});

/// Shape requirements applied on top of the face grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Require as many rows as columns (classic 4x4 / 5x5 boards).
    pub require_square: bool,
}

impl ValidationPolicy {
    pub const RECTANGULAR: ValidationPolicy = ValidationPolicy { require_square: false };
    pub const SQUARE: ValidationPolicy = ValidationPolicy { require_square: true };
}

/// True if `face` is a legal die face, ignoring case.
#[must_use]
pub fn is_legal_face(face: &str) -> bool {
    FACE_RE.is_match(&face.to_lowercase()).unwrap_or(false)
}

/// Check `board` against `policy`, reporting the first problem found.
///
/// Checks run in this order: emptiness, row lengths, squareness, then faces in
/// row-major order.
///
/// # Errors
///
/// Returns the [`BoardError`] describing the first violation.
pub fn validate_board(board: &Board, policy: &ValidationPolicy) -> Result<(), BoardError> {
    if board.is_empty() {
        return Err(BoardError::EmptyBoard);
    }

    let expected = board.cols();
    if let Some((row, cells)) = board
        .iter_rows()
        .enumerate()
        .find(|(_, cells)| cells.len() != expected)
    {
        return Err(BoardError::RaggedRow { row, expected, found: cells.len() });
    }

    if policy.require_square && board.rows() != expected {
        return Err(BoardError::NotSquare { rows: board.rows(), cols: expected });
    }

    for (row, cells) in board.iter_rows().enumerate() {
        if let Some((col, face)) = cells.iter().enumerate().find(|(_, face)| !is_legal_face(face)) {
            return Err(BoardError::IllegalFace { row, col, face: face.clone() });
        }
    }

    Ok(())
}

/// Boolean form of [`validate_board`].
#[must_use]
pub fn is_valid_board(board: &Board, policy: &ValidationPolicy) -> bool {
    validate_board(board, policy).is_ok()
}
