//! The letter grid searched by the solver.
//!
//! A [`Board`] is a matrix of lowercase tokens ("faces"). Most faces are a single letter,
//! but a face may also be a digraph such as `qu`, which is matched as one unit.
//!
//! Boards can be built directly from nested collections or parsed from text:
//!
//! ```
//! use wordgrid::board::Board;
//!
//! let parsed: Board = "a b c / d qu e".parse()?;
//! let built = Board::new([["a", "b", "c"], ["d", "QU", "e"]]);
//! assert_eq!(parsed, built);
//! assert_eq!(parsed.token(1, 1), Some("qu"));
//! # Ok::<(), Box<wordgrid::errors::BoardError>>(())
//! ```
//!
//! Parsing and construction never check the face grammar or that rows line up; see
//! [`crate::validation`] for that.

use crate::errors::BoardError;
use nom::{
    bytes::complete::take_while,
    character::complete::{alpha1, multispace0, one_of},
    combinator::{all_consuming, map},
    multi::{many1, separated_list1},
    sequence::{delimited, preceded, terminated},
    IResult,
    Parser,
};
use std::fmt;
use std::str::FromStr;

/// Parser result type: input, output, with our custom `BoardError`
type PResult<'a, O> = IResult<&'a str, O, Box<BoardError>>;

/// Characters that separate cells within a row
const CELL_SEPARATORS: &str = " \t,";
/// Characters that separate rows
const ROW_SEPARATORS: &str = "/\r\n";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<String>>,
}

impl Board {
    /// Build a board from rows of faces. Faces are lowercased; nothing else is checked.
    pub fn new<R, C, S>(rows: R) -> Board
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells = rows
            .into_iter()
            .map(|row| row.into_iter().map(|face| face.as_ref().to_lowercase()).collect())
            .collect();
        Board { cells }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns, taken from the first row (0 for a board with no rows).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// True if the board has no cells to start a path from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// The face at `(row, col)`, or `None` if that cell does not exist.
    #[must_use]
    pub fn token(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// Iterate over the rows of the board.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self.cells.iter().map(|row| row.join(" ")).collect();
        write!(f, "{}", rows.join(" / "))
    }
}

impl FromStr for Board {
    type Err = Box<BoardError>;

    /// Parse board text such as `"a b c / d qu e"` or one row per line.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match all_consuming(delimited(multispace0, board_rows, multispace0)).parse(text) {
            Ok((_, rows)) => Ok(Board::new(rows)),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
            Err(nom::Err::Incomplete(_)) => Err(Box::new(BoardError::Malformed { near: String::new() })),
        }
    }
}

// === Token parsers ===

fn cell_gap(input: &str) -> PResult<'_, &str> {
    take_while(|c: char| CELL_SEPARATORS.contains(c)).parse(input)
}

fn face(input: &str) -> PResult<'_, &str> {
    alpha1(input)
}

fn board_row(input: &str) -> PResult<'_, Vec<&str>> {
    preceded(cell_gap, many1(terminated(face, cell_gap))).parse(input)
}

fn row_gap(input: &str) -> PResult<'_, ()> {
    map(
        (
            one_of(ROW_SEPARATORS),
            take_while(|c: char| c.is_whitespace() || ROW_SEPARATORS.contains(c)),
        ),
        |_| (),
    )
    .parse(input)
}

fn board_rows(input: &str) -> PResult<'_, Vec<Vec<&str>>> {
    separated_list1(row_gap, board_row).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases_faces() {
        let board = Board::new([["A", "Qu"], ["st", "D"]]);
        assert_eq!(board.token(0, 0), Some("a"));
        assert_eq!(board.token(0, 1), Some("qu"));
        assert_eq!(board.token(1, 0), Some("st"));
        assert_eq!(board.token(1, 1), Some("d"));
    }

    #[test]
    fn test_dimensions() {
        let board = Board::new([["a", "b", "c"], ["d", "e", "f"]]);
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert!(!board.is_empty());
    }

    #[test]
    fn test_empty_boards() {
        let no_rows = Board::new(Vec::<Vec<&str>>::new());
        assert_eq!(no_rows.rows(), 0);
        assert_eq!(no_rows.cols(), 0);
        assert!(no_rows.is_empty());

        let empty_row = Board::new([Vec::<&str>::new()]);
        assert_eq!(empty_row.rows(), 1);
        assert!(empty_row.is_empty());
    }

    #[test]
    fn test_token_out_of_bounds() {
        let board = Board::new([["a", "b"], ["c", "d"]]);
        assert_eq!(board.token(2, 0), None);
        assert_eq!(board.token(0, 2), None);
    }

    #[test]
    fn test_token_on_ragged_board() {
        let board = Board::new(vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(board.token(0, 1), Some("b"));
        assert_eq!(board.token(1, 1), None);
    }

    #[test]
    fn test_parse_slash_separated() {
        let board: Board = "a b c / d qu e / f g st".parse().unwrap();
        assert_eq!(board, Board::new([["a", "b", "c"], ["d", "qu", "e"], ["f", "g", "st"]]));
    }

    #[test]
    fn test_parse_lines_and_commas() {
        let board: Board = "\n  A,B\nC, D\n".parse().unwrap();
        assert_eq!(board, Board::new([["a", "b"], ["c", "d"]]));
    }

    #[test]
    fn test_parse_crlf() {
        let board: Board = "a b\r\nc d\r\n".parse().unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 2);
    }

    #[test]
    fn test_parse_keeps_multiletter_cells() {
        // the grammar check belongs to validation, not to parsing
        let board: Board = "a bb".parse().unwrap();
        assert_eq!(board, Board::new([["a", "bb"]]));
    }

    #[test]
    fn test_parse_keeps_ragged_rows() {
        let board: Board = "a b / c".parse().unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.token(1, 0), Some("c"));
        assert_eq!(board.token(1, 1), None);
    }

    #[test]
    fn test_parse_rejects_digits() {
        let err = "a 1 / c d".parse::<Board>().unwrap_err();
        assert_eq!(err.code(), "B001");
    }

    #[test]
    fn test_parse_rejects_trailing_separator() {
        assert!("a b /".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_empty_text() {
        assert!("".parse::<Board>().is_err());
        assert!("   ".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let board = Board::new([["a", "qu"], ["st", "d"]]);
        assert_eq!(board.to_string(), "a qu / st d");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_iter_rows() {
        let board = Board::new([["a", "b"], ["c", "d"]]);
        let rows: Vec<&[String]> = board.iter_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ["c".to_string(), "d".to_string()]);
    }
}
