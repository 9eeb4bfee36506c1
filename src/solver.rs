//! The grid solver: find every vocabulary word traceable on a board.
//!
//! A word is traceable when it can be read by walking from cell to adjacent cell
//! (horizontally, vertically or diagonally) without stepping on any cell twice. Each cell
//! contributes its whole face, so a `qu` cell adds two letters in one step. Words shorter
//! than [`MIN_WORD_LENGTH`] are never reported.
//!
//! # Error Handling
//!
//! The search itself cannot fail. Only board validation can, and the solver reports it
//! through [`SolverError`]:
//!
//! - S001: `InvalidBoard` (Board failed validation (wraps [`BoardError`]))
//!
//! # Examples
//!
//! ```
//! use wordgrid::board::Board;
//! use wordgrid::solver::BoggleSolver;
//!
//! let board = Board::new([["c", "a"], ["r", "t"]]);
//! let mut solver = BoggleSolver::new(board, ["cat", "cart", "act", "rat", "tact"]);
//!
//! assert_eq!(solver.get_words(), vec!["ACT", "CART", "CAT", "RAT"]);
//! ```
//!
//! ## Replacing the board or the vocabulary
//!
//! ```
//! use wordgrid::board::Board;
//! use wordgrid::solver::BoggleSolver;
//!
//! let mut solver = BoggleSolver::new(Board::new([["c", "a", "t"]]), ["cat", "dog"]);
//! assert_eq!(solver.get_words(), vec!["CAT"]);
//!
//! solver.set_board(Board::new([["d", "o", "g"]]));
//! assert_eq!(solver.get_words(), vec!["DOG"]);
//!
//! solver.set_word_list(["cog"]);
//! assert!(solver.get_words().is_empty());
//! ```

use crate::board::Board;
use crate::errors::BoardError;
use crate::prefix_index::PrefixIndex;
use crate::validation::{validate_board, ValidationPolicy};
use instant::Instant;
use log::{debug, warn};
use std::collections::HashSet;
use std::time::Duration;

/// Shortest word the solver will report, in letters.
pub const MIN_WORD_LENGTH: usize = 3;

/// Row/column offsets of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Successful validated solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// Found words, uppercase and sorted.
    pub words: Vec<String>,
    /// Time spent in the search (validation excluded).
    pub elapsed: Duration,
}

impl IntoIterator for SolveResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// Unified error type for the validated solver entry point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    /// The board was rejected before the search started.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] Box<BoardError>),
}

impl From<BoardError> for SolverError {
    fn from(be: BoardError) -> Self {
        SolverError::InvalidBoard(Box::new(be))
    }
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidBoard(_) => "S001",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::InvalidBoard(_) => "Board failed validation",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::InvalidBoard(_) => "The board was checked before searching and rejected, so no search was run. This wraps an underlying BoardError (see Board Errors section for specific error codes).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::InvalidBoard(_) => None, // BoardError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::InvalidBoard(be) => {
                format!("{}\n  caused by: {}", self.code(), be.display_detailed())
            }
        }
    }
}

/// Owns a board and a vocabulary, and finds the vocabulary words on the board.
///
/// The board and the vocabulary are replaced independently: [`set_board`](Self::set_board)
/// leaves the prefix index alone, while [`set_word_list`](Self::set_word_list) rebuilds it.
#[derive(Debug, Clone, Default)]
pub struct BoggleSolver {
    board: Board,
    rows: usize,
    cols: usize,
    words: HashSet<String>,
    prefixes: PrefixIndex,
    found_words: HashSet<String>,
    policy: ValidationPolicy,
}

impl BoggleSolver {
    pub fn new<I, S>(board: Board, words: I) -> BoggleSolver
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut solver = BoggleSolver::default();
        solver.set_board(board);
        solver.set_word_list(words);
        solver
    }

    /// Use `policy` when [`get_words`](Self::get_words) and [`solve`](Self::solve) validate.
    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> BoggleSolver {
        self.policy = policy;
        self
    }

    /// Replace the board and recompute its dimensions.
    pub fn set_board(&mut self, board: Board) {
        self.rows = board.rows();
        self.cols = board.cols();
        self.board = board;
    }

    /// Replace the vocabulary and rebuild the prefix index from it.
    pub fn set_word_list<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self.prefixes = PrefixIndex::build(&self.words);
        debug!("Vocabulary of {} words, {} prefixes", self.words.len(), self.prefixes.len());
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of distinct words in the vocabulary.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn prefix_index(&self) -> &PrefixIndex {
        &self.prefixes
    }

    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Search the board without validating it, returning the words found (lowercase,
    /// unordered).
    ///
    /// Each cell starts one depth-first walk; all walks share a single visited mask,
    /// which every walk leaves clear when it returns.
    pub fn discover_words(&mut self) -> Vec<String> {
        self.found_words.clear();

        let mut search = Search {
            board: &self.board,
            rows: self.rows,
            cols: self.cols,
            words: &self.words,
            prefixes: &self.prefixes,
            found: &mut self.found_words,
            visited: vec![false; self.rows * self.cols],
            path: String::new(),
        };
        for row in 0..self.rows {
            for col in 0..self.cols {
                search.extend(row, col);
            }
        }
        debug_assert!(search.visited.iter().all(|v| !v), "visited mask left dirty");

        self.found_words.iter().cloned().collect()
    }

    /// Validate the board and search it.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidBoard`] if the board fails validation under this
    /// solver's policy; no search is run in that case.
    pub fn solve(&mut self) -> Result<SolveResult, SolverError> {
        validate_board(&self.board, &self.policy)?;

        let t_search = Instant::now();
        let mut words: Vec<String> = self
            .discover_words()
            .into_iter()
            .map(|w| w.to_uppercase())
            .collect();
        words.sort();
        let elapsed = t_search.elapsed();

        debug!(
            "Found {} words on a {}x{} board in {:.3}s",
            words.len(),
            self.rows,
            self.cols,
            elapsed.as_secs_f64()
        );

        Ok(SolveResult { words, elapsed })
    }

    /// Found words for display: uppercase and sorted. An invalid board yields no words.
    pub fn get_words(&mut self) -> Vec<String> {
        match self.solve() {
            Ok(result) => result.words,
            Err(e) => {
                warn!("Skipping search: {e}");
                Vec::new()
            }
        }
    }
}

/// State for one full-board search.
struct Search<'a> {
    board: &'a Board,
    rows: usize,
    cols: usize,
    words: &'a HashSet<String>,
    prefixes: &'a PrefixIndex,
    found: &'a mut HashSet<String>,
    /// Row-major, `rows * cols` long.
    visited: Vec<bool>,
    /// Letters read along the current path.
    path: String,
}

impl Search<'_> {
    fn extend(&mut self, row: usize, col: usize) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let cell = row * self.cols + col;
        if self.visited[cell] {
            return;
        }
        let Some(face) = self.board.token(row, col) else {
            return;
        };

        let path_len = self.path.len();
        self.path.push_str(face);

        // pruned paths must return before the cell is marked
        if !self.prefixes.contains(&self.path) {
            self.path.truncate(path_len);
            return;
        }

        if self.path.chars().count() >= MIN_WORD_LENGTH && self.words.contains(&self.path) {
            self.found.insert(self.path.clone());
        }

        self.visited[cell] = true;
        for (d_row, d_col) in NEIGHBOR_OFFSETS {
            if let (Some(next_row), Some(next_col)) =
                (row.checked_add_signed(d_row), col.checked_add_signed(d_col))
            {
                self.extend(next_row, next_col);
            }
        }
        self.visited[cell] = false;

        self.path.truncate(path_len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn test_all_cells_adjacent_in_2x2() {
        let board = Board::new([["a", "b"], ["c", "d"]]);
        let mut solver = BoggleSolver::new(board, ["abc", "abd", "acb"]);
        assert_eq!(sorted(solver.discover_words()), vec!["abc", "abd", "acb"]);
    }

    #[test]
    fn test_no_wraparound() {
        // 'a' and 'c' sit at opposite ends of the row
        let board = Board::new([["a", "b", "c", "d"]]);
        let mut solver = BoggleSolver::new(board, ["abc", "bcd", "dab", "cab"]);
        assert_eq!(sorted(solver.discover_words()), vec!["abc", "bcd"]);
    }

    #[test]
    fn test_diagonals_count() {
        let board = Board::new([["c", "x", "x"], ["x", "a", "x"], ["x", "x", "t"]]);
        let mut solver = BoggleSolver::new(board, ["cat"]);
        assert_eq!(solver.discover_words(), vec!["cat"]);
    }

    #[test]
    fn test_cells_not_reused() {
        let board = Board::new([["a", "n"]]);
        let mut solver = BoggleSolver::new(board, ["ana", "nan", "an"]);
        assert!(solver.discover_words().is_empty());
    }

    #[test]
    fn test_same_letter_on_two_cells() {
        let board = Board::new([["a", "n", "a"]]);
        let mut solver = BoggleSolver::new(board, ["ana", "nan"]);
        assert_eq!(solver.discover_words(), vec!["ana"]);
    }

    #[test]
    fn test_short_words_never_reported() {
        let board = Board::new([["a", "t"], ["e", "i"]]);
        let mut solver = BoggleSolver::new(board, ["a", "at", "ate", "tea", "eat", "tie"]);
        assert_eq!(sorted(solver.discover_words()), vec!["ate", "eat", "tea", "tie"]);
    }

    #[test]
    fn test_digraph_is_one_step() {
        let board = Board::new([["qu", "i"], ["t", "e"]]);
        let mut solver = BoggleSolver::new(board, ["quit", "quite", "quiet", "qit"]);
        assert_eq!(sorted(solver.discover_words()), vec!["quiet", "quit", "quite"]);
    }

    #[test]
    fn test_digraph_counts_letters_toward_floor() {
        // "qui" is three letters read from two cells
        let board = Board::new([["qu", "i"]]);
        let mut solver = BoggleSolver::new(board, ["qui"]);
        assert_eq!(solver.discover_words(), vec!["qui"]);
    }

    #[test]
    fn test_split_digraph_not_matched() {
        // an 'st' cell cannot contribute just its 't'
        let board = Board::new([["st", "a", "r"]]);
        let mut solver = BoggleSolver::new(board, ["star", "tar", "sta"]);
        assert_eq!(sorted(solver.discover_words()), vec!["sta", "star"]);
    }

    #[test]
    fn test_case_insensitive_vocabulary() {
        let board = Board::new([["D", "o", "G"]]);
        let mut solver = BoggleSolver::new(board, ["DOG", "God", "dig"]);
        assert_eq!(sorted(solver.discover_words()), vec!["dog", "god"]);
    }

    #[test]
    fn test_duplicates_reported_once() {
        // "tot" can be traced two ways
        let board = Board::new([["t", "o", "t"]]);
        let mut solver = BoggleSolver::new(board, ["tot"]);
        assert_eq!(solver.discover_words(), vec!["tot"]);
    }

    #[test]
    fn test_discover_is_idempotent() {
        let board = Board::new([["c", "a"], ["r", "t"]]);
        let mut solver = BoggleSolver::new(board, ["cat", "cart", "act", "rat", "tar"]);
        let first = sorted(solver.discover_words());
        let second = sorted(solver.discover_words());
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_set_board_keeps_prefix_index() {
        let mut solver = BoggleSolver::new(Board::new([["c", "a", "t"]]), ["cat", "act"]);
        let before = solver.prefix_index().clone();

        solver.set_board(Board::new([["a", "c", "t"], ["x", "x", "x"]]));
        assert_eq!(solver.prefix_index(), &before);
        assert_eq!((solver.rows(), solver.cols()), (2, 3));
        assert_eq!(solver.discover_words(), vec!["act"]);
    }

    #[test]
    fn test_set_word_list_rebuilds_prefix_index() {
        let mut solver = BoggleSolver::new(Board::new([["c", "a", "t"]]), ["cat"]);
        assert!(solver.prefix_index().contains("ca"));

        solver.set_word_list(["tac"]);
        assert!(!solver.prefix_index().contains("ca"));
        assert!(solver.prefix_index().contains("ta"));
        assert_eq!(solver.word_count(), 1);
        assert_eq!(solver.discover_words(), vec!["tac"]);
    }

    #[test]
    fn test_get_words_sorted_uppercase() {
        let board = Board::new([["c", "a"], ["r", "t"]]);
        let mut solver = BoggleSolver::new(board, ["tar", "cat", "art"]);
        assert_eq!(solver.get_words(), vec!["ART", "CAT", "TAR"]);
    }

    #[test]
    fn test_get_words_invalid_board_is_empty() {
        let board = Board::new([["a", "bb"]]);
        let mut solver = BoggleSolver::new(board, ["abb", "bba"]);
        assert!(solver.get_words().is_empty());
    }

    #[test]
    fn test_solve_reports_invalid_board() {
        let board = Board::new([["a", "bb"]]);
        let mut solver = BoggleSolver::new(board, ["abb"]);
        let err = solver.solve().unwrap_err();
        assert_eq!(err.code(), "S001");
        assert_eq!(
            err,
            SolverError::InvalidBoard(Box::new(BoardError::IllegalFace {
                row: 0,
                col: 1,
                face: "bb".to_string()
            }))
        );
    }

    #[test]
    fn test_square_policy() {
        let board = Board::new([["c", "a", "t"]]);
        let mut solver = BoggleSolver::new(board, ["cat"]).with_policy(ValidationPolicy::SQUARE);
        assert!(solver.get_words().is_empty());

        let mut solver = solver.with_policy(ValidationPolicy::RECTANGULAR);
        assert_eq!(solver.get_words(), vec!["CAT"]);
    }

    #[test]
    fn test_solve_result_into_iter() {
        let board = Board::new([["c", "a", "t"]]);
        let mut solver = BoggleSolver::new(board, ["cat", "act"]);
        let words: Vec<String> = solver.solve().unwrap().into_iter().collect();
        assert_eq!(words, vec!["CAT"]);
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn test_empty_board() {
            let mut solver = BoggleSolver::new(Board::default(), ["cat"]);
            assert!(solver.discover_words().is_empty());
            assert!(solver.get_words().is_empty());
        }

        #[test]
        fn test_board_with_empty_row() {
            let mut solver = BoggleSolver::new(Board::new([Vec::<&str>::new()]), ["cat"]);
            assert_eq!(solver.cols(), 0);
            assert!(solver.discover_words().is_empty());
        }

        #[test]
        fn test_empty_vocabulary() {
            let board = Board::new([["c", "a"], ["r", "t"]]);
            let mut solver = BoggleSolver::new(board, Vec::<String>::new());
            assert!(solver.prefix_index().is_empty());
            assert!(solver.discover_words().is_empty());
        }

        #[test]
        fn test_ragged_board_search_does_not_panic() {
            // discover_words trusts its input, but a short row must not crash it
            let board = Board::new(vec![vec!["c", "a", "t"], vec!["x"]]);
            let mut solver = BoggleSolver::new(board, ["cat", "ax"]);
            assert_eq!(solver.discover_words(), vec!["cat"]);
        }

        #[test]
        fn test_word_longer_than_board() {
            let board = Board::new([["a", "b"], ["c", "d"]]);
            let mut solver = BoggleSolver::new(board, ["abcda", "abcdab"]);
            assert!(solver.discover_words().is_empty());
        }

        #[test]
        fn test_whole_board_word() {
            let board = Board::new([["a", "b", "c"], ["f", "e", "d"], ["g", "h", "i"]]);
            let mut solver = BoggleSolver::new(board, ["abcdefghi"]);
            assert_eq!(solver.discover_words(), vec!["abcdefghi"]);
        }

        #[test]
        fn test_single_cell_board() {
            let mut solver = BoggleSolver::new(Board::new([["qu"]]), ["qu", "qua"]);
            assert!(solver.discover_words().is_empty());
        }

        #[test]
        fn test_uniform_board_terminates() {
            // every path is a prefix of the long word, so only the no-reuse rule bounds it
            let board = Board::new(vec![vec!["e"; 3]; 3]);
            let mut solver = BoggleSolver::new(board, ["eeeeeeeee", "eeeeeeeeee", "eee"]);
            assert_eq!(sorted(solver.discover_words()), vec!["eee", "eeeeeeeee"]);
        }
    }
}
