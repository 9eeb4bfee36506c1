//! Find every dictionary word that can be traced on a Boggle-style letter grid.
//!
//! The search walks from cell to adjacent cell (diagonals included) without reusing a
//! cell, and abandons a walk as soon as the letters read so far do not begin any
//! vocabulary word. See [`solver::BoggleSolver`] for the entry point.

pub mod board;
pub mod die_face;
pub mod errors;
pub mod log;
pub mod prefix_index;
pub mod solver;
pub mod validation;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
