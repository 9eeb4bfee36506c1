//! Letters and digraphs that can appear on a single die face.
//!
//! `validation::FACE_RE` is built from these constants.

#[cfg(test)]
use std::ops::RangeInclusive;

#[cfg(test)]
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Two-letter faces that occupy a single cell and are matched as one unit.
pub const DIGRAPHS: [&str; 2] = ["qu", "st"];

/// Letters that may appear alone on a die face. `q` and `s` only occur inside a digraph.
pub const SINGLE_FACE_LETTERS: &str = "abcdefghijklmnoprtuvwxyz";
