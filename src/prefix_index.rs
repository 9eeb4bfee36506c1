//! The set of every non-empty prefix of every vocabulary word.
//!
//! The solver uses it to abandon a path as soon as the letters read so far cannot start
//! any word. Because every prefix of every word is inserted, the set is closed under
//! taking prefixes.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixIndex {
    prefixes: HashSet<String>,
}

impl PrefixIndex {
    /// Build the index from `words`, lowercasing each one first.
    pub fn build<I, S>(words: I) -> PrefixIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut prefixes = HashSet::new();
        for word in words {
            let word = word.as_ref().to_lowercase();
            // char boundaries, so multi-byte letters never split
            for (end, c) in word.char_indices() {
                prefixes.insert(word[..end + c.len_utf8()].to_string());
            }
        }
        PrefixIndex { prefixes }
    }

    /// Exact membership. Entries are lowercase; callers normalize before asking.
    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}
