//! `word_list`: load and preprocess the vocabulary for the grid solver
//!
//! A word list can come from a file (native builds) or from an in-memory string (the only
//! option for WebAssembly builds, where the text is fetched by JavaScript).
//!
//! Accepted line formats:
//! - `word`: a plain word, always kept.
//! - `word;score`: kept only when `score` parses as an integer and is at least `min_score`.
//!
//! Every kept word is trimmed and lowercased. Words containing anything other than
//! letters are dropped, since no board cell can spell them. The final list is
//! deduplicated and sorted by length, then alphabetically.

/// A processed, ready-to-use word list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Lowercase words, e.g. `["ant", "cat", "tree", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines and trims each one.
    /// 2. Skips empty lines.
    /// 3. For `word;score` lines, parses the score and filters by `min_score`.
    /// 4. Lowercases the word and drops it if it is not purely alphabetic.
    /// 5. Deduplicates, then sorts by length, then alphabetically.
    pub fn parse_from_str(contents: &str, min_score: i32) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();

                let word_raw = if line.is_empty() {
                    return None;
                } else if let Some((word_raw, score_raw)) = line.split_once(';') {
                    // unparseable scores drop the line
                    let score: i32 = score_raw.trim().parse().ok()?;
                    if score < min_score {
                        return None;
                    }
                    word_raw
                } else {
                    line
                };

                let word = word_raw.trim().to_lowercase();
                (!word.is_empty() && word.chars().all(char::is_alphabetic)).then_some(word)
            })
            .collect();

        // dedup() only removes adjacent duplicates, so sort alphabetically first
        words.sort();
        words.dedup();
        words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        min_score: i32,
    ) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data, min_score))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
