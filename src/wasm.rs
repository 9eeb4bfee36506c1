use crate::board::Board;
use crate::errors::BoardError;
use crate::log::init_logger;
use crate::solver::BoggleSolver;
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "B005", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<&BoardError> for WasmError {
    fn from(e: &BoardError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Validate all internal regex patterns compile successfully.
///
/// Forces LazyLock initialization of all static regexes so any compilation
/// errors occur at startup rather than on the first board.
///
/// ## IMPORTANT: Adding a new regex?
/// If you add a new `LazyLock<Regex>` anywhere in the codebase, you MUST add it here.
fn validate_internal_regexes() {
    let _ = &*crate::validation::FACE_RE;
    log::debug!("Internal regex patterns validated successfully");
}

/// Initialize logging and validation with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    validate_internal_regexes();
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    /// Found words, uppercase and sorted (empty when the board is invalid).
    words: Vec<String>,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<WasmError>,
}

/// JS entry: (board_text: string, word_list: string[])
/// returns `{ words: string[], valid: boolean, error?: {...} }`
///
/// An unparseable or invalid board is not an exception: it yields `valid: false`, no
/// words, and the structured error.
#[wasm_bindgen]
pub fn solve_board_wasm(board_text: &str, word_list: JsValue) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(word_list)
        .map_err(|e| {
            WasmError {
                code: "WASM001".to_string(),
                message: format!("word_list must be string[]: {e}"),
                description: "Invalid word-list format".to_string(),
                details: "The word_list parameter must be a JavaScript array of strings.".to_string(),
                help: Some("Ensure you're passing a valid string array, e.g., ['cat', 'dog', 'fish']".to_string()),
            }
        })?;

    let wasm_result = match board_text.parse::<Board>() {
        Ok(board) => {
            let mut solver = BoggleSolver::new(board, &words);
            match solver.solve() {
                Ok(result) => WasmSolveResult { words: result.words, valid: true, error: None },
                Err(crate::solver::SolverError::InvalidBoard(be)) => {
                    WasmSolveResult { words: Vec::new(), valid: false, error: Some(WasmError::from(&*be)) }
                }
            }
        }
        Err(be) => WasmSolveResult { words: Vec::new(), valid: false, error: Some(WasmError::from(&*be)) },
    };

    to_value(&wasm_result)
        .map_err(|e| {
            WasmError {
                code: "WASM002".to_string(),
                message: format!("serialization failed: {e}"),
                description: "Failed to serialize result".to_string(),
                details: "The solver result could not be converted to JavaScript format.".to_string(),
                help: Some("This is an internal error. Please report this issue.".to_string()),
            }.into()
        })
}

/// Parse a newline-separated word list string into its normalized words.
///
/// Each line is `word` or `word;score`; scored entries below `min_score` are dropped.
///
/// # Errors
/// Returns a `JsValue` error if the result cannot be serialized.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_score: i32) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, min_score);
    to_value(&word_list.words)
        .map_err(|e| {
            WasmError {
                code: "WASM003".to_string(),
                message: format!("serialization failed: {e}"),
                description: "Failed to serialize word list".to_string(),
                details: "The word list could not be converted to JavaScript format.".to_string(),
                help: Some("This is an internal error. Please report this issue.".to_string()),
            }.into()
        })
}

/// Generate a debug report for troubleshooting.
///
/// # Arguments
/// * `board_text` - The board that was being searched
/// * `error_message` - The error message that was displayed
/// * `word_list_size` - Number of words in the word list
#[wasm_bindgen]
pub fn get_debug_info(board_text: &str, error_message: &str, word_list_size: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== WORDGRID DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Board: {}", board_text);
    let _ = writeln!(&mut report, "Word List Size: {}", word_list_size);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasm_error_from_board_error() {
        let err = WasmError::from(&BoardError::IllegalFace { row: 0, col: 1, face: "bb".to_string() });
        assert_eq!(err.code, "B005");
        assert!(err.message.contains("bb"));
        assert!(err.help.is_some());
    }

    #[test]
    fn test_get_debug_info_lists_input() {
        let report = get_debug_info("a b / c d", "error", 42);
        let lines: Vec<&str> = report.lines().collect();

        let input_idx = lines.iter().position(|&l| l == "## Input").unwrap();
        assert_eq!(lines[input_idx + 1], "Board: a b / c d");
        assert_eq!(lines[input_idx + 2], "Word List Size: 42");
    }

    /// Ensure all LazyLock<Regex> statics are validated at startup. (fail fast)
    ///
    /// current regexes:
    /// 1. crate::validation::FACE_RE
    #[test]
    fn test_all_regexes_validated() {
        validate_internal_regexes();
    }
}
