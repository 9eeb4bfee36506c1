//! Logger setup shared by the `wordgrid` binaries and the browser module.
//!
//! The solver only emits `debug!` lines (vocabulary size, search timings) and a `warn!`
//! when `get_words` drops an invalid board, so `--debug` is what makes a run chatty.

/// Install the process-wide logger at `Debug` when `debug_enabled`, `Info` otherwise.
///
/// On native targets a `RUST_LOG` filter takes precedence over the flag, and output is
/// bare messages on stderr so it never mixes with the word list on stdout. In the
/// browser, messages go to the devtools console.
///
/// A logger that is already installed is kept; tests and embedders may call this freely.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::error_1(&format!("wordgrid: console logger unavailable: {e}").into());
            return;
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(level.to_level_filter())
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        if builder.try_init().is_err() {
            return;
        }
    }

    log::debug!("wordgrid logging at {level:?}");
}
