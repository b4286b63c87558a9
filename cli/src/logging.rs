//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`. User-facing notices are not
//! logs; they go through `output`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`RUST_LOG` syntax).
pub const LOG_ENV: &str = "LAVADOCS_LOG";

/// Filter used when neither `--verbose` nor `LAVADOCS_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter: `--verbose` wins, then `LAVADOCS_LOG`, then the default.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("warn,lavadocs_cli=debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
