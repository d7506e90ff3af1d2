//! Structured logging setup.
//!
//! stdout is reserved for command payloads (JSON/MD output); all log
//! output goes to stderr. `TT_LOG` overrides the verbosity flags with a
//! full env-filter directive.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Call once, before any command runs.
pub fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_env("TT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
