//! Diagnostic logging for the command-line front end.
//!
//! Logs go to stderr so translations on stdout stay clean for piping.
//! The codec itself never logs.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "morse_translator=debug,warn"
    } else {
        "morse_translator=warn"
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // Ignore failure: a subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();
}
