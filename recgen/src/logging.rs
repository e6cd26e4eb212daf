//! Diagnostic logging for the `recgen` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, with `RUST_LOG` syntax.
pub const LOG_ENV: &str = "RECGEN_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// Logs go to stderr so they never mix with reports or `--json` output on
/// stdout. `--verbose` wins over `RECGEN_LOG`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
