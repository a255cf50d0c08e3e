// crates/contacts-cli/src/logging.rs - Diagnostic tracing setup
//
// Diagnostics go to stderr so prompts and tables on stdout stay clean.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber
///
/// Reads `RUST_LOG`; when unset the level is `warn`, or `debug` with
/// `--verbose`.
///
/// ```bash
/// RUST_LOG=contacts_core=debug contacts add
/// ```
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
