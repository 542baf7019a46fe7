//! Logging initialization.
//!
//! Logs go to stderr so that `--json` output on stdout stays parseable.

use tracing::trace;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when set.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
