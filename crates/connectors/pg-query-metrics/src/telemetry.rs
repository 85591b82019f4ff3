//! Log output of the command-line binary.

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Formatted events on stderr, filtered by `RUST_LOG` (default `info`).
///
/// stdout carries the plugin output, so nothing else may write there.
pub fn stderr_dispatch() -> Dispatch {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .finish();
    Dispatch::new(subscriber)
}
