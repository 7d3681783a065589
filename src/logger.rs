//! Logging setup built on tracing / tracing-subscriber.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter honors `RUST_LOG` when set and falls back to the given
/// default level otherwise. Call once, from the binary entry point.
pub fn setup_logger(name: &str, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!("logger initialized for '{}'", name);
}
