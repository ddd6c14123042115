//! Logging init: stderr subscriber with env-filter override.

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. Intended for binaries and test harnesses
/// embedding this crate; library code only emits `tracing` events and never
/// installs a subscriber itself.
pub fn init_logging_stderr() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,conncfg=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
