//! Diagnostic logging for the CLI.
//!
//! Events go to the process stderr through `tracing-subscriber`'s fmt layer;
//! command output written to the `out`/`err` streams passed to [`crate::run`]
//! is unaffected.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber at `level` (any `EnvFilter` directive,
/// normally one of `off`, `error`, `warn`, `info`, `debug`, `trace`).
/// Returns `false` when a subscriber was already installed.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_new(level.to_ascii_lowercase())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
