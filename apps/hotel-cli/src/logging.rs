//! Diagnostic logging.
//!
//! Stdout is the customer dialogue, so every log line goes to stderr.
//!
//! ## Log Levels
//! - Default: `warn` (only receipt write failures show up)
//! - `RUST_LOG=hotel=debug` - rejected inputs and the computed bill
//! - `RUST_LOG=hotel=trace` - every raw terminal answer

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
