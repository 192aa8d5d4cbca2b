//! Diagnostic logging to stderr.
//!
//! The level comes from the `log_level` config key (`error`, `warn`, `info`,
//! `debug`, `trace`, or a full filter directive such as `rtimetracker=debug`).

use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

fn build_filter(level: &str) -> AppResult<EnvFilter> {
    let directive = if level.contains('=') {
        level.to_string()
    } else {
        format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_"))
    };

    EnvFilter::try_new(&directive)
        .map_err(|e| AppError::Config(format!("invalid log_level '{level}': {e}")))
}

/// Install the global subscriber. Calling it twice is harmless: the second
/// call leaves the first subscriber in place.
pub fn enable_logging(level: &str) -> AppResult<()> {
    let filter = build_filter(level)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    Ok(())
}
