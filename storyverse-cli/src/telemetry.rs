//! Log subscriber installation for the CLI.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here bridges those records and writes them to stderr so ranked output on
//! stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

use crate::CliError;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `fallback` is used.
///
/// # Errors
/// Returns [`CliError::LogFilter`] when `fallback` is not a valid filter and
/// [`CliError::LogInit`] when a global subscriber is already installed.
pub fn init_logging(fallback: &str) -> Result<(), CliError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback).map_err(|source| CliError::LogFilter {
            value: fallback.to_owned(),
            source,
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(CliError::LogInit)
}
