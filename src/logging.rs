//! Structured logging via `tracing`.
//!
//! The terminal belongs to the UI, so events are written to a file when one is
//! configured and dropped otherwise.

use std::{fs::OpenOptions, io, path::Path, sync::Mutex};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable overriding the configured level filter
pub const LOG_ENV: &str = "TREENAV_LOG";

/// Install the global subscriber. `level` accepts any `EnvFilter` directive.
pub fn init_logging(log_file: Option<&Path>, level: &str) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}
