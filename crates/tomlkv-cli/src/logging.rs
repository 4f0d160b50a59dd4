//! Diagnostic logging to stderr
//!
//! Stdout carries only the JSON result, so every log line goes to stderr.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::TraceLevel;

/// Initialize the global tracing subscriber.
///
/// The filter is taken from `level` when given, then `RUST_LOG`, and falls
/// back to "warn".
pub fn init(level: Option<TraceLevel>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact();

    let filter_layer = match level {
        Some(level) => EnvFilter::try_new(level.as_filter())?,
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
