// Rust guideline compliant 2026-10-17

//! Tracing setup for applications embedding Loadstate.

use crate::error::{AppError, Result};
use loadstate_core::{Config, LogFormat};
use std::fs::OpenOptions;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Installs the global tracing subscriber described by `config`.
///
/// Events go to `config.log_file` through a non-blocking writer when set,
/// otherwise to stderr. If a global subscriber is already installed the
/// call leaves it in place, opens no file and returns `None`.
///
/// # Returns
///
/// The writer guard when this call installed a file logger. Keep it alive
/// for as long as events should be flushed.
///
/// # Errors
///
/// Returns an error if the log level is unknown or the log file cannot be
/// opened.
pub fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(&config.log_level)?;

    if tracing::dispatcher::has_been_set() {
        return Ok(None);
    }

    let (writer, guard) = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(writer);

    let installed = match config.log_format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LogFormat::Plain => tracing::subscriber::set_global_default(builder.finish()),
    };
    if installed.is_err() {
        // Lost a race with another installer; our writer receives nothing.
        return Ok(None);
    }

    Ok(guard)
}

/// Parses a case-insensitive log level name.
///
/// # Errors
///
/// Returns [`AppError::InvalidLogLevel`] for unknown names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(AppError::InvalidLogLevel(other.to_string())),
    }
}
