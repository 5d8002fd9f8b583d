// Rust guideline compliant 2026-10-17

//! Error handling for Loadstate application services.

use loadstate_core::Error as CoreError;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid log level provided.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Called outside a tokio runtime.
    #[error("No tokio runtime is running on this thread")]
    NoRuntime,

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
