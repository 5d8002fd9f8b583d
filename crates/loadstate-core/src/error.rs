// Rust guideline compliant 2026-10-17

//! Error types for the Loadstate core library.

use thiserror::Error;

/// Result type alias for Loadstate core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Loadstate core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
