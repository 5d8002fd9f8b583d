// Rust guideline compliant 2026-10-17

//! Loadstate Core Library
//!
//! This crate provides the value types that describe the lifecycle of an
//! asynchronous load:
//! - Plain, empty-aware and search-aware loading states
//! - The shared `ResultState` queries and the `Phase` discriminant
//! - Opaque failure values compared by their rendered text
//! - Configuration and error types

pub mod config;
pub mod emptyable;
pub mod error;
pub mod failure;
pub mod loading;
pub mod phase;
pub mod searchable;

pub use config::{Config, LogFormat};
pub use emptyable::EmptyableLoadingState;
pub use error::{Error, Result};
pub use failure::{CustomError, Failure, LocalizedError};
pub use loading::LoadingState;
pub use phase::{Phase, ResultState};
pub use searchable::SearchableLoadingState;
