// Rust guideline compliant 2026-10-17

//! Caller-side services for Loadstate.
//!
//! This crate provides the plumbing around the core state values: a
//! single-writer state cell that discards stale completions, delayed
//! execution on the async runtime, and logging setup.

pub mod cell;
pub mod delay;
pub mod error;
pub mod logging;

pub use cell::{Completion, RequestToken, StateCell};
pub use delay::{delay, delay_async};
pub use error::{AppError, Result};
pub use logging::{init_tracing, parse_log_level};
