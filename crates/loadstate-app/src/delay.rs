// Rust guideline compliant 2026-10-17

//! Delayed execution on the current tokio runtime.

use crate::error::{AppError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Runs `execute` on the current runtime after `time` has elapsed.
///
/// Dropping the returned handle does not cancel the call; abort it instead.
///
/// # Errors
///
/// Returns [`AppError::NoRuntime`] when called outside a tokio runtime.
pub fn delay<F>(time: Duration, execute: F) -> Result<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    delay_async(time, async move { execute() })
}

/// Polls `future` on the current runtime after `time` has elapsed.
///
/// # Errors
///
/// Returns [`AppError::NoRuntime`] when called outside a tokio runtime.
pub fn delay_async<Fut>(time: Duration, future: Fut) -> Result<JoinHandle<Fut::Output>>
where
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    let handle = Handle::try_current().map_err(|_| AppError::NoRuntime)?;
    Ok(handle.spawn(async move {
        tokio::time::sleep(time).await;
        future.await
    }))
}
