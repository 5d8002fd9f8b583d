// Rust guideline compliant 2026-10-17

//! Plain loading state: idle, loading, a result or an error.

use crate::failure::Failure;
use crate::phase::{Phase, ResultState};
use std::fmt;

/// Lifecycle of a single asynchronous fetch.
///
/// Expected usage is Idle → Loading → {Result | Error}, but the type does
/// not enforce it.
#[derive(Debug, Clone)]
pub enum LoadingState<T, E = Failure> {
    /// No operation has started.
    Idle,
    /// Operation in flight.
    Loading,
    /// Operation completed with a payload.
    Result(T),
    /// Operation failed.
    Error(E),
}

impl<T, E> LoadingState<T, E> {
    /// Returns true for Idle or Loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Idle | LoadingState::Loading)
    }

    /// Returns true only for Result.
    #[must_use]
    pub fn is_result(&self) -> bool {
        matches!(self, LoadingState::Result(_))
    }

    /// Returns the payload of a Result.
    #[must_use]
    pub fn result(&self) -> Option<&T> {
        match self {
            LoadingState::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the failure of an Error.
    #[must_use]
    pub fn error(&self) -> Option<&E> {
        match self {
            LoadingState::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the payload of a Result.
    #[deprecated(note = "use `result` instead")]
    #[must_use]
    pub fn success_result(&self) -> Option<&T> {
        self.result()
    }

    /// Returns the failure of an Error.
    #[deprecated(note = "use `error` instead")]
    #[must_use]
    pub fn failure_error(&self) -> Option<&E> {
        self.error()
    }

    /// Consumes the state and returns its payload, if any.
    pub fn into_result(self) -> Option<T> {
        match self {
            LoadingState::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Transforms the payload, keeping every other variant as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadingState<U, E> {
        match self {
            LoadingState::Idle => LoadingState::Idle,
            LoadingState::Loading => LoadingState::Loading,
            LoadingState::Result(result) => LoadingState::Result(f(result)),
            LoadingState::Error(error) => LoadingState::Error(error),
        }
    }
}

impl<T, E> Default for LoadingState<T, E> {
    fn default() -> Self {
        LoadingState::Idle
    }
}

impl<T, E> From<Result<T, E>> for LoadingState<T, E> {
    fn from(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(result) => LoadingState::Result(result),
            Err(error) => LoadingState::Error(error),
        }
    }
}

impl<T, E> ResultState for LoadingState<T, E> {
    fn phase(&self) -> Phase {
        match self {
            LoadingState::Idle => Phase::Idle,
            LoadingState::Loading => Phase::Loading,
            LoadingState::Result(_) => Phase::Result,
            LoadingState::Error(_) => Phase::Error,
        }
    }

    fn is_loading(&self) -> bool {
        LoadingState::is_loading(self)
    }

    fn has_content(&self) -> bool {
        self.is_result()
    }
}

// Errors compare by rendered text, not identity.
impl<T: PartialEq, E: fmt::Display> PartialEq for LoadingState<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LoadingState::Idle, LoadingState::Idle) => true,
            (LoadingState::Loading, LoadingState::Loading) => true,
            (LoadingState::Result(lhs), LoadingState::Result(rhs)) => lhs == rhs,
            (LoadingState::Error(lhs), LoadingState::Error(rhs)) => {
                lhs.to_string() == rhs.to_string()
            }
            _ => false,
        }
    }
}

impl<T: Eq, E: fmt::Display> Eq for LoadingState<T, E> {}
