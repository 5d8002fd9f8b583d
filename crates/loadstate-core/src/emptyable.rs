// Rust guideline compliant 2026-10-17

//! Empty-aware loading state.
//!
//! `Empty` is a successful outcome with nothing to show. Keeping it as its
//! own variant lets callers render a "nothing found" view without requiring
//! the payload type to know whether it is empty.

use crate::failure::Failure;
use crate::phase::{Phase, ResultState};
use std::fmt;

/// Lifecycle of a fetch that may legitimately return no data.
#[derive(Debug, Clone)]
pub enum EmptyableLoadingState<T, E = Failure> {
    /// No operation has started.
    Idle,
    /// Operation in flight.
    Loading,
    /// Operation completed with a payload.
    Result(T),
    /// Operation completed with no data.
    Empty,
    /// Operation failed.
    Error(E),
}

impl<T, E> EmptyableLoadingState<T, E> {
    /// Builds a terminal state from an optional outcome; `Ok(None)` is Empty.
    pub fn from_option(outcome: Result<Option<T>, E>) -> Self {
        match outcome {
            Ok(Some(result)) => EmptyableLoadingState::Result(result),
            Ok(None) => EmptyableLoadingState::Empty,
            Err(error) => EmptyableLoadingState::Error(error),
        }
    }

    /// Returns true for Idle or Loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            EmptyableLoadingState::Idle | EmptyableLoadingState::Loading
        )
    }

    /// Returns true only for Result.
    #[must_use]
    pub fn is_result(&self) -> bool {
        matches!(self, EmptyableLoadingState::Result(_))
    }

    /// Returns true only for Empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, EmptyableLoadingState::Empty)
    }

    /// Returns true only for Result; Empty has no content.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.is_result()
    }

    /// Returns the payload of a Result.
    #[must_use]
    pub fn success_result(&self) -> Option<&T> {
        match self {
            EmptyableLoadingState::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the failure of an Error.
    #[must_use]
    pub fn failure_error(&self) -> Option<&E> {
        match self {
            EmptyableLoadingState::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Consumes the state and returns its payload, if any.
    pub fn into_result(self) -> Option<T> {
        match self {
            EmptyableLoadingState::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Transforms the payload, keeping every other variant as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> EmptyableLoadingState<U, E> {
        match self {
            EmptyableLoadingState::Idle => EmptyableLoadingState::Idle,
            EmptyableLoadingState::Loading => EmptyableLoadingState::Loading,
            EmptyableLoadingState::Result(result) => EmptyableLoadingState::Result(f(result)),
            EmptyableLoadingState::Empty => EmptyableLoadingState::Empty,
            EmptyableLoadingState::Error(error) => EmptyableLoadingState::Error(error),
        }
    }
}

impl<T, E> Default for EmptyableLoadingState<T, E> {
    fn default() -> Self {
        EmptyableLoadingState::Idle
    }
}

impl<T, E> From<Result<T, E>> for EmptyableLoadingState<T, E> {
    fn from(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(result) => EmptyableLoadingState::Result(result),
            Err(error) => EmptyableLoadingState::Error(error),
        }
    }
}

impl<T, E> ResultState for EmptyableLoadingState<T, E> {
    fn phase(&self) -> Phase {
        match self {
            EmptyableLoadingState::Idle => Phase::Idle,
            EmptyableLoadingState::Loading => Phase::Loading,
            EmptyableLoadingState::Result(_) => Phase::Result,
            EmptyableLoadingState::Empty => Phase::Empty,
            EmptyableLoadingState::Error(_) => Phase::Error,
        }
    }

    fn is_loading(&self) -> bool {
        EmptyableLoadingState::is_loading(self)
    }

    fn has_content(&self) -> bool {
        EmptyableLoadingState::has_content(self)
    }
}

impl<T: PartialEq, E: fmt::Display> PartialEq for EmptyableLoadingState<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EmptyableLoadingState::Idle, EmptyableLoadingState::Idle) => true,
            (EmptyableLoadingState::Loading, EmptyableLoadingState::Loading) => true,
            (EmptyableLoadingState::Empty, EmptyableLoadingState::Empty) => true,
            (EmptyableLoadingState::Result(lhs), EmptyableLoadingState::Result(rhs)) => lhs == rhs,
            (EmptyableLoadingState::Error(lhs), EmptyableLoadingState::Error(rhs)) => {
                lhs.to_string() == rhs.to_string()
            }
            _ => false,
        }
    }
}

impl<T: Eq, E: fmt::Display> Eq for EmptyableLoadingState<T, E> {}
