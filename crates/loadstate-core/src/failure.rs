// Rust guideline compliant 2026-10-17

//! Failure values carried by the `Error` variant of a loading state.
//!
//! A state never interprets its failure; it only needs to render it. The
//! rendered text is what state equality compares, so two different causes
//! with the same message make equal states.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Human-readable description of a failure, with optional context.
pub trait LocalizedError: fmt::Display {
    /// Short description of what went wrong.
    fn error_description(&self) -> String {
        self.to_string()
    }

    /// Explanation of why the failure happened.
    fn failure_reason(&self) -> Option<String> {
        None
    }

    /// What the user can do about it.
    fn recovery_suggestion(&self) -> Option<String> {
        None
    }
}

/// Ad-hoc failure with a title and optional detail and suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{title}")]
pub struct CustomError {
    /// Rendered description.
    pub title: String,
    /// Optional failure reason.
    pub detail: Option<String>,
    /// Optional recovery suggestion.
    pub suggestion: Option<String>,
}

impl CustomError {
    /// Creates a new error with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: None,
            suggestion: None,
        }
    }

    /// Sets the failure reason.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the recovery suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl LocalizedError for CustomError {
    fn failure_reason(&self) -> Option<String> {
        self.detail.clone()
    }

    fn recovery_suggestion(&self) -> Option<String> {
        self.suggestion.clone()
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
struct Message(String);

/// Opaque, cheaply cloneable failure value.
///
/// Wraps any `std::error::Error`. `Failure` itself is not an error type so
/// that every error converts into it with `?`.
#[derive(Clone)]
pub struct Failure {
    cause: Arc<dyn StdError + Send + Sync + 'static>,
    reason: Option<String>,
    suggestion: Option<String>,
}

impl Failure {
    /// Wraps an error without localized context.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            cause: Arc::new(error),
            reason: None,
            suggestion: None,
        }
    }

    /// Wraps an error and keeps its failure reason and recovery suggestion.
    pub fn localized<E>(error: E) -> Self
    where
        E: StdError + LocalizedError + Send + Sync + 'static,
    {
        let reason = error.failure_reason();
        let suggestion = error.recovery_suggestion();
        Self {
            cause: Arc::new(error),
            reason,
            suggestion,
        }
    }

    /// Creates a failure from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Returns the text used when comparing error states.
    #[must_use]
    pub fn render(&self) -> String {
        self.cause.to_string()
    }

    /// Attempts to view the wrapped error as a concrete type.
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref::<E>()
    }
}

impl<E> From<E> for Failure
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("cause", &self.cause)
            .field("reason", &self.reason)
            .field("suggestion", &self.suggestion)
            .finish()
    }
}

impl LocalizedError for Failure {
    fn failure_reason(&self) -> Option<String> {
        self.reason.clone()
    }

    fn recovery_suggestion(&self) -> Option<String> {
        self.suggestion.clone()
    }
}
