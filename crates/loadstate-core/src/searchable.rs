// Rust guideline compliant 2026-10-17

//! Search-aware loading state.
//!
//! Adds search variants on top of the empty-aware model. Expected flows:
//!
//! - Fetch: Idle → Loading → {Result | Empty | Error}
//! - Search: {Idle | Result | Empty} → Search → {SearchResult | SearchEmpty | Error}
//!
//! The flows are a caller-level protocol. Any variant may replace any other.

use crate::failure::Failure;
use crate::phase::{Phase, ResultState};
use std::fmt;

/// Lifecycle of a fetch that can also be narrowed by a search query.
#[derive(Debug, Clone)]
pub enum SearchableLoadingState<T, E = Failure> {
    /// No operation has started.
    Idle,
    /// Fetch in flight.
    Loading,
    /// Fetch completed with a payload.
    Result(T),
    /// Search in flight for `query`.
    Search {
        /// Query being searched.
        query: String,
    },
    /// Search for `query` completed with a payload.
    SearchResult {
        /// Query that produced the result.
        query: String,
        /// Search payload.
        result: T,
    },
    /// Search for `query` completed with no results.
    SearchEmpty {
        /// Query that found nothing.
        query: String,
    },
    /// Fetch completed with no data.
    Empty,
    /// Fetch or search failed.
    Error(E),
}

impl<T, E> SearchableLoadingState<T, E> {
    /// Starts a search for `query`.
    pub fn search(query: impl Into<String>) -> Self {
        SearchableLoadingState::Search {
            query: query.into(),
        }
    }

    /// Builds the outcome of a search; `Ok(None)` is SearchEmpty.
    pub fn from_search(query: impl Into<String>, outcome: Result<Option<T>, E>) -> Self {
        match outcome {
            Ok(Some(result)) => SearchableLoadingState::SearchResult {
                query: query.into(),
                result,
            },
            Ok(None) => SearchableLoadingState::SearchEmpty {
                query: query.into(),
            },
            Err(error) => SearchableLoadingState::Error(error),
        }
    }

    /// Builds the outcome of a plain fetch; `Ok(None)` is Empty.
    pub fn from_option(outcome: Result<Option<T>, E>) -> Self {
        match outcome {
            Ok(Some(result)) => SearchableLoadingState::Result(result),
            Ok(None) => SearchableLoadingState::Empty,
            Err(error) => SearchableLoadingState::Error(error),
        }
    }

    /// Returns true for Idle, Loading or Search.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            SearchableLoadingState::Idle
                | SearchableLoadingState::Loading
                | SearchableLoadingState::Search { .. }
        )
    }

    /// Returns true only while a search is in flight.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        matches!(self, SearchableLoadingState::Search { .. })
    }

    /// Returns true only for Result.
    #[must_use]
    pub fn is_result(&self) -> bool {
        matches!(self, SearchableLoadingState::Result(_))
    }

    /// Returns true only for SearchResult.
    #[must_use]
    pub fn is_search_result(&self) -> bool {
        matches!(self, SearchableLoadingState::SearchResult { .. })
    }

    /// Returns true only for SearchEmpty.
    #[must_use]
    pub fn is_search_empty(&self) -> bool {
        matches!(self, SearchableLoadingState::SearchEmpty { .. })
    }

    /// Returns true only for Empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, SearchableLoadingState::Empty)
    }

    /// Returns true for Result or SearchResult.
    #[must_use]
    pub fn has_content(&self) -> bool {
        matches!(
            self,
            SearchableLoadingState::Result(_) | SearchableLoadingState::SearchResult { .. }
        )
    }

    /// Returns the payload whether it came from a fetch or a search.
    #[must_use]
    pub fn success_result(&self) -> Option<&T> {
        match self {
            SearchableLoadingState::Result(result) => Some(result),
            SearchableLoadingState::SearchResult { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Returns the query of Search, SearchResult or SearchEmpty.
    #[must_use]
    pub fn search_query(&self) -> Option<&str> {
        match self {
            SearchableLoadingState::Search { query }
            | SearchableLoadingState::SearchResult { query, .. }
            | SearchableLoadingState::SearchEmpty { query } => Some(query),
            _ => None,
        }
    }

    /// Returns the failure of an Error.
    #[must_use]
    pub fn failure_error(&self) -> Option<&E> {
        match self {
            SearchableLoadingState::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Consumes the state and returns its payload, if any.
    pub fn into_result(self) -> Option<T> {
        match self {
            SearchableLoadingState::Result(result)
            | SearchableLoadingState::SearchResult { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Transforms the payload, keeping the variant and query.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SearchableLoadingState<U, E> {
        match self {
            SearchableLoadingState::Idle => SearchableLoadingState::Idle,
            SearchableLoadingState::Loading => SearchableLoadingState::Loading,
            SearchableLoadingState::Result(result) => SearchableLoadingState::Result(f(result)),
            SearchableLoadingState::Search { query } => SearchableLoadingState::Search { query },
            SearchableLoadingState::SearchResult { query, result } => {
                SearchableLoadingState::SearchResult {
                    query,
                    result: f(result),
                }
            }
            SearchableLoadingState::SearchEmpty { query } => {
                SearchableLoadingState::SearchEmpty { query }
            }
            SearchableLoadingState::Empty => SearchableLoadingState::Empty,
            SearchableLoadingState::Error(error) => SearchableLoadingState::Error(error),
        }
    }
}

impl<T, E> Default for SearchableLoadingState<T, E> {
    fn default() -> Self {
        SearchableLoadingState::Idle
    }
}

impl<T, E> From<Result<T, E>> for SearchableLoadingState<T, E> {
    fn from(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(result) => SearchableLoadingState::Result(result),
            Err(error) => SearchableLoadingState::Error(error),
        }
    }
}

impl<T, E> ResultState for SearchableLoadingState<T, E> {
    fn phase(&self) -> Phase {
        match self {
            SearchableLoadingState::Idle => Phase::Idle,
            SearchableLoadingState::Loading => Phase::Loading,
            SearchableLoadingState::Result(_) => Phase::Result,
            SearchableLoadingState::Search { .. } => Phase::Search,
            SearchableLoadingState::SearchResult { .. } => Phase::SearchResult,
            SearchableLoadingState::SearchEmpty { .. } => Phase::SearchEmpty,
            SearchableLoadingState::Empty => Phase::Empty,
            SearchableLoadingState::Error(_) => Phase::Error,
        }
    }

    fn is_loading(&self) -> bool {
        SearchableLoadingState::is_loading(self)
    }

    fn has_content(&self) -> bool {
        SearchableLoadingState::has_content(self)
    }
}

impl<T: PartialEq, E: fmt::Display> PartialEq for SearchableLoadingState<T, E> {
    fn eq(&self, other: &Self) -> bool {
        use crate::searchable::SearchableLoadingState as S;

        match (self, other) {
            (S::Idle, S::Idle) => true,
            (S::Loading, S::Loading) => true,
            (S::Result(lhs), S::Result(rhs)) => lhs == rhs,
            (S::Search { query: lhs }, S::Search { query: rhs }) => lhs == rhs,
            (
                S::SearchResult {
                    query: lhs_query,
                    result: lhs_result,
                },
                S::SearchResult {
                    query: rhs_query,
                    result: rhs_result,
                },
            ) => lhs_query == rhs_query && lhs_result == rhs_result,
            (S::SearchEmpty { query: lhs }, S::SearchEmpty { query: rhs }) => lhs == rhs,
            (S::Empty, S::Empty) => true,
            (S::Error(lhs), S::Error(rhs)) => lhs.to_string() == rhs.to_string(),
            _ => false,
        }
    }
}

impl<T: Eq, E: fmt::Display> Eq for SearchableLoadingState<T, E> {}
