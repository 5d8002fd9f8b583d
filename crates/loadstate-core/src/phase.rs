// Rust guideline compliant 2026-10-17

//! Discriminants shared by every loading-state family.
//!
//! A `Phase` names the active variant of a state without its payload. It
//! classifies variants into three groups:
//!
//! - In progress: Idle, Loading, Search
//! - Terminal success: Result, Empty, SearchResult, SearchEmpty
//! - Terminal failure: Error

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload-free name of a loading-state variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No operation has started.
    Idle,
    /// An operation is in flight.
    Loading,
    /// An operation completed with a payload.
    Result,
    /// An operation completed with no data.
    Empty,
    /// A search is in flight.
    Search,
    /// A search completed with a payload.
    SearchResult,
    /// A search completed with no results.
    SearchEmpty,
    /// An operation failed.
    Error,
}

impl Phase {
    /// Returns true for phases that represent a completed outcome.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Idle | Phase::Loading | Phase::Search)
    }

    /// Returns true for successful terminal phases, including the empty ones.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(
            self,
            Phase::Result | Phase::Empty | Phase::SearchResult | Phase::SearchEmpty
        )
    }

    /// Returns true only for the failure phase.
    #[must_use]
    pub fn is_failure(self) -> bool {
        self == Phase::Error
    }

    /// Stable snake_case name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Result => "result",
            Phase::Empty => "empty",
            Phase::Search => "search",
            Phase::SearchResult => "search_result",
            Phase::SearchEmpty => "search_empty",
            Phase::Error => "error",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Queries shared by the plain, empty-aware and search-aware states.
///
/// Implementations are pure projections of the active variant. They never
/// validate or restrict transitions: any state may replace any other.
pub trait ResultState {
    /// Returns the payload-free name of the active variant.
    fn phase(&self) -> Phase;

    /// Returns true while nothing usable is available yet.
    ///
    /// Idle counts as loading so a UI shows its loading skeleton before the
    /// first request starts.
    fn is_loading(&self) -> bool;

    /// Returns true when the state carries a usable payload.
    fn has_content(&self) -> bool;

    /// Returns true for completed outcomes, success or failure.
    fn is_terminal(&self) -> bool {
        self.phase().is_terminal()
    }
}
