// Rust guideline compliant 2026-10-17

//! Single-writer cell holding the current loading state.
//!
//! A caller starts each request with [`StateCell::begin`], which installs the
//! in-flight state and returns a [`RequestToken`]. Completing with a token
//! that is no longer the latest is a no-op, so a slow fetch cannot overwrite
//! the outcome of a newer search.
//!
//! Every write runs inside the watch channel's lock, and the token check
//! happens in that same critical section. The cell never validates which
//! transitions are legal.

use loadstate_core::{Config, ResultState};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Identifier of one request issued through a [`StateCell`].
///
/// Tokens grow monotonically; only the most recent one can complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Returns the raw epoch number.
    #[must_use]
    pub fn epoch(self) -> u64 {
        self.0
    }
}

/// Outcome of [`StateCell::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The state was replaced and observers were notified.
    Applied,
    /// The token was current but the new state equals the old one.
    Unchanged,
    /// A newer request superseded this token; the state was left untouched.
    Stale,
}

/// Holder of the current state for one logical operation.
pub struct StateCell<S> {
    sender: watch::Sender<S>,
    epoch: AtomicU64,
    label: String,
    log_transitions: bool,
}

impl<S> StateCell<S>
where
    S: ResultState + Clone + PartialEq,
{
    /// Creates a cell holding `initial`, with transition logging enabled.
    pub fn new(initial: S) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            epoch: AtomicU64::new(0),
            label: "state".to_string(),
            log_transitions: true,
        }
    }

    /// Creates a cell whose logging follows `config`.
    pub fn with_config(initial: S, config: &Config) -> Self {
        let mut cell = Self::new(initial);
        cell.log_transitions = config.log_transitions;
        cell
    }

    /// Sets the name attached to this cell's log events.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn current(&self) -> S {
        self.sender.borrow().clone()
    }

    /// Returns a receiver notified whenever the state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }

    /// Returns the most recently issued token, if any request has begun.
    #[must_use]
    pub fn latest_token(&self) -> Option<RequestToken> {
        match self.epoch.load(Ordering::SeqCst) {
            0 => None,
            epoch => Some(RequestToken(epoch)),
        }
    }

    /// Overwrites the state without touching outstanding tokens.
    ///
    /// Returns false when the new state equals the old one, in which case
    /// observers are not notified.
    pub fn set(&self, state: S) -> bool {
        self.sender
            .send_if_modified(|current| self.replace(current, state))
    }

    /// Installs an in-flight state and issues a token that supersedes all
    /// earlier ones.
    pub fn begin(&self, in_flight: S) -> RequestToken {
        let mut token = RequestToken(0);
        self.sender.send_if_modified(|current| {
            token = RequestToken(self.epoch.fetch_add(1, Ordering::SeqCst) + 1);
            self.replace(current, in_flight)
        });
        token
    }

    /// Applies `outcome` if `token` is still the latest request.
    pub fn complete(&self, token: RequestToken, outcome: S) -> Completion {
        let mut completion = Completion::Stale;
        self.sender.send_if_modified(|current| {
            let latest = self.epoch.load(Ordering::SeqCst);
            if token.0 != latest {
                if self.log_transitions {
                    tracing::debug!(
                        cell = %self.label,
                        token = token.0,
                        latest,
                        discarded = %outcome.phase(),
                        "stale completion discarded"
                    );
                }
                return false;
            }
            if self.replace(current, outcome) {
                completion = Completion::Applied;
                true
            } else {
                completion = Completion::Unchanged;
                false
            }
        });
        completion
    }

    /// Supersedes every outstanding token without changing the state.
    pub fn cancel(&self) {
        self.sender.send_if_modified(|_| {
            self.epoch.fetch_add(1, Ordering::SeqCst);
            false
        });
    }

    fn replace(&self, current: &mut S, next: S) -> bool {
        if *current == next {
            return false;
        }
        if self.log_transitions {
            tracing::debug!(
                cell = %self.label,
                from = %current.phase(),
                to = %next.phase(),
                "state transition"
            );
        }
        *current = next;
        true
    }
}

impl<S> Default for StateCell<S>
where
    S: ResultState + Clone + PartialEq + Default,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}
