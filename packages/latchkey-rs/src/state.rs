//! Observable login state and attempt identity.
//!
//! [`LoginState`] is the unit of observation: one snapshot carrying both
//! slots, published whole so observers never see a half-updated pair.
//! [`AttemptId`] correlates a `login` call with the snapshot it produced.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LoginError;

/// Identity of a single `login` call.
///
/// Stamped onto the resolved snapshot so observers and taps can tell which
/// attempt produced the values they are looking at. Overlapping attempts on
/// one view model are last-write-wins; the id is how you notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(Uuid);

impl AttemptId {
    /// Create a new random attempt id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Snapshot of a view model's observable slots.
///
/// # Invariant
///
/// After any resolved attempt exactly one of `logged_user` / `error` is
/// populated. Before the first resolution both are empty and `attempt` is
/// `None`. The slots only ever change together, in one snapshot.
#[derive(Debug, Clone)]
pub struct LoginState<U> {
    /// The authenticated user, when the last resolved attempt succeeded.
    pub logged_user: Option<U>,
    /// The failure, when the last resolved attempt did not.
    pub error: Option<LoginError>,
    /// Which `login` call produced this snapshot.
    pub attempt: Option<AttemptId>,
}

impl<U> LoginState<U> {
    /// The empty pre-attempt state.
    pub(crate) fn idle() -> Self {
        Self {
            logged_user: None,
            error: None,
            attempt: None,
        }
    }

    /// Build the terminal snapshot for a resolved attempt.
    pub(crate) fn resolved(attempt: AttemptId, outcome: Result<U, LoginError>) -> Self {
        match outcome {
            Ok(user) => Self {
                logged_user: Some(user),
                error: None,
                attempt: Some(attempt),
            },
            Err(err) => Self {
                logged_user: None,
                error: Some(err),
                attempt: Some(attempt),
            },
        }
    }

    /// True once some attempt has resolved.
    pub fn is_resolved(&self) -> bool {
        self.attempt.is_some()
    }
}

impl<U> Default for LoginState<U> {
    fn default() -> Self {
        Self::idle()
    }
}
