//! The login view model - one operation, two observable slots.
//!
//! [`LoginViewModel`] mediates between a caller and a [`LoginRepository`]:
//! `login` dispatches one verification to a background task, and when the
//! repository resolves, the view model publishes one [`LoginState`] snapshot
//! on its watch channel. Success sets `logged_user` and clears `error`;
//! failure does the reverse. Nothing is published before resolution.
//!
//! # State Machine
//!
//! ```text
//! idle ──login()──► pending ──repository resolves──► resolved(user | error)
//!                      ▲                                      │
//!                      └───────────── next login() ───────────┘
//! ```
//!
//! Pending is implicit - it is never published. The terminal snapshot
//! persists until the next attempt overwrites it.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::LoginError;
use crate::repository::LoginRepository;
use crate::state::{AttemptId, LoginState};
use crate::tap::{LoginTap, TapRegistry};

/// View model holding observable login-result state.
///
/// Created empty: both slots are `None` until the first attempt resolves.
/// The view model performs no validation, no retries, and no error
/// classification - every repository outcome is forwarded as-is.
///
/// Callers are responsible for not issuing overlapping `login` calls on the
/// same view model if overlap semantics matter; concurrent attempts are
/// last-write-wins, distinguishable by [`AttemptId`].
///
/// # Example
///
/// ```ignore
/// use latchkey::LoginViewModel;
/// use latchkey::testing::{Credentials, FakeLoginRepository};
///
/// let view_model = LoginViewModel::new();
/// let mut updates = view_model.subscribe();
///
/// view_model.login(
///     Credentials::new("firstUser", "firstPass"),
///     Arc::new(FakeLoginRepository::new()),
/// );
///
/// updates.changed().await?;
/// assert!(updates.borrow().logged_user.is_some());
/// ```
pub struct LoginViewModel<U> {
    publisher: watch::Sender<LoginState<U>>,
    taps: Arc<TapRegistry<U>>,
}

impl<U: Clone + Send + Sync + 'static> LoginViewModel<U> {
    /// Create a view model with empty slots and no taps.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a view model.
    pub fn builder() -> LoginViewModelBuilder<U> {
        LoginViewModelBuilder::new()
    }

    /// Dispatch one login attempt.
    ///
    /// Returns immediately with the attempt's id; verification runs on a
    /// background task. Neither slot changes until the repository resolves,
    /// then both change together in one snapshot. At most one snapshot is
    /// published per call.
    ///
    /// There is no cancellation - a dispatched attempt always resolves.
    /// Must be called from within a Tokio runtime.
    pub fn login<R>(&self, criteria: R::Credentials, repository: Arc<R>) -> AttemptId
    where
        R: LoginRepository<User = U>,
    {
        let attempt = AttemptId::new();
        let publisher = self.publisher.clone();
        let taps = Arc::clone(&self.taps);

        debug!(%attempt, "login attempt dispatched");

        tokio::spawn(async move {
            let outcome = repository.try_login(criteria).await;

            if let Err(err) = &outcome {
                warn!(
                    %attempt,
                    domain = err.domain(),
                    code = err.code(),
                    "login attempt failed"
                );
            }

            let state = LoginState::resolved(attempt, outcome);

            // Publish before running taps so taps observe exactly the
            // snapshot subscribers see.
            publisher.send_replace(state.clone());
            taps.run_all(&state, attempt);
        });

        attempt
    }

    /// Subscribe to state snapshots.
    ///
    /// The receiver sees the snapshot current at subscription time and is
    /// notified for every resolution published afterwards.
    pub fn subscribe(&self) -> watch::Receiver<LoginState<U>> {
        self.publisher.subscribe()
    }

    /// Clone of the current snapshot.
    pub fn state(&self) -> LoginState<U> {
        self.publisher.borrow().clone()
    }

    /// The `logged_user` slot: populated after a successful attempt.
    pub fn logged_user(&self) -> Option<U> {
        self.publisher.borrow().logged_user.clone()
    }

    /// The `error` slot: populated after a failed attempt.
    pub fn error(&self) -> Option<LoginError> {
        self.publisher.borrow().error.clone()
    }

    /// Number of active state subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.publisher.receiver_count()
    }
}

impl<U: Clone + Send + Sync + 'static> Default for LoginViewModel<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Clone for LoginViewModel<U> {
    fn clone(&self) -> Self {
        Self {
            publisher: self.publisher.clone(),
            taps: Arc::clone(&self.taps),
        }
    }
}

impl<U> fmt::Debug for LoginViewModel<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginViewModel")
            .field("subscriber_count", &self.publisher.receiver_count())
            .finish_non_exhaustive()
    }
}

/// Builder attaching taps before a view model goes live.
///
/// # Example
///
/// ```ignore
/// let view_model = LoginViewModel::builder()
///     .with_tap(AuditTap::new(sink))
///     .build();
/// ```
pub struct LoginViewModelBuilder<U> {
    taps: TapRegistry<U>,
}

impl<U: Clone + Send + Sync + 'static> LoginViewModelBuilder<U> {
    fn new() -> Self {
        Self {
            taps: TapRegistry::new(),
        }
    }

    /// Attach a tap observing resolved attempts.
    pub fn with_tap<T: LoginTap<U>>(mut self, tap: T) -> Self {
        self.taps.register(Arc::new(tap));
        self
    }

    /// Build the view model with empty slots.
    pub fn build(self) -> LoginViewModel<U> {
        let (publisher, _) = watch::channel(LoginState::idle());
        LoginViewModel {
            publisher,
            taps: Arc::new(self.taps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_view_model_is_empty() {
        let view_model: LoginViewModel<String> = LoginViewModel::new();
        assert!(view_model.logged_user().is_none());
        assert!(view_model.error().is_none());
        assert!(!view_model.state().is_resolved());
    }

    #[test]
    fn test_subscriber_count() {
        let view_model: LoginViewModel<String> = LoginViewModel::new();
        assert_eq!(view_model.subscriber_count(), 0);

        let _r1 = view_model.subscribe();
        assert_eq!(view_model.subscriber_count(), 1);

        let _r2 = view_model.subscribe();
        assert_eq!(view_model.subscriber_count(), 2);
    }

    #[test]
    fn test_clone_shares_publisher() {
        let view_model: LoginViewModel<String> = LoginViewModel::new();
        let clone = view_model.clone();

        let _rx = clone.subscribe();
        assert_eq!(view_model.subscriber_count(), 1);
    }

    #[test]
    fn test_debug_impl() {
        let view_model: LoginViewModel<String> = LoginViewModel::new();
        let rendered = format!("{:?}", view_model);
        assert!(rendered.contains("LoginViewModel"));
        assert!(rendered.contains("subscriber_count"));
    }
}
