//! Login taps - observe resolved attempts without touching them.
//!
//! Taps are the extension point for logging, metrics, and forwarding login
//! outcomes to external systems. They run **after** the snapshot is
//! published, so a tap always sees exactly what subscribers see.
//!
//! # Execution Order
//!
//! ```text
//! Repository resolves
//!  → snapshot published (watch channel)
//!  → taps ← here (observe the committed snapshot)
//! ```
//!
//! Taps are fire-and-forget: each runs on its own task, errors are logged
//! and dropped, and neither the published state nor other taps are affected.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::state::{AttemptId, LoginState};

/// Context provided to login taps.
///
/// Intentionally minimal - taps observe, they don't act. No publisher
/// handle, no repository access, no state mutation.
pub struct TapContext {
    /// The attempt that resolved.
    pub attempt: AttemptId,
    /// When this tap execution started.
    pub timestamp: Instant,
}

impl TapContext {
    pub(crate) fn new(attempt: AttemptId) -> Self {
        Self {
            attempt,
            timestamp: Instant::now(),
        }
    }
}

/// Trait for observing resolved login attempts.
///
/// Called once per resolution with the published snapshot. Errors are
/// logged but do not affect the login flow - don't rely on a tap's success.
///
/// # Example
///
/// ```ignore
/// struct AuditTap {
///     sink: AuditSink,
/// }
///
/// #[async_trait]
/// impl LoginTap<UserRecord> for AuditTap {
///     async fn on_resolved(&self, state: &LoginState<UserRecord>, ctx: &TapContext) -> Result<()> {
///         self.sink.record(ctx.attempt, state.error.is_none()).await?;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait LoginTap<U>: Send + Sync + 'static {
    /// Called when an attempt resolves, with the snapshot that was published.
    async fn on_resolved(&self, state: &LoginState<U>, ctx: &TapContext) -> Result<()>;
}

/// Registry of taps attached to one view model.
pub(crate) struct TapRegistry<U> {
    taps: Vec<Arc<dyn LoginTap<U>>>,
}

impl<U: Clone + Send + Sync + 'static> TapRegistry<U> {
    pub fn new() -> Self {
        Self { taps: Vec::new() }
    }

    /// Attach a tap.
    pub fn register(&mut self, tap: Arc<dyn LoginTap<U>>) {
        self.taps.push(tap);
    }

    /// Run every tap against the published snapshot.
    ///
    /// Each tap runs on its own spawned task so a slow tap cannot delay
    /// the others or the caller.
    pub fn run_all(&self, state: &LoginState<U>, attempt: AttemptId) {
        for tap in &self.taps {
            let tap = Arc::clone(tap);
            let state = state.clone();
            tokio::spawn(async move {
                let ctx = TapContext::new(attempt);
                if let Err(e) = tap.on_resolved(&state, &ctx).await {
                    warn!(attempt = %ctx.attempt, error = %e, "login tap failed");
                }
            });
        }
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }
}

impl<U> fmt::Debug for TapRegistry<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapRegistry")
            .field("tap_count", &self.taps.len())
            .finish()
    }
}
