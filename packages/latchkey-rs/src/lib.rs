//! # Latchkey
//!
//! An observable login flow where repositories verify credentials, view
//! models publish the result, and observers watch it resolve.
//!
//! ## Core Concepts
//!
//! Latchkey separates **verification** from **observation**:
//! - [`LoginRepository`] = Verification (does this credential pair check out?)
//! - [`LoginViewModel`] = Observation (two slots, published atomically)
//!
//! The key principle: **One attempt = One resolution = One snapshot**.
//! A `login` call dispatches exactly one verification, which resolves
//! exactly once, which publishes exactly one [`LoginState`].
//!
//! ## Architecture
//!
//! ```text
//! Caller
//!     │
//!     ▼ login(criteria, repository)
//! LoginViewModel ──spawn──► LoginRepository::try_login()
//!     │                             │
//!     │                             ▼ resolves once
//!     │◄──── LoginState { logged_user | error } ────┐
//!     │                                             │
//!     ▼ watch channel                               ▼
//! subscribers (UI, tests)              LoginTap::on_resolved()
//! ```
//!
//! ## Key Invariants
//!
//! 1. **Slots start empty** - both `logged_user` and `error` are `None`
//!    until the first attempt resolves
//! 2. **Exactly one slot after resolution** - success populates the user and
//!    clears the error; failure does the reverse; never both, never neither
//! 3. **Atomic pair updates** - both slots travel in one snapshot; observers
//!    never see a half-updated pair
//! 4. **Nothing before resolution** - `login` publishes no state until the
//!    repository resolves
//! 5. **Terminal until overwritten** - a resolved snapshot persists until
//!    the next attempt resolves; overlap is last-write-wins
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use latchkey::LoginViewModel;
//! use latchkey::testing::{Credentials, FakeLoginRepository};
//!
//! let view_model = LoginViewModel::new();
//! let mut updates = view_model.subscribe();
//!
//! view_model.login(
//!     Credentials::new("firstUser", "firstPass"),
//!     Arc::new(FakeLoginRepository::new()),
//! );
//!
//! updates.changed().await?;
//! let state = updates.borrow().clone();
//! assert!(state.logged_user.is_some());
//! assert!(state.error.is_none());
//! ```
//!
//! ## What This Is Not
//!
//! Latchkey is **not**:
//! - A session manager
//! - A credential store
//! - A retry or timeout policy
//! - A network stack
//!
//! Latchkey **is**:
//! > An observable login flow where repositories verify credentials, view
//! > models publish the result, and observers watch it resolve.

// Core modules
mod error;
mod repository;
mod state;
mod tap;
mod view_model;


// Fixture repositories (feature-gated)
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export error types
pub use crate::error::{
    LoginError, AUTH_ERROR_DOMAIN, AUTH_FAILED_CODE, CANNOT_CONNECT_TO_HOST,
    TRANSPORT_ERROR_DOMAIN,
};

// Re-export the repository seam
pub use crate::repository::LoginRepository;

// Re-export observable state types
pub use crate::state::{AttemptId, LoginState};

// Re-export tap types (resolution observation)
pub use crate::tap::{LoginTap, TapContext};

// Re-export view model types (primary entry point)
pub use crate::view_model::{LoginViewModel, LoginViewModelBuilder};

// Re-export commonly used external types
pub use async_trait::async_trait;
