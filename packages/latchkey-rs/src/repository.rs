//! The repository seam - credential verification lives behind this trait.
//!
//! A repository is the only component that knows how to check credentials.
//! The view model calls [`LoginRepository::try_login`] once per attempt and
//! consumes its single resolution. Everything about *how* verification
//! happens - network protocol, backing store, latency - is the repository's
//! business.
//!
//! # Key Properties
//!
//! - **One call, one resolution**: the returned future resolves exactly once
//! - **Opaque shapes**: credential and user types are associated types; the
//!   view model treats both as values it never inspects
//! - **No observable state**: repositories verify, view models publish

use async_trait::async_trait;

use crate::error::LoginError;

/// External collaborator that verifies credentials.
///
/// Implementations decide what counts as valid credentials and what a user
/// value looks like. Invalid credentials resolve to
/// [`LoginError::AuthFailed`]; connectivity problems resolve to
/// [`LoginError::Transport`] with the transport layer's own code.
///
/// # Example
///
/// ```ignore
/// struct DirectoryRepository {
///     directory: Arc<UserDirectory>,
/// }
///
/// #[async_trait]
/// impl LoginRepository for DirectoryRepository {
///     type Credentials = Credentials;
///     type User = UserRecord;
///
///     async fn try_login(&self, credentials: Credentials) -> Result<UserRecord, LoginError> {
///         match self.directory.verify(&credentials).await {
///             Ok(user) => Ok(user),
///             Err(DirectoryError::Rejected) => Err(LoginError::AuthFailed),
///             Err(DirectoryError::Unreachable(code)) => Err(LoginError::Transport {
///                 code,
///                 message: "directory unreachable".to_string(),
///             }),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait LoginRepository: Send + Sync + 'static {
    /// Credential shape this repository understands.
    type Credentials: Send + 'static;

    /// User value produced on successful verification.
    type User: Clone + Send + Sync + 'static;

    /// Verify the supplied credentials.
    ///
    /// Resolution may be delayed (a real implementation crosses a network).
    /// The view model awaits this on a background task, so implementations
    /// are free to take their time.
    async fn try_login(&self, credentials: Self::Credentials) -> Result<Self::User, LoginError>;
}
