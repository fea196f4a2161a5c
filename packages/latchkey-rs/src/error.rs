//! Structured login errors with a stable domain/code identity.
//!
//! The view model never classifies or rewrites failures. A repository
//! produces a [`LoginError`], and the view model stores it verbatim in the
//! observable `error` slot. Two categories exist:
//!
//! - [`LoginError::AuthFailed`] - credential rejection, fixed domain and code
//! - [`LoginError::Transport`] - connectivity failure, code passed through
//!   from whatever transport layer the repository wraps
//!
//! # The Completion Channel Rule
//!
//! > **Errors never cross the `login` boundary as panics or return values.**
//!
//! Failures travel the same channel as success and become observable state.
//! Callers detect failure by the shape of the published snapshot (empty
//! user, populated error), not by catching anything.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain identifier for credential rejections.
pub const AUTH_ERROR_DOMAIN: &str = "latchkey.auth-error";

/// Domain identifier for transport-level failures.
pub const TRANSPORT_ERROR_DOMAIN: &str = "latchkey.transport-error";

/// Code reported for rejected credentials. Mirrors HTTP 401.
pub const AUTH_FAILED_CODE: i32 = 401;

/// Transport code for a host that cannot be reached.
pub const CANNOT_CONNECT_TO_HOST: i32 = -1004;

/// Error delivered through the login completion channel.
///
/// # Identity
///
/// Every error carries a stable `(domain, code)` pair via [`domain`] and
/// [`code`]. Credential rejections always report
/// ([`AUTH_ERROR_DOMAIN`], [`AUTH_FAILED_CODE`]) with no further payload.
/// Transport failures report [`TRANSPORT_ERROR_DOMAIN`] plus whatever code
/// and message the repository's transport layer produced, unmodified.
///
/// [`domain`]: LoginError::domain
/// [`code`]: LoginError::code
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LoginError {
    /// The repository rejected the supplied credentials.
    #[error("authentication failed")]
    AuthFailed,

    /// The repository could not reach whatever verifies credentials.
    #[error("transport failure ({code}): {message}")]
    Transport {
        /// Transport-layer code, forwarded without interpretation.
        code: i32,
        /// Transport-layer message, forwarded without interpretation.
        message: String,
    },
}

impl LoginError {
    /// Transport error for an unreachable host.
    pub fn cannot_connect_to_host() -> Self {
        Self::Transport {
            code: CANNOT_CONNECT_TO_HOST,
            message: "cannot connect to host".to_string(),
        }
    }

    /// Stable domain identifier for this error.
    pub fn domain(&self) -> &'static str {
        match self {
            Self::AuthFailed => AUTH_ERROR_DOMAIN,
            Self::Transport { .. } => TRANSPORT_ERROR_DOMAIN,
        }
    }

    /// Stable numeric code for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::AuthFailed => AUTH_FAILED_CODE,
            Self::Transport { code, .. } => *code,
        }
    }

    /// True for credential rejections.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthFailed)
    }
}
