//! Test doubles for exercising the login flow without a real backend.
//!
//! # Feature Flag
//!
//! This module is only available with the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! latchkey = { version = "0.1", features = ["testing"] }
//! ```
//!
//! # Fixtures
//!
//! - [`FakeLoginRepository`] - two known accounts, rejects everything else
//! - [`UnreachableHostRepository`] - every attempt fails with a transport
//!   error, simulating a backend that cannot be reached
//!
//! Both resolve after a configurable latency to keep the asynchronous shape
//! of a real backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::error::LoginError;
use crate::repository::LoginRepository;

/// Username/password pair understood by the fixture repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

impl Credentials {
    /// Build a credential pair.
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

/// User record produced by the fixture repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_name: String,
    pub email: String,
    pub phone: String,
}

/// In-memory repository with two known accounts.
///
/// | user name    | password     | email             | phone      |
/// |--------------|--------------|-------------------|------------|
/// | `firstUser`  | `firstPass`  | `user1@users.com` | `12345678` |
/// | `secondUser` | `secondPass` | `user2@users.com` | `87654321` |
///
/// Any other pair resolves to [`LoginError::AuthFailed`].
#[derive(Debug, Clone)]
pub struct FakeLoginRepository {
    latency: Duration,
}

impl FakeLoginRepository {
    /// Fixture with a small default latency.
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(10))
    }

    /// Fixture with a specific resolution delay.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for FakeLoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoginRepository for FakeLoginRepository {
    type Credentials = Credentials;
    type User = UserRecord;

    async fn try_login(&self, credentials: Credentials) -> Result<UserRecord, LoginError> {
        sleep(self.latency).await;

        match (credentials.user_name.as_str(), credentials.password.as_str()) {
            ("firstUser", "firstPass") => Ok(UserRecord {
                user_name: "firstUser".to_string(),
                email: "user1@users.com".to_string(),
                phone: "12345678".to_string(),
            }),
            ("secondUser", "secondPass") => Ok(UserRecord {
                user_name: "secondUser".to_string(),
                email: "user2@users.com".to_string(),
                phone: "87654321".to_string(),
            }),
            _ => Err(LoginError::AuthFailed),
        }
    }
}

/// Repository simulating a backend that cannot be reached.
///
/// Every attempt resolves to [`LoginError::cannot_connect_to_host`],
/// regardless of credentials.
#[derive(Debug, Clone)]
pub struct UnreachableHostRepository {
    latency: Duration,
}

impl UnreachableHostRepository {
    /// Fixture with a small default latency.
    pub fn new() -> Self {
        Self::with_latency(Duration::from_millis(5))
    }

    /// Fixture with a specific resolution delay.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for UnreachableHostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoginRepository for UnreachableHostRepository {
    type Credentials = Credentials;
    type User = UserRecord;

    async fn try_login(&self, _credentials: Credentials) -> Result<UserRecord, LoginError> {
        sleep(self.latency).await;
        Err(LoginError::cannot_connect_to_host())
    }
}
