//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call this port to exchange credentials for a session
//! token without knowing how accounts are stored. Handler tests substitute
//! a double instead of wiring the fixture accounts.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, LoginSession, User};

use super::{ADMIN_USER_ID, DEFAULT_USER_ID};

/// Message returned for every rejected login.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin123";
const USER_EMAIL: &str = "user@example.com";
const USER_PASSWORD: &str = "user123";
const USER_TOKEN: &str = "user-token";

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and issue a session.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginSession, Error>;
}

/// Demonstration authenticator with two hard-coded accounts.
///
/// The administrator receives the configured admin token so that the token
/// resolver maps it back to the same user.
#[derive(Debug, Clone)]
pub struct FixtureLoginService {
    admin_token: String,
}

impl FixtureLoginService {
    /// Create the fixture, issuing `admin_token` to the administrator.
    pub fn new(admin_token: impl Into<String>) -> Self {
        Self {
            admin_token: admin_token.into(),
        }
    }
}

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginSession, Error> {
        match (credentials.email(), credentials.password()) {
            (ADMIN_EMAIL, ADMIN_PASSWORD) => Ok(LoginSession::new(
                self.admin_token.as_str(),
                User::new(ADMIN_USER_ID, "Admin"),
            )),
            (USER_EMAIL, USER_PASSWORD) => Ok(LoginSession::new(
                USER_TOKEN,
                User::new(DEFAULT_USER_ID, "User"),
            )),
            _ => Err(Error::unauthorized(INVALID_CREDENTIALS)),
        }
    }
}
