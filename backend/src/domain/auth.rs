//! Authentication primitives: login credentials, sessions and the identity
//! attached to authenticated requests.

use serde::Serialize;
use zeroize::Zeroizing;

use super::{User, UserId};

/// Identity derived from a bearer token for the lifetime of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    id: UserId,
}

impl CallerIdentity {
    /// Identify the caller as `id`.
    pub const fn new(id: UserId) -> Self {
        Self { id }
    }

    /// User the request acts on behalf of.
    pub const fn id(&self) -> UserId {
        self.id
    }
}

/// Email and password submitted to the login endpoint.
///
/// Missing fields are carried as empty strings; they can never match an
/// account, so rejecting them is left to the login service.
///
/// # Examples
/// ```
/// use taskboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new("user@example.com", "user123");
/// assert_eq!(creds.email(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Wrap submitted credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Submitted email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Submitted password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Token issued by a successful login together with the user it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginSession {
    token: String,
    user: User,
}

impl LoginSession {
    /// Pair an issued token with its user.
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// Bearer token to present on subsequent requests.
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// User the token resolves to.
    pub fn user(&self) -> &User {
        &self.user
    }
}
