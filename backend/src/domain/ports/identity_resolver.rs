//! Port mapping bearer tokens to caller identities.
//!
//! Resolution is synchronous because it runs inside the request extractor
//! and must not touch I/O. Swap the implementation to plug in real token
//! verification.

use crate::domain::{CallerIdentity, Error, UserId};

/// User bound to the administrator token.
pub const ADMIN_USER_ID: UserId = UserId::new(1);
/// User bound to every other token.
pub const DEFAULT_USER_ID: UserId = UserId::new(2);

/// Maps a bearer token to the calling user.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityResolver: Send + Sync {
    /// Resolve the token extracted from an `Authorization: Bearer` header.
    fn resolve(&self, token: &str) -> Result<CallerIdentity, Error>;
}

/// Demonstration resolver: the configured admin token names user 1 and any
/// other token, including an empty one, names user 2.
///
/// # Examples
/// ```
/// use taskboard::domain::UserId;
/// use taskboard::domain::ports::{IdentityResolver, StaticTokenResolver};
///
/// let resolver = StaticTokenResolver::new("admin-token");
/// let caller = resolver.resolve("admin-token").unwrap();
/// assert_eq!(caller.id(), UserId::new(1));
/// ```
#[derive(Debug, Clone)]
pub struct StaticTokenResolver {
    admin_token: String,
}

impl StaticTokenResolver {
    /// Create a resolver mapping `admin_token` to the administrator.
    pub fn new(admin_token: impl Into<String>) -> Self {
        Self {
            admin_token: admin_token.into(),
        }
    }
}

impl IdentityResolver for StaticTokenResolver {
    fn resolve(&self, token: &str) -> Result<CallerIdentity, Error> {
        let id = if token == self.admin_token {
            ADMIN_USER_ID
        } else {
            DEFAULT_USER_ID
        };
        Ok(CallerIdentity::new(id))
    }
}
