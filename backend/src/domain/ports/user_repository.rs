//! Port abstraction for user lookups and their errors.
use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "user store unavailable: {message}",
    }
}

/// Read access to registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;
}
