//! Read-only port for task categories.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "category store unavailable: {message}",
    }
}

/// Read access to the fixed category list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category in insertion order.
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Look up a single category.
    async fn find(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepositoryError>;
}
