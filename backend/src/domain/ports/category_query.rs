//! Driving port for listing categories.

use async_trait::async_trait;

use crate::domain::{Category, Error};

/// Driving port for listing categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryQuery: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, Error>;
}
