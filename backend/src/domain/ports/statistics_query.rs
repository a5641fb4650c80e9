//! Driving port for aggregate task statistics.

use async_trait::async_trait;

use crate::domain::{CompletedPerDay, Error, UserProductivity};

/// Driving port for the statistics endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatisticsQuery: Send + Sync {
    /// Completed tasks across all owners grouped by creation date.
    async fn completed_per_day(&self) -> Result<CompletedPerDay, Error>;

    /// Completion figures for every user.
    async fn productivity(&self) -> Result<Vec<UserProductivity>, Error>;
}
