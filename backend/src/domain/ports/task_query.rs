//! Driving ports for reading and creating tasks.

use async_trait::async_trait;

use crate::domain::{Error, NewTask, Task, TaskFilter, UserId};

/// Use-case port for listing a caller's tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskQuery: Send + Sync {
    /// Tasks owned by `owner` that pass `filter`, in collection order.
    async fn list_tasks(&self, owner: UserId, filter: &TaskFilter) -> Result<Vec<Task>, Error>;
}

/// Use-case port for creating tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskCommand: Send + Sync {
    /// Create a task owned by `owner`.
    ///
    /// Fails with a not-found error when the category does not exist; the
    /// collection is left untouched in that case.
    async fn create_task(&self, owner: UserId, task: NewTask) -> Result<Task, Error>;
}
