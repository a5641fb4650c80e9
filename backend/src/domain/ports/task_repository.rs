//! Port for the task collection.
//!
//! Adapters own id allocation: `insert` assigns the next identifier and
//! appends the task in one step so identifiers are never reused.

use async_trait::async_trait;

use crate::domain::{Task, TaskDraft};

use super::define_port_error;

define_port_error! {
    /// Errors raised by task repository adapters.
    pub enum TaskRepositoryError {
        /// The backing store could not be accessed.
        Unavailable { message: String } => "task store unavailable: {message}",
    }
}

/// Driven port owning the task collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Every task in insertion order.
    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError>;

    /// Allocate an id for `draft`, append it and return the stored task.
    async fn insert(&self, draft: TaskDraft) -> Result<Task, TaskRepositoryError>;
}
