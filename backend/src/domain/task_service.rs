//! Task domain service implementing the task query and command ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, TaskCommand, TaskQuery, TaskRepository,
    TaskRepositoryError,
};
use crate::domain::{Error, NewTask, Task, TaskDraft, TaskFilter, UserId, filter_tasks};

/// Resource name reported when a task references an unknown category.
pub const CATEGORY_RESOURCE: &str = "Category";

/// Task service backed by task and category repositories.
#[derive(Clone)]
pub struct TaskService<T, C> {
    tasks: Arc<T>,
    categories: Arc<C>,
    clock: Arc<dyn Clock>,
}

impl<T, C> TaskService<T, C> {
    /// Create a service; `clock` stamps the creation date of new tasks.
    pub fn new(tasks: Arc<T>, categories: Arc<C>, clock: Arc<dyn Clock>) -> Self {
        Self {
            tasks,
            categories,
            clock,
        }
    }
}

fn map_task_error(error: TaskRepositoryError) -> Error {
    match error {
        TaskRepositoryError::Unavailable { message } => {
            Error::internal(format!("task repository unavailable: {message}"))
        }
    }
}

fn map_category_error(error: CategoryRepositoryError) -> Error {
    match error {
        CategoryRepositoryError::Unavailable { message } => {
            Error::internal(format!("category repository unavailable: {message}"))
        }
    }
}

#[async_trait]
impl<T, C> TaskQuery for TaskService<T, C>
where
    T: TaskRepository,
    C: CategoryRepository,
{
    async fn list_tasks(&self, owner: UserId, filter: &TaskFilter) -> Result<Vec<Task>, Error> {
        let tasks = self.tasks.list().await.map_err(map_task_error)?;
        Ok(filter_tasks(&tasks, owner, filter))
    }
}

#[async_trait]
impl<T, C> TaskCommand for TaskService<T, C>
where
    T: TaskRepository,
    C: CategoryRepository,
{
    async fn create_task(&self, owner: UserId, task: NewTask) -> Result<Task, Error> {
        let NewTask {
            title,
            category_id,
            priority,
        } = task;

        self.categories
            .find(category_id)
            .await
            .map_err(map_category_error)?
            .ok_or_else(|| Error::not_found(CATEGORY_RESOURCE))?;

        let draft = TaskDraft {
            title,
            completed: false,
            priority: priority.unwrap_or_default(),
            owner_id: owner,
            category_id,
            created_date: self.clock.utc().date_naive(),
        };
        let created = self.tasks.insert(draft).await.map_err(map_task_error)?;
        tracing::debug!(task_id = %created.id(), owner = %owner, "task created");
        Ok(created)
    }
}

#[cfg(test)]
#[path = "task_service_tests.rs"]
mod tests;
