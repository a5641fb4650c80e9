//! In-memory store backing every repository port.
//!
//! One `std::sync::Mutex` guards the whole collection, so id allocation and
//! append happen atomically. The guard is never held across an `.await`. A
//! poisoned lock is reported as an unavailable repository.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, TaskRepository, TaskRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    Category, CategoryId, Priority, Task, TaskDraft, TaskId, TaskTitle, User, UserId,
};

#[derive(Debug)]
struct StoreState {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    users: Vec<User>,
    next_task_id: TaskId,
}

/// Owned store for tasks, categories and users.
///
/// Construct it once at start-up and share it through `Arc`; there is no
/// process-global instance.
#[derive(Debug)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Build a store from existing records.
    ///
    /// The next task id follows the largest supplied id, starting at 1.
    pub fn new(tasks: Vec<Task>, categories: Vec<Category>, users: Vec<User>) -> Self {
        let next_task_id = tasks
            .iter()
            .map(Task::id)
            .max()
            .map_or(TaskId::new(1), TaskId::next);
        Self {
            state: Mutex::new(StoreState {
                tasks,
                categories,
                users,
                next_task_id,
            }),
        }
    }

    /// Store populated with the demonstration data set.
    ///
    /// # Examples
    /// ```
    /// use taskboard::outbound::memory::InMemoryStore;
    ///
    /// let store = InMemoryStore::seeded();
    /// assert_eq!(store.task_count(), Some(2));
    /// ```
    pub fn seeded() -> Self {
        let (tasks, categories, users) = seed_data();
        Self::new(tasks, categories, users)
    }

    /// Number of stored tasks, or `None` when the lock is poisoned.
    pub fn task_count(&self) -> Option<usize> {
        self.lock().ok().map(|state| state.tasks.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, String> {
        self.state.lock().map_err(|err| err.to_string())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

fn seed_data() -> (Vec<Task>, Vec<Category>, Vec<User>) {
    let categories = vec![
        Category::new(CategoryId::new(1), "Work"),
        Category::new(CategoryId::new(2), "Personal"),
    ];
    let users = vec![
        User::new(UserId::new(1), "Admin"),
        User::new(UserId::new(2), "User"),
    ];
    let tasks = [
        (1, "Learn Actix Web", false, Priority::High, 1, 1, 20),
        (2, "Go for a run", true, Priority::Medium, 2, 2, 21),
    ]
    .into_iter()
    .filter_map(|(id, title, completed, priority, owner, category, day)| {
        Some(Task::new(
            TaskId::new(id),
            TaskDraft {
                title: TaskTitle::new(title).ok()?,
                completed,
                priority,
                owner_id: UserId::new(owner),
                category_id: CategoryId::new(category),
                created_date: NaiveDate::from_ymd_opt(2025, 12, day)?,
            },
        ))
    })
    .collect();
    (tasks, categories, users)
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        let state = self.lock().map_err(TaskRepositoryError::unavailable)?;
        Ok(state.tasks.clone())
    }

    async fn insert(&self, draft: TaskDraft) -> Result<Task, TaskRepositoryError> {
        let mut state = self.lock().map_err(TaskRepositoryError::unavailable)?;
        let id = state.next_task_id;
        state.next_task_id = id.next();
        let task = Task::new(id, draft);
        state.tasks.push(task.clone());
        Ok(task)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let state = self.lock().map_err(CategoryRepositoryError::unavailable)?;
        Ok(state.categories.clone())
    }

    async fn find(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepositoryError> {
        let state = self.lock().map_err(CategoryRepositoryError::unavailable)?;
        Ok(state
            .categories
            .iter()
            .find(|category| category.id() == id)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let state = self.lock().map_err(UserRepositoryError::unavailable)?;
        Ok(state.users.clone())
    }
}
