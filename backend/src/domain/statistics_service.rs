//! Statistics service implementing the statistics query port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    StatisticsQuery, TaskRepository, TaskRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    CompletedPerDay, Error, Task, UserProductivity, completed_per_day, productivity,
};

/// Aggregates task statistics from repository snapshots.
#[derive(Clone)]
pub struct StatisticsService<T, U> {
    tasks: Arc<T>,
    users: Arc<U>,
}

impl<T, U> StatisticsService<T, U> {
    /// Create the service over the task and user repositories.
    pub fn new(tasks: Arc<T>, users: Arc<U>) -> Self {
        Self { tasks, users }
    }
}

impl<T, U> StatisticsService<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    async fn all_tasks(&self) -> Result<Vec<Task>, Error> {
        self.tasks.list().await.map_err(|error| match error {
            TaskRepositoryError::Unavailable { message } => {
                Error::internal(format!("task repository unavailable: {message}"))
            }
        })
    }
}

#[async_trait]
impl<T, U> StatisticsQuery for StatisticsService<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    async fn completed_per_day(&self) -> Result<CompletedPerDay, Error> {
        let tasks = self.all_tasks().await?;
        Ok(completed_per_day(&tasks))
    }

    async fn productivity(&self) -> Result<Vec<UserProductivity>, Error> {
        let users = self.users.list().await.map_err(|error| match error {
            UserRepositoryError::Unavailable { message } => {
                Error::internal(format!("user repository unavailable: {message}"))
            }
        })?;
        let tasks = self.all_tasks().await?;
        Ok(productivity(&users, &tasks))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{MockTaskRepository, MockUserRepository};
    use crate::domain::{CategoryId, Priority, TaskDraft, TaskId, TaskTitle, User, UserId};
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    #[fixture]
    fn tasks() -> MockTaskRepository {
        let mut repo = MockTaskRepository::new();
        repo.expect_list().returning(|| {
            let task = |id: u64, owner: u64, completed: bool, day: u32| {
                Task::new(
                    TaskId::new(id),
                    TaskDraft {
                        title: TaskTitle::new(format!("task {id}")).expect("valid title"),
                        completed,
                        priority: Priority::Low,
                        owner_id: UserId::new(owner),
                        category_id: CategoryId::new(1),
                        created_date: NaiveDate::from_ymd_opt(2025, 12, day)
                            .expect("valid date"),
                    },
                )
            };
            Ok(vec![
                task(1, 1, false, 20),
                task(2, 2, true, 21),
                task(3, 1, true, 21),
            ])
        });
        repo
    }

    #[rstest]
    #[tokio::test]
    async fn completed_per_day_counts_every_owner(tasks: MockTaskRepository) {
        let service = StatisticsService::new(Arc::new(tasks), Arc::new(MockUserRepository::new()));
        let stats = service.completed_per_day().await.expect("stats");
        let day = NaiveDate::from_ymd_opt(2025, 12, 21).expect("valid date");
        assert_eq!(stats.entries(), &[(day, 2)]);
    }

    #[rstest]
    #[tokio::test]
    async fn productivity_joins_users_and_tasks(tasks: MockTaskRepository) {
        let mut users = MockUserRepository::new();
        users.expect_list().times(1).return_once(|| {
            Ok(vec![
                User::new(UserId::new(1), "Admin"),
                User::new(UserId::new(2), "User"),
            ])
        });
        let service = StatisticsService::new(Arc::new(tasks), Arc::new(users));

        let report = service.productivity().await.expect("report");
        let rendered: Vec<_> = report
            .iter()
            .map(|entry| (entry.user(), entry.total(), entry.completed(), entry.productivity()))
            .collect();
        assert_eq!(rendered, [("Admin", 2, 1, "50%"), ("User", 1, 1, "100%")]);
    }

    #[rstest]
    #[tokio::test]
    async fn user_lookup_failure_is_internal(tasks: MockTaskRepository) {
        let mut users = MockUserRepository::new();
        users
            .expect_list()
            .return_once(|| Err(UserRepositoryError::unavailable("lock poisoned")));
        let service = StatisticsService::new(Arc::new(tasks), Arc::new(users));

        let err = service.productivity().await.expect_err("failure surfaces");
        assert_eq!(err.status(), 500);
    }
}
