//! Aggregate views over the task collection.
//!
//! Both aggregations are pure functions over slices so services can compute
//! them on a snapshot taken from the repositories.

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{Task, User};

/// Completed-task counts keyed by creation date.
///
/// Dates appear in the order they were first seen in the task collection
/// and serialise as a JSON object in that same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedPerDay(Vec<(NaiveDate, usize)>);

impl CompletedPerDay {
    /// Count for `date`, or zero when no completed task was created then.
    pub fn count_for(&self, date: NaiveDate) -> usize {
        self.0
            .iter()
            .find_map(|(day, count)| (*day == date).then_some(*count))
            .unwrap_or(0)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[(NaiveDate, usize)] {
        self.0.as_slice()
    }

    /// True when no task has been completed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CompletedPerDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, count) in &self.0 {
            map.serialize_entry(&day.format("%Y-%m-%d").to_string(), count)?;
        }
        map.end()
    }
}

/// Count completed tasks across every owner, grouped by creation date.
pub fn completed_per_day(tasks: &[Task]) -> CompletedPerDay {
    let mut days: Vec<(NaiveDate, usize)> = Vec::new();
    for task in tasks.iter().filter(|task| task.completed()) {
        let day = task.created_date();
        match days.iter_mut().find(|(seen, _)| *seen == day) {
            Some((_, count)) => *count += 1,
            None => days.push((day, 1)),
        }
    }
    CompletedPerDay(days)
}

/// Per-user completion figures.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UserProductivity {
    user: String,
    total: usize,
    completed: usize,
    productivity: String,
}

impl UserProductivity {
    /// Display name of the user.
    pub fn user(&self) -> &str {
        self.user.as_str()
    }

    /// Tasks owned by the user.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Completed tasks owned by the user.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Completion ratio as a whole percentage such as `"50%"`.
    pub fn productivity(&self) -> &str {
        self.productivity.as_str()
    }
}

/// Completion percentage rounded to the nearest integer, halves up.
fn percentage(completed: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (completed * 200 + total) / (total * 2)
}

/// One entry per user, in user order, summarising the tasks they own.
///
/// # Examples
/// ```
/// use taskboard::domain::{User, UserId, productivity};
///
/// let report = productivity(&[User::new(UserId::new(1), "Admin")], &[]);
/// assert_eq!(report[0].productivity(), "0%");
/// ```
pub fn productivity(users: &[User], tasks: &[Task]) -> Vec<UserProductivity> {
    users
        .iter()
        .map(|user| {
            let owned = tasks.iter().filter(|task| task.owner_id() == user.id());
            let (total, completed) = owned.fold((0, 0), |(total, completed), task| {
                (total + 1, completed + usize::from(task.completed()))
            });
            UserProductivity {
                user: user.name().to_owned(),
                total,
                completed,
                productivity: format!("{}%", percentage(completed, total)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{
        CategoryId, MatchMode, Priority, TaskDraft, TaskFilter, TaskId, TaskTitle, UserId,
        filter_tasks,
    };
    use rstest::rstest;
    use serde_json::json;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).expect("valid date")
    }

    fn task(id: u64, owner: u64, completed: bool, created: NaiveDate) -> Task {
        task_with_priority(id, owner, completed, Priority::Medium, created)
    }

    fn task_with_priority(
        id: u64,
        owner: u64,
        completed: bool,
        priority: Priority,
        created: NaiveDate,
    ) -> Task {
        Task::new(
            TaskId::new(id),
            TaskDraft {
                title: TaskTitle::new(format!("task {id}")).expect("valid title"),
                completed,
                priority,
                owner_id: UserId::new(owner),
                category_id: CategoryId::new(1),
                created_date: created,
            },
        )
    }

    #[rstest]
    fn completed_per_day_counts_only_completed_tasks_across_owners() {
        let tasks = [
            task(1, 1, true, day(21)),
            task(2, 2, true, day(20)),
            task(3, 2, false, day(20)),
            task(4, 1, true, day(21)),
        ];

        let stats = completed_per_day(&tasks);
        assert_eq!(stats.entries(), &[(day(21), 2), (day(20), 1)]);
        assert_eq!(stats.count_for(day(19)), 0);
    }

    #[rstest]
    fn completed_per_day_serialises_in_first_seen_order() {
        let tasks = [task(1, 1, true, day(21)), task(2, 1, true, day(20))];
        let rendered =
            serde_json::to_string(&completed_per_day(&tasks)).expect("serialise stats");
        assert_eq!(rendered, r#"{"2025-12-21":1,"2025-12-20":1}"#);
    }

    #[rstest]
    fn completed_per_day_is_empty_without_completed_tasks() {
        let stats = completed_per_day(&[task(1, 1, false, day(20))]);
        assert!(stats.is_empty());
        assert_eq!(serde_json::to_value(&stats).expect("serialise"), json!({}));
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 2, 50)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(1, 8, 13)]
    #[case(3, 8, 38)]
    #[case(3, 3, 100)]
    fn percentage_rounds_halves_up(
        #[case] completed: usize,
        #[case] total: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(percentage(completed, total), expected);
    }

    #[rstest]
    fn productivity_reports_every_user_in_order() {
        let users = [
            User::new(UserId::new(1), "Admin"),
            User::new(UserId::new(2), "User"),
            User::new(UserId::new(3), "Idle"),
        ];
        let tasks = [
            task(1, 1, false, day(20)),
            task(2, 2, true, day(21)),
            task(3, 1, true, day(21)),
        ];

        let report = serde_json::to_value(productivity(&users, &tasks)).expect("serialise");
        assert_eq!(
            report,
            json!([
                {"user": "Admin", "total": 2, "completed": 1, "productivity": "50%"},
                {"user": "User", "total": 1, "completed": 1, "productivity": "100%"},
                {"user": "Idle", "total": 0, "completed": 0, "productivity": "0%"},
            ])
        );
    }

    #[rstest]
    fn owner_listing_and_daily_counts_agree_on_one_collection() {
        let tasks = [
            task_with_priority(1, 1, true, Priority::High, day(20)),
            task_with_priority(2, 1, false, Priority::High, day(20)),
            task_with_priority(3, 2, true, Priority::Low, day(21)),
        ];
        let filter = TaskFilter {
            completed: Some(true),
            priority: None,
            mode: MatchMode::And,
        };

        let listed = filter_tasks(&tasks, UserId::new(1), &filter);
        assert_eq!(listed, vec![tasks[0].clone()]);

        let rendered = serde_json::to_value(completed_per_day(&tasks)).expect("serialise");
        assert_eq!(rendered, json!({"2025-12-20": 1, "2025-12-21": 1}));
    }
}
