//! To-do items and their validated components.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::{CategoryId, UserId};

/// Minimum number of characters accepted for a task title.
pub const TITLE_MIN_CHARS: usize = 3;

/// Stable numeric task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Identifier allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Urgency attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Every accepted priority, in ascending urgency.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string does not name a [`Priority`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("priority must be one of low, medium, high; got {value:?}")]
pub struct PriorityParseError {
    value: String,
}

impl FromStr for Priority {
    type Err = PriorityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| PriorityParseError {
                value: s.to_owned(),
            })
    }
}

/// Validation failures for task components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskValidationError {
    /// Title shorter than [`TITLE_MIN_CHARS`].
    #[error("title must be at least {min} characters")]
    TitleTooShort { min: usize },
}

/// Task title holding at least [`TITLE_MIN_CHARS`] characters.
///
/// # Examples
/// ```
/// use taskboard::domain::TaskTitle;
///
/// assert!(TaskTitle::new("Buy milk").is_ok());
/// assert!(TaskTitle::new("ab").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Validate and wrap a title.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskValidationError> {
        let title = title.into();
        if title.chars().count() < TITLE_MIN_CHARS {
            return Err(TaskValidationError::TitleTooShort {
                min: TITLE_MIN_CHARS,
            });
        }
        Ok(Self(title))
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Everything a task needs apart from its identifier.
///
/// Repositories turn drafts into [`Task`] values by allocating the next id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Text shown to the owner.
    pub title: TaskTitle,
    /// Whether the task is done.
    pub completed: bool,
    /// Urgency of the task.
    pub priority: Priority,
    /// User the task belongs to.
    pub owner_id: UserId,
    /// Category the task is filed under.
    pub category_id: CategoryId,
    /// Calendar day the task was created.
    pub created_date: NaiveDate,
}

/// Caller-supplied input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Validated title.
    pub title: TaskTitle,
    /// Category the task is filed under; must exist.
    pub category_id: CategoryId,
    /// Requested priority; `None` means medium.
    pub priority: Option<Priority>,
}

/// A to-do item.
///
/// Serialises with camelCase keys and `createdDate` as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    completed: bool,
    priority: Priority,
    owner_id: UserId,
    category_id: CategoryId,
    created_date: NaiveDate,
}

impl Task {
    /// Attach an identifier to a draft.
    pub fn new(id: TaskId, draft: TaskDraft) -> Self {
        let TaskDraft {
            title,
            completed,
            priority,
            owner_id,
            category_id,
            created_date,
        } = draft;
        Self {
            id,
            title,
            completed,
            priority,
            owner_id,
            category_id,
            created_date,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Task title.
    pub fn title(&self) -> &str {
        self.title.as_ref()
    }

    /// Whether the task is done.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Task priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Owning user.
    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Category the task is filed under.
    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Creation day.
    pub fn created_date(&self) -> NaiveDate {
        self.created_date
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for task components.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("low", Priority::Low)]
    #[case("medium", Priority::Medium)]
    #[case("high", Priority::High)]
    fn priority_parses_wire_names(#[case] raw: &str, #[case] expected: Priority) {
        assert_eq!(raw.parse::<Priority>(), Ok(expected));
    }

    #[rstest]
    #[case("HIGH")]
    #[case("urgent")]
    #[case("")]
    fn priority_rejects_unknown_names(#[case] raw: &str) {
        assert!(raw.parse::<Priority>().is_err());
    }

    #[rstest]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[rstest]
    #[case("abc", true)]
    #[case("ab", false)]
    #[case("", false)]
    #[case("añb", true)]
    fn title_requires_three_characters(#[case] raw: &str, #[case] accepted: bool) {
        assert_eq!(TaskTitle::new(raw).is_ok(), accepted);
    }

    #[rstest]
    fn task_serialises_with_camel_case_and_plain_date() {
        let task = Task::new(
            TaskId::new(7),
            TaskDraft {
                title: TaskTitle::new("Write report").expect("valid title"),
                completed: true,
                priority: Priority::High,
                owner_id: UserId::new(1),
                category_id: CategoryId::new(2),
                created_date: NaiveDate::from_ymd_opt(2025, 12, 20).expect("valid date"),
            },
        );

        let value = serde_json::to_value(&task).expect("serialise task");
        assert_eq!(
            value,
            json!({
                "id": 7,
                "title": "Write report",
                "completed": true,
                "priority": "high",
                "ownerId": 1,
                "categoryId": 2,
                "createdDate": "2025-12-20",
            })
        );
    }

    #[rstest]
    fn task_ids_advance_by_one() {
        assert_eq!(TaskId::new(3).next(), TaskId::new(4));
    }
}
