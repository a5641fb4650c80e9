//! Owner-scoped task filtering.
//!
//! Listing always restricts to the caller's tasks first. The optional
//! `completed` and `priority` filters then combine either conjunctively or
//! disjunctively. In disjunctive mode with no filters supplied nothing can
//! match, so the result is empty.

use std::fmt;
use std::str::FromStr;

use super::{Priority, Task, UserId};

/// How optional filters combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Every supplied filter must match.
    #[default]
    And,
    /// At least one supplied filter must match.
    Or,
}

impl MatchMode {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string does not name a [`MatchMode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mode must be one of and, or; got {value:?}")]
pub struct MatchModeParseError {
    value: String,
}

impl FromStr for MatchMode {
    type Err = MatchModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            other => Err(MatchModeParseError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Optional filters applied after the owner restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskFilter {
    /// Keep tasks whose completion flag matches.
    pub completed: Option<bool>,
    /// Keep tasks with this priority.
    pub priority: Option<Priority>,
    /// How supplied filters combine.
    pub mode: MatchMode,
}

impl TaskFilter {
    /// Whether `task` passes the optional filters.
    ///
    /// Ownership is not considered here; see [`filter_tasks`].
    pub fn matches(&self, task: &Task) -> bool {
        let completed_matches = self.completed.map(|wanted| task.completed() == wanted);
        let priority_matches = self.priority.map(|wanted| task.priority() == wanted);
        match self.mode {
            MatchMode::And => {
                completed_matches.unwrap_or(true) && priority_matches.unwrap_or(true)
            }
            MatchMode::Or => {
                completed_matches.unwrap_or(false) || priority_matches.unwrap_or(false)
            }
        }
    }
}

/// Return `owner`'s tasks that pass `filter`, preserving collection order.
///
/// # Examples
/// ```
/// use taskboard::domain::{MatchMode, TaskFilter, UserId, filter_tasks};
///
/// let filter = TaskFilter { mode: MatchMode::Or, ..TaskFilter::default() };
/// assert!(filter_tasks(&[], UserId::new(1), &filter).is_empty());
/// ```
pub fn filter_tasks(tasks: &[Task], owner: UserId, filter: &TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.owner_id() == owner)
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}
