//! Domain primitives, ports and services.
//!
//! Purpose: define strongly typed entities used by the HTTP adapter and the
//! in-memory store, the ports that separate them, and the services that
//! implement the driving ports. Nothing here depends on actix.
//!
//! Public surface:
//! - Error (alias to `error::Error`): tagged failure carrying an HTTP status.
//! - Task, Category, User: the stored entities.
//! - TaskFilter and `filter_tasks`: owner-scoped listing rules.
//! - `completed_per_day` and `productivity`: statistics aggregations.

pub mod auth;
pub mod category;
pub mod category_service;
pub mod error;
pub mod ports;
pub mod statistics;
pub mod statistics_service;
pub mod task;
pub mod task_filter;
pub mod task_service;
pub mod user;

pub use self::auth::{CallerIdentity, LoginCredentials, LoginSession};
pub use self::category::{Category, CategoryId};
pub use self::category_service::CategoryService;
pub use self::error::{Error, FieldLocation, FieldViolation, INTERNAL_MESSAGE, VALIDATION_MESSAGE};
pub use self::statistics::{CompletedPerDay, UserProductivity, completed_per_day, productivity};
pub use self::statistics_service::StatisticsService;
pub use self::task::{
    NewTask, Priority, PriorityParseError, TITLE_MIN_CHARS, Task, TaskDraft, TaskId, TaskTitle,
    TaskValidationError,
};
pub use self::task_filter::{MatchMode, MatchModeParseError, TaskFilter, filter_tasks};
pub use self::task_service::{CATEGORY_RESOURCE, TaskService};
pub use self::user::{User, UserId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use taskboard::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("Token required"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
