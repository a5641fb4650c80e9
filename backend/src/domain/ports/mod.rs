//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod access_log;
mod category_query;
mod category_repository;
mod identity_resolver;
mod login_service;
mod statistics_query;
mod task_query;
mod task_repository;
mod user_repository;

#[cfg(test)]
pub use access_log::MockAccessLogSink;
pub use access_log::{AccessLogEntry, AccessLogError, AccessLogSink, NoOpAccessLog};
#[cfg(test)]
pub use category_query::MockCategoryQuery;
pub use category_query::CategoryQuery;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use identity_resolver::MockIdentityResolver;
pub use identity_resolver::{
    ADMIN_USER_ID, DEFAULT_USER_ID, IdentityResolver, StaticTokenResolver,
};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, INVALID_CREDENTIALS, LoginService};
#[cfg(test)]
pub use statistics_query::MockStatisticsQuery;
pub use statistics_query::StatisticsQuery;
#[cfg(test)]
pub use task_query::{MockTaskCommand, MockTaskQuery};
pub use task_query::{TaskCommand, TaskQuery};
#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::{TaskRepository, TaskRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
