//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    CategoryQuery, FixtureLoginService, IdentityResolver, LoginService, StatisticsQuery,
    StaticTokenResolver, TaskCommand, TaskQuery,
};
use crate::domain::{CategoryService, StatisticsService, TaskService};
use crate::outbound::memory::InMemoryStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Bearer token resolution.
    pub identity: Arc<dyn IdentityResolver>,
    /// Credential checks for `/auth/login`.
    pub login: Arc<dyn LoginService>,
    /// Owner-scoped task listing.
    pub tasks: Arc<dyn TaskQuery>,
    /// Task creation.
    pub task_commands: Arc<dyn TaskCommand>,
    /// Aggregates across every task.
    pub statistics: Arc<dyn StatisticsQuery>,
    /// Category listing.
    pub categories: Arc<dyn CategoryQuery>,
}

impl HttpState {
    /// Wire every port to services backed by `store`.
    ///
    /// `admin_token` is shared by the token resolver and the login fixture so
    /// a token issued at login resolves back to the administrator.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use taskboard::inbound::http::state::HttpState;
    /// use taskboard::outbound::memory::InMemoryStore;
    ///
    /// let state = HttpState::in_memory(
    ///     Arc::new(InMemoryStore::seeded()),
    ///     Arc::new(DefaultClock),
    ///     "admin-token",
    /// );
    /// let _tasks = state.tasks.clone();
    /// ```
    pub fn in_memory(store: Arc<InMemoryStore>, clock: Arc<dyn Clock>, admin_token: &str) -> Self {
        let task_service = Arc::new(TaskService::new(
            Arc::clone(&store),
            Arc::clone(&store),
            clock,
        ));
        Self {
            identity: Arc::new(StaticTokenResolver::new(admin_token)),
            login: Arc::new(FixtureLoginService::new(admin_token)),
            tasks: task_service.clone(),
            task_commands: task_service,
            statistics: Arc::new(StatisticsService::new(Arc::clone(&store), Arc::clone(&store))),
            categories: Arc::new(CategoryService::new(store)),
        }
    }
}
