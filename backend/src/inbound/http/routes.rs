//! Route table for the HTTP adapter.
//!
//! ```text
//! POST /auth/login
//! GET  /api/tasks            (bearer)
//! POST /api/tasks            (bearer)
//! GET  /api/stats/completed-per-day  (bearer)
//! GET  /api/stats/productivity       (bearer)
//! GET  /api/categories
//! ```

use actix_web::{HttpRequest, web};
use tracing::warn;

use crate::domain::{Error, INTERNAL_MESSAGE};
use crate::inbound::http::{categories, login, stats, tasks};

/// Malformed payloads are not domain failures; they surface as a redacted
/// internal error.
fn payload_error(err: impl std::fmt::Display, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = %req.path(), "request payload rejected");
    Error::internal(INTERNAL_MESSAGE).into()
}

/// Register every endpoint and the extractor error handlers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use taskboard::inbound::http::routes::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(payload_error))
        .app_data(web::QueryConfig::default().error_handler(payload_error))
        .service(web::scope("/auth").service(login::login))
        .service(
            web::scope("/api")
                .service(tasks::list_tasks)
                .service(tasks::create_task)
                .service(stats::completed_per_day)
                .service(stats::productivity)
                .service(categories::list_categories),
        );
}
