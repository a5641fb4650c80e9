//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::Clock;

use taskboard::domain::ports::AccessLogSink;
#[cfg(debug_assertions)]
use taskboard::doc::ApiDoc;
use taskboard::inbound::http::routes::configure;
use taskboard::inbound::http::state::HttpState;
use taskboard::{AccessLog, Trace};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub(crate) struct AppDependencies {
    pub(crate) http_state: web::Data<HttpState>,
    pub(crate) access_log: Arc<dyn AccessLogSink>,
    pub(crate) clock: Arc<dyn Clock>,
}

/// Assemble the application: routes, shared state and middleware.
///
/// `Trace` wraps outermost so access log failures are reported inside the
/// request span.
pub(crate) fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        access_log,
        clock,
    } = deps;

    let app = App::new()
        .app_data(http_state)
        .wrap(AccessLog::new(access_log, clock))
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Parameters
/// - `config`: pre-built [`ServerConfig`] with the bind address, handler
///   state and access log sink.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        http_state,
        access_log,
        clock,
    } = config;
    let http_state = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            access_log: Arc::clone(&access_log),
            clock: Arc::clone(&clock),
        })
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
