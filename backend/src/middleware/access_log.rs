//! Access-log middleware.
//!
//! Records `METHOD target` with a UTC timestamp for every request before the
//! handler runs. Recording is fire-and-forget: a sink failure is logged and
//! the request proceeds untouched.

use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use mockable::Clock;
use tracing::warn;

use crate::domain::ports::{AccessLogEntry, AccessLogSink};

/// Middleware factory writing one access-log entry per request.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::App;
/// use mockable::DefaultClock;
/// use taskboard::domain::ports::NoOpAccessLog;
/// use taskboard::middleware::AccessLog;
///
/// let app = App::new().wrap(AccessLog::new(Arc::new(NoOpAccessLog), Arc::new(DefaultClock)));
/// ```
#[derive(Clone)]
pub struct AccessLog {
    sink: Arc<dyn AccessLogSink>,
    clock: Arc<dyn Clock>,
}

impl AccessLog {
    /// Record into `sink`, stamping entries with `clock`.
    pub fn new(sink: Arc<dyn AccessLogSink>, clock: Arc<dyn Clock>) -> Self {
        Self { sink, clock }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessLogMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessLogMiddleware {
            service,
            sink: Arc::clone(&self.sink),
            clock: Arc::clone(&self.clock),
        }))
    }
}

/// Service wrapper produced by [`AccessLog`].
pub struct AccessLogMiddleware<S> {
    service: S,
    sink: Arc<dyn AccessLogSink>,
    clock: Arc<dyn Clock>,
}

impl<S, B> Service<ServiceRequest> for AccessLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let target = req
            .uri()
            .path_and_query()
            .map_or_else(|| req.path().to_owned(), |pq| pq.as_str().to_owned());
        let entry = AccessLogEntry {
            at: self.clock.utc(),
            method: req.method().as_str().to_owned(),
            target,
        };
        if let Err(error) = self.sink.record(entry) {
            warn!(%error, "failed to record access log entry");
        }
        Box::pin(self.service.call(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{AccessLogError, MockAccessLogSink};
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct FixtureClock(DateTime<Utc>);

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[fixture]
    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixtureClock(
            Utc.with_ymd_and_hms(2025, 12, 20, 10, 15, 30)
                .single()
                .expect("valid timestamp"),
        ))
    }

    #[rstest]
    #[case("/api/tasks?completed=true&mode=or", "GET /api/tasks?completed=true&mode=or")]
    #[case("/missing", "GET /missing")]
    #[actix_web::test]
    async fn records_method_and_target(
        clock: Arc<dyn Clock>,
        #[case] uri: &'static str,
        #[case] rendered: &'static str,
    ) {
        let expected = format!("[2025-12-20T10:15:30.000Z] {rendered}");
        let mut sink = MockAccessLogSink::new();
        sink.expect_record()
            .withf(move |entry| entry.line() == expected)
            .times(1)
            .returning(|_| Ok(()));

        let app = actix_test::init_service(
            App::new()
                .wrap(AccessLog::new(Arc::new(sink), clock))
                .route("/api/tasks", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    }

    #[rstest]
    #[actix_web::test]
    async fn sink_failure_does_not_fail_the_request(clock: Arc<dyn Clock>) {
        let mut sink = MockAccessLogSink::new();
        sink.expect_record()
            .times(1)
            .returning(|_| Err(AccessLogError::closed("writer stopped")));

        let app = actix_test::init_service(
            App::new()
                .wrap(AccessLog::new(Arc::new(sink), clock))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
        assert!(res.status().is_success());
    }
}
