//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::App;
use actix_web::http::header::AUTHORIZATION;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::inbound::http::routes::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// Admin token used by every helper in this module.
pub const ADMIN_TOKEN: &str = "admin-token";

/// Clock pinned to 2025-12-22T09:00:00Z.
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 22, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }
}

/// State backed by a freshly seeded store and [`FixtureClock`].
pub fn state_with_store() -> HttpState {
    HttpState::in_memory(
        Arc::new(InMemoryStore::seeded()),
        Arc::new(FixtureClock),
        ADMIN_TOKEN,
    )
}

/// Application with every route registered against `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(actix_web::web::Data::new(state))
        .configure(configure)
}

/// `Authorization` header carrying `token`.
pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}
