//! Statistics API handlers.
//!
//! ```text
//! GET /api/stats/completed-per-day
//! GET /api/stats/productivity
//! ```

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Caller;
use crate::inbound::http::schemas::{CompletedPerDaySchema, ErrorSchema, UserProductivitySchema};
use crate::inbound::http::state::HttpState;

/// Completed tasks across all users, keyed by creation date.
#[utoipa::path(
    get,
    path = "/api/stats/completed-per-day",
    responses(
        (status = 200, description = "Completed task count per creation date", body = CompletedPerDaySchema),
        (status = 401, description = "Missing bearer token", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["stats"],
    operation_id = "completedPerDay"
)]
#[get("/stats/completed-per-day")]
pub async fn completed_per_day(
    state: web::Data<HttpState>,
    _caller: Caller,
) -> ApiResult<HttpResponse> {
    let stats = state.statistics.completed_per_day().await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Completion figures for every user.
#[utoipa::path(
    get,
    path = "/api/stats/productivity",
    responses(
        (status = 200, description = "Per-user productivity", body = [UserProductivitySchema]),
        (status = 401, description = "Missing bearer token", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["stats"],
    operation_id = "productivity"
)]
#[get("/stats/productivity")]
pub async fn productivity(
    state: web::Data<HttpState>,
    _caller: Caller,
) -> ApiResult<HttpResponse> {
    let report = state.statistics.productivity().await?;
    Ok(HttpResponse::Ok().json(report))
}
