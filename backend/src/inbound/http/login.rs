//! Login handler.
//!
//! ```text
//! POST /auth/login {"email":"admin@example.com","password":"admin123"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::LoginCredentials;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, LoginSessionSchema};
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /auth/login`.
///
/// Both members are optional on the wire; missing values simply fail to
/// match any account.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Account email address.
    #[schema(example = "admin@example.com")]
    #[serde(default)]
    pub email: Option<String>,
    /// Account password.
    #[schema(example = "admin123")]
    #[serde(default)]
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginCredentials {
    fn from(value: LoginRequest) -> Self {
        Self::new(
            value.email.unwrap_or_default(),
            value.password.unwrap_or_default(),
        )
    }
}

/// Exchange demo credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginSessionSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::from(payload.into_inner());
    let session = state.login.login(&credentials).await?;
    Ok(HttpResponse::Ok().json(session))
}
