//! Bearer-token authentication for HTTP handlers.
//!
//! [`Caller`] reads the `Authorization` header, resolves the token through
//! the configured [`IdentityResolver`](crate::domain::ports::IdentityResolver)
//! and hands the identity to the handler.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};

use crate::domain::{CallerIdentity, Error, UserId};

use super::state::HttpState;

/// Message returned when the bearer token is missing or malformed.
pub const TOKEN_REQUIRED: &str = "Token required";

const BEARER_PREFIX: &str = "Bearer ";

/// Token carried by an `Authorization: Bearer <token>` header.
///
/// The token runs from the first space to the next one and may be empty.
fn bearer_token(header: &str) -> Option<&str> {
    let rest = header.strip_prefix(BEARER_PREFIX)?;
    Some(rest.split(' ').next().unwrap_or_default())
}

/// Authenticated caller extracted from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller(CallerIdentity);

impl Caller {
    /// User the request acts for.
    pub fn id(&self) -> UserId {
        self.0.id()
    }
}

fn resolve(req: &HttpRequest) -> Result<Caller, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| Error::unauthorized(TOKEN_REQUIRED))?;
    let token = bearer_token(header).ok_or_else(|| Error::unauthorized(TOKEN_REQUIRED))?;
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state is not configured"))?;
    state.identity.resolve(token).map(Caller)
}

impl FromRequest for Caller {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}
