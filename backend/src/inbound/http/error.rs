//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while turning domain
//! failures into the `{"error": ..., "details": ...}` envelope. Server-side
//! faults are logged and redacted before they reach the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::domain::{Error, INTERNAL_MESSAGE};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

fn status_for(error: &Error) -> StatusCode {
    StatusCode::from_u16(error.status())
        .ok()
        .filter(|status| status.is_client_error() || status.is_server_error())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn body_for(error: &Error, status: StatusCode) -> ErrorBody {
    if status.is_server_error() {
        ErrorBody {
            error: INTERNAL_MESSAGE.to_owned(),
            details: None,
        }
    } else {
        ErrorBody {
            error: error.message(),
            details: error.details(),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, details = ?self.details(), "request failed");
        }
        HttpResponse::build(status).json(body_for(self, status))
    }
}
