//! Domain-level error types.
//!
//! These errors are transport agnostic beyond carrying the status code each
//! kind maps to. Inbound adapters turn them into HTTP responses; nothing else
//! should inspect the status.

use serde::Serialize;
use serde_json::Value;

/// Default message attached to validation failures.
pub const VALIDATION_MESSAGE: &str = "Invalid data";
/// Message used whenever an internal failure is redacted.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

const STATUS_BAD_REQUEST: u16 = 400;
const STATUS_UNAUTHORIZED: u16 = 401;
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_INTERNAL: u16 = 500;

/// Where a rejected field was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    /// Query string parameter.
    Query,
    /// JSON request body member.
    Body,
}

/// A single constraint violation reported by request validation.
///
/// # Examples
/// ```
/// use taskboard::domain::{FieldLocation, FieldViolation};
///
/// let violation = FieldViolation::new("title", FieldLocation::Body, "too short");
/// assert_eq!(violation.field(), "title");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    field: String,
    location: FieldLocation,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

impl FieldViolation {
    /// Describe a violation for `field` without echoing the offending value.
    pub fn new(
        field: impl Into<String>,
        location: FieldLocation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            location,
            message: message.into(),
            value: None,
        }
    }

    /// Attach the raw value that failed validation.
    #[must_use]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Name of the rejected field.
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Location of the rejected field.
    pub fn location(&self) -> FieldLocation {
        self.location
    }

    /// Human readable description of the broken constraint.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Raw value supplied by the client, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

/// Domain failure raised by handlers and services.
///
/// ## Invariants
/// - `Validation` always carries at least one violation when raised by the
///   validation gate.
/// - `NotFound` renders its message as `"{resource} not found"`.
///
/// # Examples
/// ```
/// use taskboard::domain::Error;
///
/// let err = Error::not_found("Category");
/// assert_eq!(err.status(), 404);
/// assert_eq!(err.message(), "Category not found");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Base kind carrying an explicit status and optional details.
    #[error("{message}")]
    Generic {
        message: String,
        status: u16,
        details: Option<Value>,
    },
    /// Request fields failed their declared constraints.
    #[error("{message}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
    },
    /// A referenced entity does not exist.
    #[error("{resource} not found")]
    NotFound { resource: String },
}

impl Error {
    /// Generic error with an explicit status code and no details.
    pub fn generic(message: impl Into<String>, status: u16) -> Self {
        Self::Generic {
            message: message.into(),
            status,
            details: None,
        }
    }

    /// Generic error with the default status of 500.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::generic(message, STATUS_INTERNAL)
    }

    /// Generic error signalling missing or unusable credentials.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::generic(message, STATUS_UNAUTHORIZED)
    }

    /// Validation failure using the default message.
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self::Validation {
            message: VALIDATION_MESSAGE.to_owned(),
            violations,
        }
    }

    /// Missing entity identified by its resource name.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Attach structured details to a generic error.
    ///
    /// Validation and not-found errors derive their details from their own
    /// payload, so the value is ignored for those kinds.
    #[must_use]
    pub fn with_details(self, details: Value) -> Self {
        match self {
            Self::Generic {
                message, status, ..
            } => Self::Generic {
                message,
                status,
                details: Some(details),
            },
            other => other,
        }
    }

    /// Status code associated with the error kind.
    pub fn status(&self) -> u16 {
        match self {
            Self::Generic { status, .. } => *status,
            Self::Validation { .. } => STATUS_BAD_REQUEST,
            Self::NotFound { .. } => STATUS_NOT_FOUND,
        }
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Structured details for the response envelope, if any.
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::Generic { details, .. } => details.clone(),
            Self::Validation { violations, .. } => serde_json::to_value(violations).ok(),
            Self::NotFound { .. } => None,
        }
    }

    /// Violations carried by a validation failure.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::Validation { violations, .. } => violations.as_slice(),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests;
