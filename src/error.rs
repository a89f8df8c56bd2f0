// HTTP API Error Types
use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use validator::ValidationErrors;

use crate::database::manager::DatabaseError;
use crate::middleware::response::WebResponse;

/// Every failure a request can end in. Converted to a response in exactly one place.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    ValidationFailed(BTreeMap<String, Vec<String>>),

    // 401 Unauthorized
    Unauthorized,

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status text written into the envelope
    pub fn status_text(&self) -> &'static str {
        match self {
            ApiError::ValidationFailed(_) => "Bad Request",
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::NotFound(_) => "Not Found",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }

    /// Envelope payload, if any
    pub fn data(&self) -> Option<Value> {
        match self {
            ApiError::ValidationFailed(violations) => Some(json!(violations)),
            ApiError::Unauthorized => None,
            ApiError::NotFound(msg) => Some(Value::String(msg.clone())),
            ApiError::Internal(msg) => Some(Value::String(msg.clone())),
        }
    }

    pub fn into_web_response(self) -> WebResponse<Value> {
        WebResponse::with_status(self.status_code(), self.status_text(), self.data())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let violations = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(msg) => msg.to_string(),
                        None => format!("failed '{}' constraint", e.code),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        ApiError::ValidationFailed(violations)
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Internal(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<std::num::ParseIntError> for ApiError {
    fn from(err: std::num::ParseIntError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::ValidationFailed(violations) => write!(f, "validation failed: {:?}", violations),
            ApiError::Unauthorized => write!(f, "unauthorized"),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            ApiError::Unauthorized => {}
            other => tracing::debug!("Request rejected: {}", other),
        }
        self.into_web_response().into_response()
    }
}
