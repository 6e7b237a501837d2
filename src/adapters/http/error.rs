//! JSON error body shared by the gate and every route.
//!
//! ```json
//! {"success":false,"message":"invalid-signature","errorCode":"invalid-signature","timestamp":"2024-01-15T10:30:00.000Z"}
//! ```
//!
//! The shape is the same everywhere, but `message` differs by source:
//!
//! - Auth failures and 5xx errors carry the code itself as `message`.
//! - 4xx domain errors (validation, not found) carry the domain error's
//!   human-readable message, so `message` and `errorCode` differ.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, Timestamp};

/// Standard error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error_code: String,
    pub timestamp: String,
}

impl ErrorResponse {
    /// Error body whose message is the code itself.
    pub fn from_code(code: &str) -> Self {
        Self::with_message(code, code)
    }

    pub fn with_message(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error_code: code.to_string(),
            timestamp: Timestamp::now().to_iso8601(),
        }
    }
}

/// Error returned by HTTP handlers.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorResponse::with_message(ErrorCode::ValidationFailed.as_str(), message),
        )
    }

    pub fn unauthenticated() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::from_code("unauthenticated"),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = match &err {
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::TokenIssuance(reason) => {
                tracing::error!(reason = %reason, "token issuance failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::UNAUTHORIZED,
        };
        Self::new(status, ErrorResponse::from_code(err.code()))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match err.code {
            ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::StatsNotFound => StatusCode::NOT_FOUND,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::EventBusClosed => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::EventHandlerFailed
            | ErrorCode::InvalidEventPayload
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
            ErrorResponse::from_code(err.code.as_str())
        } else {
            ErrorResponse::with_message(err.code.as_str(), err.message)
        };
        Self::new(status, body)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
