//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use carehub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details (field-level validation failures).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Newtype carrying [`AppError`] across the HTTP boundary.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts any
/// domain error through the `From` impl.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let (status, default_code) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::RateLimit => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::ExternalService => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        // Internal failures are logged with their real cause and surfaced
        // opaquely; everything else is information the caller can act on.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err.message, "Internal server error");
            "An unexpected error occurred".to_string()
        } else {
            err.message.clone()
        };

        let body = ApiErrorResponse {
            error: err.code.unwrap_or(default_code).to_string(),
            message,
            details: err.details.clone(),
        };

        let mut response = (status, Json(body)).into_response();

        if let Some(seconds) = err.retry_after_seconds {
            if let Ok(value) = header::HeaderValue::from_str(&seconds.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_for(err: AppError) -> Response {
        ApiError::from(err).into_response()
    }

    #[test]
    fn maps_kinds_to_statuses() {
        assert_eq!(
            response_for(AppError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            response_for(AppError::authentication("who")).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            response_for(AppError::authorization("no consent")).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            response_for(AppError::not_found("gone")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            response_for(AppError::database("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn rate_limit_response_carries_retry_after() {
        let response = response_for(AppError::rate_limited("slow down").with_retry_after(42));

        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "42");
    }
}
