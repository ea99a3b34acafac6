//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::world_id::WorldIdError;

/// API error response envelope
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Whether the client should retry the request
    pub allow_retry: bool,
    /// Error details
    error: ErrorBody,
}

/// Error body containing code and message
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    /// Machine-readable error code
    pub code: &'static str,
    /// Human-readable error message
    pub message: &'static str,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(
        status: StatusCode,
        code: &'static str,
        msg: &'static str,
        retry: bool,
    ) -> Self {
        Self {
            status,
            inner: ApiErrorResponse {
                allow_retry: retry,
                error: ErrorBody { code, message: msg },
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.status.as_u16() {
            400..=499 => tracing::warn!(
                "Client error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            500..=599 => tracing::error!(
                "Server error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Convert verification errors to application errors
impl From<WorldIdError> for AppError {
    fn from(err: WorldIdError) -> Self {
        match &err {
            WorldIdError::JwksFetch(msg) => {
                tracing::error!("JWKS fetch failed: {msg}");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "upstream_error",
                    "Identity provider key set unavailable",
                    true,
                )
            }
            WorldIdError::MissingKeyId
            | WorldIdError::UnknownKeyId(_)
            | WorldIdError::UnsupportedKey(_)
            | WorldIdError::InvalidToken(_) => {
                tracing::debug!("Token rejected: {err}");
                Self::new(
                    StatusCode::UNAUTHORIZED,
                    "invalid_token",
                    "Token verification failed",
                    false,
                )
            }
        }
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_shape_is_camel_case() {
        let err = AppError::new(StatusCode::UNAUTHORIZED, "invalid_token", "nope", false);
        let json = serde_json::to_value(&err.inner).unwrap();

        assert_eq!(json["allowRetry"], false);
        assert_eq!(json["error"]["code"], "invalid_token");
        assert_eq!(json["error"]["message"], "nope");
    }

    #[test]
    fn jwks_failures_are_retryable() {
        let err = AppError::from(WorldIdError::JwksFetch("timeout".to_string()));
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.inner.allow_retry);
    }

    #[test]
    fn token_failures_are_unauthorized() {
        let err = AppError::from(WorldIdError::MissingKeyId);
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert!(!err.inner.allow_retry);
    }
}
