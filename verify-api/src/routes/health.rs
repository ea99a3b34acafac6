use aide::axum::IntoApiResponse;
use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// Health check response body
#[derive(Debug, Serialize, JsonSchema)]
pub struct HealthResponse {
    /// Service status, always "ok" when reachable
    status: String,
    /// Current version of the application
    semver: String,
}

/// Health check endpoint
///
/// Returns the current status and version of the service, for monitoring and
/// deployment verification.
pub async fn handler() -> impl IntoApiResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        semver: env!("CARGO_PKG_VERSION").to_string(),
    })
}
