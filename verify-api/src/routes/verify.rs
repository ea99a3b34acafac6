use std::sync::Arc;

use axum::{Extension, Json};
use common_types::{VerifyRequest, VerifyResponse};

use crate::types::{ApiJson, AppError, Environment};
use crate::world_id::{self, RemoteJwks};

/// Token verification endpoint
///
/// Forwards the submitted token to the identity verifier and returns its
/// decoded claims. Stateless: nothing about the token or the result is
/// persisted.
///
/// # Errors
///
/// - `400 validation_error` if the request body does not parse
/// - `401 invalid_token` if the token is malformed or fails verification
/// - `503 upstream_error` if the provider's key set cannot be fetched
pub async fn handler(
    Extension(environment): Extension<Environment>,
    Extension(jwks): Extension<Arc<RemoteJwks>>,
    ApiJson(request): ApiJson<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError> {
    let claims =
        world_id::verify_identity_token(&request.token, &jwks, &environment.verifier_config())
            .await?;

    tracing::debug!(sub = %claims.sub, "token verified");

    Ok(Json(VerifyResponse { result: claims }))
}
