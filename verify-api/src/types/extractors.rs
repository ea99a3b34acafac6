//! Custom extractors for request bodies

use aide::operation::OperationInput;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use schemars::JsonSchema;

use crate::types::AppError;

/// JSON extractor whose rejection uses the API error envelope.
///
/// A body that cannot be parsed into `T` (wrong content type, malformed
/// JSON, missing fields) is answered with `400 validation_error` instead of
/// axum's plain-text rejection.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: serde::de::DeserializeOwned + JsonSchema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|err| {
            tracing::warn!("Request body rejected: {err}");
            AppError::new(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "Request validation failed",
                false,
            )
        })?;

        Ok(Self(payload))
    }
}

impl<T> OperationInput for ApiJson<T>
where
    T: JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        // Same body shape as Json<T>, so the schema delegates
        Json::<T>::operation_input(ctx, operation);
    }
}
