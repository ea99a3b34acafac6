//! Identity verifier client.
//!
//! The production implementation forwards the stored token to the
//! verification endpoint, which checks it against the identity provider's
//! published key set. Every call is a single round-trip with no retry and no
//! caching of the result.

/// Verifier error types
pub mod error;

use async_trait::async_trait;
use common_types::{VerifiedClaims, VerifyRequest, VerifyResponse};

pub use error::VerifierError;

use crate::request;

/// Remote identity verification, injected into the insight decision.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verifies `token` and returns its decoded claims.
    async fn verify(&self, token: &str) -> Result<VerifiedClaims, VerifierError>;
}

/// [`IdentityVerifier`] backed by the verification HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpIdentityVerifier {
    endpoint: String,
}

impl HttpIdentityVerifier {
    /// Creates a verifier client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedClaims, VerifierError> {
        let response = request::client()
            .post(&self.endpoint)
            .json(&VerifyRequest {
                token: token.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "verifier rejected token");
            return Err(VerifierError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| VerifierError::InvalidResponse(e.to_string()))?;

        Ok(body.result)
    }
}
