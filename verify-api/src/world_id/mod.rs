//! World ID identity-token verification.
//!
//! Tokens are RS256-signed by the identity provider; verification resolves
//! the signing key from the provider's published JWKS by `kid`, then checks
//! the signature, expiry, issuer, and (when configured) audience.

/// Verification error types
pub mod error;

/// Remote JWKS fetching and caching
mod jwks;

use common_types::VerifiedClaims;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

pub use error::WorldIdError;
pub use jwks::RemoteJwks;

/// Claim constraints every verified token must satisfy
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Required `iss` value
    pub issuer: String,
    /// Required `aud` value; `None` disables the audience check
    pub audience: Option<String>,
}

/// Verifies an identity token and returns its decoded claims.
///
/// A single pass with no retry: the key set fetch is the only outbound call,
/// and only when the cache cannot serve the token's `kid`.
///
/// # Errors
///
/// - [`WorldIdError::MissingKeyId`] if the token header has no `kid`
/// - [`WorldIdError::UnknownKeyId`] / [`WorldIdError::JwksFetch`] from key
///   resolution
/// - [`WorldIdError::InvalidToken`] if the signature or any claim check fails
pub async fn verify_identity_token(
    token: &str,
    jwks: &RemoteJwks,
    config: &VerifierConfig,
) -> Result<VerifiedClaims, WorldIdError> {
    let header = decode_header(token)?;
    let kid = header.kid.ok_or(WorldIdError::MissingKeyId)?;

    let jwk = jwks.key(&kid).await?;
    let decoding_key =
        DecodingKey::from_jwk(&jwk).map_err(|e| WorldIdError::UnsupportedKey(e.to_string()))?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[&config.issuer]);
    match &config.audience {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }

    let data = decode::<VerifiedClaims>(token, &decoding_key, &validation)?;
    Ok(data.claims)
}
