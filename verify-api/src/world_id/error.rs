//! Error types for World ID token verification

use thiserror::Error;

/// Errors that can occur while verifying an identity token
#[derive(Error, Debug)]
pub enum WorldIdError {
    /// The token header carries no key id
    #[error("Token has no key id")]
    MissingKeyId,

    /// No published key matches the token's key id, even after a refresh
    #[error("Unknown key id: {0}")]
    UnknownKeyId(String),

    /// The JWKS document could not be fetched or parsed
    #[error("JWKS fetch failed: {0}")]
    JwksFetch(String),

    /// The matched key cannot be used for verification
    #[error("Unsupported key: {0}")]
    UnsupportedKey(String),

    /// Signature or claims validation failed
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}
