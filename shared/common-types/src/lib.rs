use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request body for the token verification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VerifyRequest {
    /// The World ID token to verify, passed through verbatim
    pub token: String,
}

/// Response body for the token verification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VerifyResponse {
    /// Decoded claims of the verified token
    pub result: VerifiedClaims,
}

/// Decoded payload of a successfully verified identity token.
///
/// Produced per verification call and never persisted. Optional fields are
/// absent when the issuer does not include them in the token.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VerifiedClaims {
    /// Subject identifier (the proven identity)
    pub sub: String,
    /// Token issuer
    pub iss: String,
    /// Audience the token was issued for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Expiry as a Unix timestamp
    pub exp: i64,
    /// Issued-at as a Unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Nonce carried through the authorization flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}
