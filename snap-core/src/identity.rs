//! Persisted identity record and the provider authorization redirect.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::SnapConfig;
use crate::error::SnapError;

/// Base URL of the identity provider's hosted authorization flow
pub const AUTHORIZE_URL: &str = "https://id.worldcoin.org/authorize";

/// The single record kept in host-managed persisted state.
///
/// `world_id` is an opaque bearer token for the identity provider, stored
/// verbatim and never parsed at write time. No expiry is enforced here;
/// every transaction insight re-verifies the token remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    /// The identity provider token
    pub world_id: String,
}

/// Builds the hosted authorization URL the front-end redirects to.
///
/// The connected wallet address rides along as `state` so it survives the
/// round-trip through the provider; `nonce` is a caller-supplied timestamp.
///
/// # Errors
///
/// Returns [`SnapError::InvalidParams`] if the resulting URL cannot be built,
/// which only happens with a malformed base constant.
pub fn authorize_redirect_url(
    config: &SnapConfig,
    wallet_address: &str,
    nonce: i64,
) -> Result<String, SnapError> {
    let nonce = nonce.to_string();
    let url = Url::parse_with_params(
        AUTHORIZE_URL,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code id_token"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("state", wallet_address),
            ("nonce", nonce.as_str()),
        ],
    )
    .map_err(|e| SnapError::InvalidParams(e.to_string()))?;

    Ok(url.into())
}

/// [`authorize_redirect_url`] with the nonce derived from the current time,
/// in milliseconds as the original flow used.
///
/// # Errors
///
/// Propagates any error from [`authorize_redirect_url`].
pub fn authorize_redirect_url_now(
    config: &SnapConfig,
    wallet_address: &str,
) -> Result<String, SnapError> {
    authorize_redirect_url(config, wallet_address, chrono::Utc::now().timestamp_millis())
}
