//! Snap configuration read from the environment.
//!
//! All values are carried as opaque strings and validated only where they are
//! used (addresses parse at derivation time, never at load time).

use std::env;

use crate::fees::DEFAULT_GAS_ORACLE_URL;

/// Configuration for the snap's outbound integrations
#[derive(Debug, Clone)]
pub struct SnapConfig {
    /// Full URL of the token verification endpoint
    pub verify_endpoint: String,
    /// World ID OIDC client id
    pub client_id: String,
    /// Redirect URI registered with the identity provider
    pub redirect_uri: String,
    /// ERC-4337 entry point contract address
    pub entry_point_address: String,
    /// SimpleAccount factory contract address
    pub factory_address: String,
    /// Gas fee estimate endpoint
    pub gas_oracle_url: String,
}

impl SnapConfig {
    /// Reads the configuration from environment variables, falling back to
    /// development defaults. Missing contract addresses stay empty and fail
    /// at use, matching the behavior of an unconfigured deployment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            verify_endpoint: env::var("VERIFY_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8001/api/worldcoin/verify".to_string()),
            client_id: env::var("WORLD_COIN_CLIENT_ID").unwrap_or_default(),
            redirect_uri: env::var("WORLD_COIN_REDIRECT_URI").unwrap_or_default(),
            entry_point_address: env::var("ENTRY_POINT_ADDRESS").unwrap_or_default(),
            factory_address: env::var("FACTORY_ADDRESS").unwrap_or_default(),
            gas_oracle_url: env::var("GAS_ORACLE_URL")
                .unwrap_or_else(|_| DEFAULT_GAS_ORACLE_URL.to_string()),
        }
    }
}
