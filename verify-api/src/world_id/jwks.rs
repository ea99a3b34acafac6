use std::sync::LazyLock;
use std::time::{Duration, Instant};

use jsonwebtoken::jwk::{Jwk, JwkSet};
use reqwest::Client;
use tokio::sync::RwLock;

use super::error::WorldIdError;

/// Default timeout for JWKS requests
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// How long a fetched key set stays fresh before it is refetched
const JWKS_CACHE_TTL: Duration = Duration::from_secs(600);

/// Shared HTTP client with connection pooling for JWKS requests.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .user_agent(format!("verify-api/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

struct CachedSet {
    set: JwkSet,
    fetched_at: Instant,
}

/// Remote JWKS document with a TTL cache.
///
/// Keys are looked up by `kid`. A miss on a fresh cache triggers a refetch
/// before failing, so a provider key rotation is picked up within one
/// request rather than a TTL window.
pub struct RemoteJwks {
    url: String,
    cache: RwLock<Option<CachedSet>>,
}

impl RemoteJwks {
    /// Creates a key set client for the given JWKS URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            cache: RwLock::new(None),
        }
    }

    /// Returns the published key with the given `kid`.
    ///
    /// # Errors
    ///
    /// - [`WorldIdError::JwksFetch`] if the document cannot be fetched
    /// - [`WorldIdError::UnknownKeyId`] if no key matches after a refresh
    pub async fn key(&self, kid: &str) -> Result<Jwk, WorldIdError> {
        if let Some(cached) = self.cache.read().await.as_ref() {
            if cached.fetched_at.elapsed() < JWKS_CACHE_TTL {
                if let Some(key) = cached.set.find(kid) {
                    return Ok(key.clone());
                }
            }
        }

        let set = self.fetch().await?;
        let key = set
            .find(kid)
            .cloned()
            .ok_or_else(|| WorldIdError::UnknownKeyId(kid.to_string()));

        *self.cache.write().await = Some(CachedSet {
            set,
            fetched_at: Instant::now(),
        });

        key
    }

    async fn fetch(&self) -> Result<JwkSet, WorldIdError> {
        tracing::debug!(url = %self.url, "fetching JWKS document");

        let response = HTTP_CLIENT
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| WorldIdError::JwksFetch(e.to_string()))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| WorldIdError::JwksFetch(e.to_string()))
    }
}
