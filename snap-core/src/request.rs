use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;

/// Default timeout for outbound requests
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Shared HTTP client with connection pooling for all outbound requests.
/// Initialized once and reused across the verifier and fee oracle clients.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
        .user_agent(format!("kyc-snap/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Returns the shared HTTP client.
pub(crate) fn client() -> &'static Client {
    &HTTP_CLIENT
}
