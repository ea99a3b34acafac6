use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};
use verify_api::{server, types::Environment, world_id::RemoteJwks};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON log format for staging/production, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let jwks = Arc::new(RemoteJwks::new(environment.jwks_url()));

    server::start(environment, jwks).await
}
