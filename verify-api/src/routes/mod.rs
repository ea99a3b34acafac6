mod docs;

/// Health check endpoint
pub mod health;

/// Token verification endpoint
pub mod verify;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route("/api/worldcoin/verify", post(verify::handler))
}
