//! Token verification service for the KYC snap.
//!
//! A single stateless endpoint: accept an identity token, verify it against
//! the identity provider's published key set, and return its decoded claims.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Route handlers
pub mod routes;

/// Server startup
pub mod server;

/// Environment configuration and error envelope
pub mod types;

/// World ID token verification
pub mod world_id;
