//! Plugin-side core for the KYC snap.
//!
//! Everything the host invokes goes through two entry points: the RPC
//! dispatcher ([`rpc::dispatch`]) and the transaction-insight hook
//! ([`insight::transaction_insight`]). The ambient host objects (persisted
//! state, wallet provider, dialog surface) are modeled as injected capability
//! traits in [`host`], so the logic runs and tests without a live extension
//! host.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Abstract-account address derivation
pub mod account;

/// Snap configuration
pub mod config;

/// Error types
pub mod error;

/// Gas-fee oracle client
pub mod fees;

/// Host capability traits
pub mod host;

/// Identity record and authorization redirect
pub mod identity;

/// Transaction-insight decision
pub mod insight;

/// RPC request dispatcher
pub mod rpc;

/// Insight/dialog content model
pub mod ui;

/// Identity verifier client
pub mod verifier;

/// Shared HTTP client for outbound requests.
mod request;
