//! Capability traits standing in for the host's ambient objects.
//!
//! The extension host exposes persisted state, the wallet provider, and the
//! dialog surface as globals. They are modeled here as injected traits so the
//! dispatcher and the insight decision can be exercised against in-memory
//! fakes.

use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use thiserror::Error;

use crate::error::SnapError;
use crate::identity::IdentityRecord;
use crate::ui::Content;

/// Errors surfaced by the wallet provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure talking to the node
    #[error("Provider transport error: {0}")]
    Transport(String),

    /// The call reverted; carries the raw revert data
    #[error("Execution reverted")]
    Revert(Bytes),

    /// The provider rejected the request (e.g. user denied)
    #[error("Provider rejected request: {0}")]
    Rejected(String),
}

/// Host-managed persisted identity state.
///
/// A single opaque record scoped to the plugin; the host owns the storage
/// engine, this trait only exposes `get`/`set` over it.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Reads the persisted identity record, if one was ever written.
    async fn get(&self) -> Result<Option<IdentityRecord>, SnapError>;

    /// Replaces the persisted identity record.
    async fn set(&self, record: IdentityRecord) -> Result<(), SnapError>;
}

/// Connected wallet provider (the `ethereum` global).
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Returns the connected accounts, primary account first.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Performs a read-only contract call against `to` with calldata `data`.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ProviderError>;
}

/// Host dialog surface (the `snap_dialog` request).
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Shows an alert dialog with the given content.
    async fn alert(&self, content: Content) -> Result<(), SnapError>;
}
