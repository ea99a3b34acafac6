//! RPC request dispatcher.
//!
//! A pure mapping from method name to handler. Each handler is independent
//! and stateless except for the two that touch the persisted identity store;
//! handler errors propagate to the caller unmodified and nothing is retried.

use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::account;
use crate::config::SnapConfig;
use crate::error::SnapError;
use crate::fees;
use crate::host::{HostBridge, IdentityStore, WalletProvider};
use crate::identity::IdentityRecord;
use crate::ui::{panel, text};
use crate::verifier::IdentityVerifier;

/// The snap's RPC surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum RpcMethod {
    /// Show a greeting dialog with the current gas fee estimate
    #[strum(serialize = "hello")]
    Hello,
    /// Write the identity record
    #[strum(serialize = "setWorldId")]
    SetWorldId,
    /// Read the identity record
    #[strum(serialize = "getWorldId")]
    GetWorldId,
    /// Return the connected externally-owned account
    #[strum(serialize = "connect_eoa")]
    ConnectEoa,
    /// Derive and return the abstract-account address
    #[strum(serialize = "connect_aa")]
    ConnectAa,
}

/// An incoming JSON-RPC-shaped request
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    /// Requested method name
    pub method: String,
    /// Method-specific parameters
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// Method-specific response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcResponse {
    /// The write was accepted
    Ack,
    /// The persisted identity record, if any
    WorldId(Option<IdentityRecord>),
    /// A wallet address
    Address(String),
    /// Dialog side effect only, nothing to return
    None,
}

/// Capabilities and configuration the dispatcher runs against
#[derive(Clone)]
pub struct SnapContext {
    /// Snap configuration
    pub config: SnapConfig,
    /// Persisted identity state
    pub store: Arc<dyn IdentityStore>,
    /// Connected wallet provider
    pub wallet: Arc<dyn WalletProvider>,
    /// Host dialog surface
    pub host: Arc<dyn HostBridge>,
    /// Remote identity verifier
    pub verifier: Arc<dyn IdentityVerifier>,
}

/// Routes a request to its handler.
///
/// # Errors
///
/// - [`SnapError::UnknownMethod`] for an unrecognized method name, with no
///   side effect
/// - [`SnapError::InvalidParams`] if `setWorldId` params are absent or
///   malformed
/// - any error thrown by the invoked handler, unmodified
pub async fn dispatch(
    origin: &str,
    request: RpcRequest,
    ctx: &SnapContext,
) -> Result<RpcResponse, SnapError> {
    let method = RpcMethod::from_str(&request.method)
        .map_err(|_| SnapError::UnknownMethod(request.method.clone()))?;

    tracing::debug!(%method, origin, "dispatching rpc request");

    match method {
        RpcMethod::Hello => hello(origin, ctx).await,
        RpcMethod::SetWorldId => set_world_id(request.params, ctx).await,
        RpcMethod::GetWorldId => Ok(RpcResponse::WorldId(ctx.store.get().await?)),
        RpcMethod::ConnectEoa => connect_eoa(ctx).await,
        RpcMethod::ConnectAa => connect_aa(ctx).await,
    }
}

async fn hello(origin: &str, ctx: &SnapContext) -> Result<RpcResponse, SnapError> {
    let estimate = fees::fetch_gas_estimate(&ctx.config.gas_oracle_url).await?;

    ctx.host
        .alert(panel(vec![
            text(format!("Hello, **{origin}**!")),
            text(format!("Current gas fee estimates: {estimate}")),
        ]))
        .await?;

    Ok(RpcResponse::None)
}

async fn set_world_id(
    params: Option<serde_json::Value>,
    ctx: &SnapContext,
) -> Result<RpcResponse, SnapError> {
    let params = params.ok_or_else(|| SnapError::InvalidParams("missing params".to_string()))?;
    let record: IdentityRecord =
        serde_json::from_value(params).map_err(|e| SnapError::InvalidParams(e.to_string()))?;

    ctx.store.set(record).await?;
    Ok(RpcResponse::Ack)
}

async fn connect_eoa(ctx: &SnapContext) -> Result<RpcResponse, SnapError> {
    let accounts = ctx.wallet.request_accounts().await?;
    let primary = accounts.into_iter().next().ok_or(SnapError::NoConnectedAccount)?;
    Ok(RpcResponse::Address(primary))
}

async fn connect_aa(ctx: &SnapContext) -> Result<RpcResponse, SnapError> {
    let address = account::abstract_account_address(ctx.wallet.as_ref(), &ctx.config).await?;
    Ok(RpcResponse::Address(address.to_checksum(None)))
}
