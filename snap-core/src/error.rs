//! Error types for the snap core

use thiserror::Error;

use crate::host::ProviderError;
use crate::verifier::VerifierError;

/// Result type for snap operations
pub type SnapResult<T> = Result<T, SnapError>;

/// Errors that can occur while handling an RPC request or a transaction
/// insight. Every handler error propagates to the caller unmodified.
#[derive(Error, Debug)]
pub enum SnapError {
    /// The RPC method name is not part of the snap's surface
    #[error("Method not found: {0}")]
    UnknownMethod(String),

    /// RPC params were absent or had the wrong shape
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// A required field is missing on the pending transaction
    #[error("Missing transaction parameter: {0}")]
    MissingParameter(&'static str),

    /// The wallet provider returned no connected account
    #[error("No connected account")]
    NoConnectedAccount,

    /// A configured or returned address failed to parse
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Host-managed persisted state failed
    #[error("Persisted state error: {0}")]
    State(String),

    /// The host dialog could not be shown
    #[error("Dialog error: {0}")]
    Dialog(String),

    /// Wallet provider error
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Identity verifier error
    #[error(transparent)]
    Verifier(#[from] VerifierError),

    /// Gas oracle request failed
    #[error("Gas oracle request failed: {0}")]
    GasOracle(String),

    /// Counterfactual address derivation failed
    #[error("Abstract account derivation failed: {0}")]
    AccountDerivation(String),
}
