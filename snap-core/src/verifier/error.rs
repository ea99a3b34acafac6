//! Error types for identity verification

use thiserror::Error;

/// Errors that can occur while verifying an identity token
#[derive(Error, Debug)]
pub enum VerifierError {
    /// The verification request could not be sent
    #[error("Verification request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The verifier rejected the token (non-success status)
    #[error("Verifier rejected token: status {status}")]
    Rejected {
        /// HTTP status returned by the verifier
        status: u16,
    },

    /// The verifier answered with an unexpected body
    #[error("Unexpected verifier response: {0}")]
    InvalidResponse(String),
}
