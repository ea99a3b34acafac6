//! Transaction-insight decision.
//!
//! Invoked by the host before the user confirms a pending transaction. The
//! decision gates on the persisted identity record: absent or failing
//! re-verification blocks the transaction, a verified identity approves it
//! with the subject identifier annotated for display.

use serde::Deserialize;

use crate::error::SnapError;
use crate::host::IdentityStore;
use crate::ui::{heading, panel, text, Content};
use crate::verifier::{IdentityVerifier, VerifierError};

/// User-facing message shown for every blocked transaction. Deliberately the
/// same for a missing record and a failed re-verification.
pub const BLOCKED_MESSAGE: &str = "KYC authentication is required";

/// Heading of the insight panel
const PANEL_HEADING: &str = "KYC Snap";

/// Read-only snapshot of the pending transaction handed over by the host.
///
/// Every field is optional at the wire level; presence is enforced only after
/// the identity check succeeds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTransaction {
    /// Chain the transaction targets
    pub chain_id: Option<String>,
    /// Sender address
    pub from: Option<String>,
    /// Recipient address
    pub to: Option<String>,
    /// Calldata, `"0x"` for plain transfers
    pub data: Option<String>,
}

/// Machine-readable reason a transaction was blocked.
///
/// The user-facing message does not distinguish the two; callers that need to
/// can branch on this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// No identity record has ever been stored
    IdentityMissing,
    /// A record exists but its token failed re-verification
    VerificationFailed,
}

/// Outcome of the insight decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightDecision {
    /// The transaction must not proceed
    Blocked {
        /// Why the transaction was blocked
        reason: BlockReason,
    },
    /// The transaction may proceed
    Approved {
        /// Verified subject identifier, annotated for display
        subject: String,
    },
}

/// Decision plus its rendered panel, the shape the host hook returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionInsight {
    /// The decision taken
    pub decision: InsightDecision,
    /// Host-displayable rendering of the decision
    pub content: Content,
}

/// Decides whether a pending transaction may proceed.
///
/// Reads the persisted identity record and re-verifies its token remotely on
/// every call; nothing is cached and the store is never mutated. A verifier
/// rejection blocks the transaction, while a transport-level failure
/// propagates as an error.
///
/// # Errors
///
/// - [`SnapError::MissingParameter`] if verification succeeds but a required
///   transaction field is absent
/// - [`SnapError::Verifier`] on transport failure or an unexpected verifier
///   response
/// - any error surfaced by the identity store
pub async fn decide(
    tx: &PendingTransaction,
    store: &dyn IdentityStore,
    verifier: &dyn IdentityVerifier,
) -> Result<InsightDecision, SnapError> {
    let Some(record) = store.get().await? else {
        tracing::debug!("no identity record, blocking transaction");
        return Ok(InsightDecision::Blocked {
            reason: BlockReason::IdentityMissing,
        });
    };

    let claims = match verifier.verify(&record.world_id).await {
        Ok(claims) => claims,
        Err(VerifierError::Rejected { status }) => {
            tracing::warn!(status, "identity re-verification failed, blocking transaction");
            return Ok(InsightDecision::Blocked {
                reason: BlockReason::VerificationFailed,
            });
        }
        Err(err) => return Err(err.into()),
    };

    require_field(tx.from.as_deref(), "from")?;
    require_field(tx.to.as_deref(), "to")?;
    require_field(tx.data.as_deref(), "data")?;
    require_field(tx.chain_id.as_deref(), "chainId")?;

    Ok(InsightDecision::Approved {
        subject: claims.sub,
    })
}

/// Renders a decision into the host-displayable panel.
#[must_use]
pub fn render(decision: &InsightDecision) -> Content {
    match decision {
        InsightDecision::Blocked { .. } => {
            panel(vec![heading(PANEL_HEADING), text(BLOCKED_MESSAGE)])
        }
        InsightDecision::Approved { subject } => panel(vec![
            heading(PANEL_HEADING),
            text(format!("Transaction approved for verified identity **{subject}**.")),
        ]),
    }
}

/// The transaction-insight hook: decision plus rendered content.
///
/// # Errors
///
/// Propagates any error from [`decide`].
pub async fn transaction_insight(
    tx: &PendingTransaction,
    store: &dyn IdentityStore,
    verifier: &dyn IdentityVerifier,
) -> Result<TransactionInsight, SnapError> {
    let decision = decide(tx, store, verifier).await?;
    let content = render(&decision);
    Ok(TransactionInsight { decision, content })
}

fn require_field(value: Option<&str>, name: &'static str) -> Result<(), SnapError> {
    if value.is_none() {
        return Err(SnapError::MissingParameter(name));
    }
    Ok(())
}
