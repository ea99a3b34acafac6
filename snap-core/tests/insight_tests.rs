mod common;

use common::{test_claims, FakeVerifier, InMemoryStore, VerifierOutcome};
use snap_core::error::SnapError;
use snap_core::insight::{
    decide, render, transaction_insight, BlockReason, InsightDecision, PendingTransaction,
    BLOCKED_MESSAGE,
};
use snap_core::ui::{Component, Content};

fn complete_transaction() -> PendingTransaction {
    PendingTransaction {
        chain_id: Some("eip155:1".to_string()),
        from: Some("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".to_string()),
        to: Some("0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B".to_string()),
        data: Some("0x".to_string()),
    }
}

fn panel_texts(content: &Content) -> Vec<String> {
    let Content::Panel { children } = content;
    children
        .iter()
        .filter_map(|component| match component {
            Component::Text { value } => Some(value.clone()),
            Component::Heading { .. } => None,
        })
        .collect()
}

#[tokio::test]
async fn blocked_when_identity_record_is_absent() {
    let store = InMemoryStore::default();
    let verifier = FakeVerifier::new(VerifierOutcome::Accept(test_claims("0xsub")));

    let decision = decide(&complete_transaction(), &store, &verifier)
        .await
        .unwrap();

    assert_eq!(
        decision,
        InsightDecision::Blocked {
            reason: BlockReason::IdentityMissing
        }
    );
    // No record means no verification round-trip at all
    assert_eq!(verifier.call_count(), 0);
}

#[tokio::test]
async fn blocked_when_token_fails_verification() {
    let store = InMemoryStore::with_record("expired-token");
    let verifier = FakeVerifier::new(VerifierOutcome::Reject(401));

    let decision = decide(&complete_transaction(), &store, &verifier)
        .await
        .unwrap();

    assert_eq!(
        decision,
        InsightDecision::Blocked {
            reason: BlockReason::VerificationFailed
        }
    );
}

#[tokio::test]
async fn both_blocked_reasons_render_the_same_message() {
    let absent = InsightDecision::Blocked {
        reason: BlockReason::IdentityMissing,
    };
    let failed = InsightDecision::Blocked {
        reason: BlockReason::VerificationFailed,
    };

    assert_eq!(render(&absent), render(&failed));
    assert!(panel_texts(&render(&absent))
        .iter()
        .any(|line| line == BLOCKED_MESSAGE));
}

#[tokio::test]
async fn approved_when_verification_passes_and_fields_present() {
    let store = InMemoryStore::with_record("valid-token");
    let verifier = FakeVerifier::new(VerifierOutcome::Accept(test_claims("0xsubject")));

    let insight = transaction_insight(&complete_transaction(), &store, &verifier)
        .await
        .unwrap();

    assert_eq!(
        insight.decision,
        InsightDecision::Approved {
            subject: "0xsubject".to_string()
        }
    );
    // The annotation carries the verified subject identifier
    assert!(panel_texts(&insight.content)
        .iter()
        .any(|line| line.contains("0xsubject")));
    // The stored token is what got re-verified
    assert_eq!(
        verifier.calls.lock().unwrap().as_slice(),
        ["valid-token".to_string()]
    );
}

#[tokio::test]
async fn missing_fields_fail_with_missing_parameter() {
    let cases: [(&str, fn(&mut PendingTransaction)); 4] = [
        ("from", |tx| tx.from = None),
        ("to", |tx| tx.to = None),
        ("data", |tx| tx.data = None),
        ("chainId", |tx| tx.chain_id = None),
    ];

    for (expected, strip) in cases {
        let store = InMemoryStore::with_record("valid-token");
        let verifier = FakeVerifier::new(VerifierOutcome::Accept(test_claims("0xsub")));

        let mut tx = complete_transaction();
        strip(&mut tx);

        let err = decide(&tx, &store, &verifier).await.unwrap_err();
        match err {
            SnapError::MissingParameter(name) => assert_eq!(name, expected),
            other => panic!("expected MissingParameter({expected}), got {other:?}"),
        }
    }
}

#[tokio::test]
async fn verifier_transport_failure_propagates_as_error() {
    let store = InMemoryStore::with_record("valid-token");
    let verifier = FakeVerifier::new(VerifierOutcome::Broken);

    let err = decide(&complete_transaction(), &store, &verifier)
        .await
        .unwrap_err();
    assert!(matches!(err, SnapError::Verifier(_)));
}

#[tokio::test]
async fn decision_never_mutates_the_store() {
    let store = InMemoryStore::with_record("valid-token");
    let verifier = FakeVerifier::new(VerifierOutcome::Reject(500));

    let before = store.current();
    let _ = decide(&complete_transaction(), &store, &verifier).await;
    assert_eq!(store.current(), before);
}
