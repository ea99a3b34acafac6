//! In-memory fakes for the host capabilities and the remote verifier.

#![allow(dead_code)]

use std::sync::Mutex;

use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use common_types::VerifiedClaims;
use snap_core::config::SnapConfig;
use snap_core::error::SnapError;
use snap_core::host::{HostBridge, IdentityStore, ProviderError, WalletProvider};
use snap_core::identity::IdentityRecord;
use snap_core::ui::Content;
use snap_core::verifier::{IdentityVerifier, VerifierError};

pub fn test_config() -> SnapConfig {
    SnapConfig {
        verify_endpoint: "http://localhost:8001/api/worldcoin/verify".to_string(),
        client_id: "app_test".to_string(),
        redirect_uri: "https://example.com/callback".to_string(),
        entry_point_address: "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789".to_string(),
        factory_address: "0x9406Cc6185a346906296840746125a0E44976454".to_string(),
        gas_oracle_url: "http://localhost:1/gasnow".to_string(),
    }
}

pub fn test_claims(sub: &str) -> VerifiedClaims {
    VerifiedClaims {
        sub: sub.to_string(),
        iss: "https://id.worldcoin.org".to_string(),
        aud: None,
        exp: 4_102_444_800,
        iat: Some(1_700_000_000),
        nonce: Some("1700000000000".to_string()),
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    record: Mutex<Option<IdentityRecord>>,
}

impl InMemoryStore {
    pub fn with_record(world_id: &str) -> Self {
        Self {
            record: Mutex::new(Some(IdentityRecord {
                world_id: world_id.to_string(),
            })),
        }
    }

    pub fn current(&self) -> Option<IdentityRecord> {
        self.record.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityStore for InMemoryStore {
    async fn get(&self) -> Result<Option<IdentityRecord>, SnapError> {
        Ok(self.record.lock().unwrap().clone())
    }

    async fn set(&self, record: IdentityRecord) -> Result<(), SnapError> {
        *self.record.lock().unwrap() = Some(record);
        Ok(())
    }
}

/// Programmed verifier outcome
pub enum VerifierOutcome {
    Accept(VerifiedClaims),
    Reject(u16),
    Broken,
}

pub struct FakeVerifier {
    outcome: VerifierOutcome,
    pub calls: Mutex<Vec<String>>,
}

impl FakeVerifier {
    pub fn new(outcome: VerifierOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl IdentityVerifier for FakeVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedClaims, VerifierError> {
        self.calls.lock().unwrap().push(token.to_string());
        match &self.outcome {
            VerifierOutcome::Accept(claims) => Ok(claims.clone()),
            VerifierOutcome::Reject(status) => Err(VerifierError::Rejected { status: *status }),
            VerifierOutcome::Broken => Err(VerifierError::InvalidResponse(
                "connection refused".to_string(),
            )),
        }
    }
}

pub struct FakeWallet {
    pub accounts: Vec<String>,
    pub revert_data: Option<Bytes>,
}

impl FakeWallet {
    pub fn with_accounts(accounts: &[&str]) -> Self {
        Self {
            accounts: accounts.iter().map(ToString::to_string).collect(),
            revert_data: None,
        }
    }
}

#[async_trait]
impl WalletProvider for FakeWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.accounts.clone())
    }

    async fn call(&self, _to: Address, _data: Bytes) -> Result<Bytes, ProviderError> {
        match &self.revert_data {
            Some(data) => Err(ProviderError::Revert(data.clone())),
            None => Err(ProviderError::Transport("no node configured".to_string())),
        }
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub alerts: Mutex<Vec<Content>>,
}

impl RecordingHost {
    pub fn alert_count(&self) -> usize {
        self.alerts.lock().unwrap().len()
    }
}

#[async_trait]
impl HostBridge for RecordingHost {
    async fn alert(&self, content: Content) -> Result<(), SnapError> {
        self.alerts.lock().unwrap().push(content);
        Ok(())
    }
}
