//! Counterfactual abstract-account address derivation.
//!
//! Follows the ERC-4337 SimpleAccount scheme: the deployment init code is the
//! factory address followed by the `createAccount(owner, salt)` calldata, and
//! the entry point's `getSenderAddress` simulation reverts with the address
//! the account would deploy at.

use alloy_primitives::{Address, U256};
use alloy_sol_types::{SolCall, SolError};

use crate::config::SnapConfig;
use crate::error::SnapError;
use crate::host::{ProviderError, WalletProvider};

mod erc4337 {
    alloy_sol_types::sol! {
        function createAccount(address owner, uint256 salt) returns (address ret);
        function getSenderAddress(bytes initCode);
        error SenderAddressResult(address sender);
    }
}

use erc4337::{createAccountCall, getSenderAddressCall, SenderAddressResult};

/// Derives the abstract-account address for the connected signer.
///
/// The owner is the wallet's primary account; the salt is fixed at zero, so
/// the derivation is deterministic per owner and factory.
///
/// # Errors
///
/// - [`SnapError::NoConnectedAccount`] if the wallet reports no accounts
/// - [`SnapError::InvalidAddress`] if the owner or a configured contract
///   address fails to parse
/// - [`SnapError::AccountDerivation`] if the entry point does not revert with
///   a decodable sender address
pub async fn abstract_account_address(
    wallet: &dyn WalletProvider,
    config: &SnapConfig,
) -> Result<Address, SnapError> {
    let accounts = wallet.request_accounts().await?;
    let owner = accounts
        .first()
        .ok_or(SnapError::NoConnectedAccount)?
        .parse::<Address>()
        .map_err(|e| SnapError::InvalidAddress(e.to_string()))?;

    let factory = parse_address(&config.factory_address)?;
    let entry_point = parse_address(&config.entry_point_address)?;

    let init_code = init_code(factory, owner, U256::ZERO);
    let calldata = getSenderAddressCall {
        initCode: init_code.into(),
    }
    .abi_encode();

    // getSenderAddress always reverts; the address rides in the revert data.
    match wallet.call(entry_point, calldata.into()).await {
        Err(ProviderError::Revert(data)) => {
            let result = SenderAddressResult::abi_decode(&data)
                .map_err(|e| SnapError::AccountDerivation(e.to_string()))?;
            Ok(result.sender)
        }
        Ok(_) => Err(SnapError::AccountDerivation(
            "entry point returned instead of reverting with a sender address".to_string(),
        )),
        Err(err) => Err(err.into()),
    }
}

/// Builds the ERC-4337 init code: factory address followed by the
/// `createAccount` calldata.
#[must_use]
pub fn init_code(factory: Address, owner: Address, salt: U256) -> Vec<u8> {
    let mut code = factory.to_vec();
    code.extend(createAccountCall { owner, salt }.abi_encode());
    code
}

fn parse_address(value: &str) -> Result<Address, SnapError> {
    value
        .parse::<Address>()
        .map_err(|e| SnapError::InvalidAddress(format!("{value}: {e}")))
}
