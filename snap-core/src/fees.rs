//! Gas-fee oracle client used by the `hello` dialog.

use crate::error::SnapError;
use crate::request;

/// Default gas fee estimate endpoint
pub const DEFAULT_GAS_ORACLE_URL: &str = "https://beaconcha.in/api/v1/execution/gasnow";

/// Fetches the current gas fee estimate and returns the raw response body.
///
/// # Errors
///
/// Returns [`SnapError::GasOracle`] if the request fails or the body cannot
/// be read.
pub async fn fetch_gas_estimate(url: &str) -> Result<String, SnapError> {
    let response = request::client()
        .get(url)
        .send()
        .await
        .map_err(|e| SnapError::GasOracle(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| SnapError::GasOracle(e.to_string()))
}
