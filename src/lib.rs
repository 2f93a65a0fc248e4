pub mod basic_elements;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod types;

use std::io::Write;

use tracing::{debug, info};

use crate::{
    basic_elements::{gas::parse_gas_limit, keys::address_from_private_key},
    client::rpc_client::PublicRpcClient,
    config::FarmConfig,
    error::FarmError,
    helpers::farm_reader::read_farm,
    types::snapshot::FarmSnapshot,
};

/// Reads the Dopex farm state for the account behind `private_key` from the
/// default public endpoint, printing each value to stdout.
pub async fn read_farm_state(private_key: &str, gas_limit: &str) -> Result<FarmSnapshot, FarmError> {
    let config = FarmConfig::new(private_key.to_string(), gas_limit.to_string());

    run_farm_reader(&config, &mut std::io::stdout()).await
}

/// Inputs are validated before the endpoint is dialed, so a bad key or gas
/// limit never produces network traffic.
pub async fn run_farm_reader<W: Write>(config: &FarmConfig, out: &mut W) -> Result<FarmSnapshot, FarmError> {
    let account = address_from_private_key(&config.private_key)?;

    // The gas limit only matters for transactions, view calls ignore it
    let gas_limit = parse_gas_limit(&config.gas_limit)?;
    debug!(%gas_limit, "gas limit parsed");

    let client = PublicRpcClient::new_from_config(config).await?;
    let farm = client.bind_farm(config.contract_address).await?;

    info!(
        %account,
        contract = %config.contract_address,
        chain_id = client.chain_id(),
        "reading farm state"
    );

    read_farm(&farm, account, out).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    // Any dial attempt against this URL would fail with InvalidUrl, so getting
    // a different error proves the endpoint was never touched.
    fn config_with_unusable_url(private_key: &str, gas_limit: &str) -> FarmConfig {
        let mut config = FarmConfig::new(private_key.to_string(), gas_limit.to_string());
        config.rpc_url = "::not-an-endpoint::".to_string();
        config
    }

    #[tokio::test]
    async fn test_invalid_private_key_fails_before_network() {
        let config = config_with_unusable_url("0xnothex", "21000");
        let mut out = Vec::new();

        let result = run_farm_reader(&config, &mut out).await;

        assert!(matches!(result, Err(FarmError::KeyDecode(_))));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_gas_limit_fails_before_network() {
        let config = config_with_unusable_url(DEV_KEY, "lots");
        let mut out = Vec::new();

        let result = run_farm_reader(&config, &mut out).await;

        assert!(matches!(result, Err(FarmError::GasLimit(ref g)) if g == "lots"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_valid_inputs_reach_the_dial_step() {
        let config = config_with_unusable_url(DEV_KEY, "21000");
        let mut out = Vec::new();

        let result = run_farm_reader(&config, &mut out).await;

        assert!(matches!(result, Err(FarmError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_read_farm_state_checks_inputs_before_dialing() {
        // Both fail before the public endpoint would be contacted
        let bad_key = read_farm_state("0xnothex", "21000").await;
        assert!(matches!(bad_key, Err(FarmError::KeyDecode(_))));

        let bad_gas = read_farm_state(DEV_KEY, "-21000").await;
        assert!(matches!(bad_gas, Err(FarmError::GasLimit(ref g)) if g == "-21000"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_prints_nothing() {
        let mut config = FarmConfig::new(DEV_KEY.to_string(), "21000".to_string());
        config.rpc_url = "http://127.0.0.1:1".to_string();
        let mut out = Vec::new();

        let result = run_farm_reader(&config, &mut out).await;

        assert!(matches!(result, Err(FarmError::Dial { .. })));
        assert!(out.is_empty());
    }
}
