use std::{fmt, str::FromStr};

use alloy_primitives::Address;

use crate::{
    client::rpc_client::redact_rpc_url,
    constants::{FARM_CONTRACT_ADDRESS, PublicRpcUrl},
    error::FarmError,
};

pub const RPC_URL_VAR: &str = "FARM_RPC_URL";
pub const CONTRACT_ADDRESS_VAR: &str = "FARM_CONTRACT_ADDRESS";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";
pub const GAS_LIMIT_VAR: &str = "GAS_LIMIT";

/// Everything the reader needs to run. The private key stays a raw string
/// until it is decoded, and is never printed.
#[derive(Clone)]
pub struct FarmConfig {
    pub rpc_url: String,
    pub contract_address: Address,
    pub private_key: String,
    pub gas_limit: String,
}

impl FarmConfig {
    pub fn new(private_key: String, gas_limit: String) -> Self {
        Self {
            rpc_url: PublicRpcUrl::Mainnet.url().to_string(),
            contract_address: FARM_CONTRACT_ADDRESS,
            private_key,
            gas_limit,
        }
    }

    /// Loads `.env` if there is one, then reads the process environment.
    /// A value returned by `overrides` wins over the environment.
    pub fn from_env_with_overrides<F>(overrides: F) -> Result<Self, FarmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| overrides(name).or_else(|| std::env::var(name).ok()))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FarmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let private_key = lookup(PRIVATE_KEY_VAR)
            .ok_or_else(|| FarmError::Config(format!("{PRIVATE_KEY_VAR} not set")))?;
        let gas_limit = lookup(GAS_LIMIT_VAR)
            .ok_or_else(|| FarmError::Config(format!("{GAS_LIMIT_VAR} not set")))?;

        let mut config = Self::new(private_key, gas_limit);

        if let Some(rpc_url) = lookup(RPC_URL_VAR) {
            config.rpc_url = rpc_url;
        }

        if let Some(address) = lookup(CONTRACT_ADDRESS_VAR) {
            config.contract_address = parse_contract_address(&address)?;
        }

        Ok(config)
    }
}

pub fn parse_contract_address(address: &str) -> Result<Address, FarmError> {
    Address::from_str(address)
        .map_err(|err| FarmError::Config(format!("invalid contract address '{address}': {err}")))
}

impl fmt::Debug for FarmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FarmConfig")
            .field("rpc_url", &redact_rpc_url(&self.rpc_url))
            .field("contract_address", &self.contract_address)
            .field("private_key", &"<redacted>")
            .field("gas_limit", &self.gas_limit)
            .finish()
    }
}
