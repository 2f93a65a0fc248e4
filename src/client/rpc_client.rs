use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use alloy_primitives::Address;
use tracing::{debug, info};

use crate::{
    client::farm_contract::IFarm::{self, IFarmInstance},
    config::FarmConfig,
    error::FarmError,
};

/// `scheme://host[:port]` of an RPC URL. Path, query and credentials are
/// dropped since hosted endpoints carry API keys there.
pub fn endpoint_label(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}://{host}:{port}", url.scheme()),
        (Some(host), None) => format!("{}://{host}", url.scheme()),
        (None, _) => format!("{}://", url.scheme()),
    }
}

pub fn redact_rpc_url(rpc_url: &str) -> String {
    match rpc_url.parse::<Url>() {
        Ok(url) => endpoint_label(&url),
        Err(_) => "<invalid url>".to_string(),
    }
}

/// An open JSON-RPC connection. Dropping the client releases the provider.
#[derive(Clone)]
pub struct PublicRpcClient {
    pub provider: DynProvider,
    endpoint: String,
    chain_id: u64,
}

impl PublicRpcClient {
    pub async fn new(rpc_url: &str) -> Result<Self, FarmError> {
        let url: Url = rpc_url.parse().map_err(|err| FarmError::InvalidUrl {
            reason: format!("{err}"),
        })?;
        let endpoint = endpoint_label(&url);

        debug!(%endpoint, "dialing RPC endpoint");

        // Only view calls are made, no transaction fillers needed
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(url)
            .erased();

        Self::from_provider(provider, endpoint).await
    }

    pub async fn new_from_config(config: &FarmConfig) -> Result<Self, FarmError> {
        Self::new(&config.rpc_url).await
    }

    /// Wraps an already built provider. Asks the node for its chain id, so an
    /// unreachable endpoint is reported here and not on the first view call.
    pub async fn from_provider(provider: DynProvider, endpoint: String) -> Result<Self, FarmError> {
        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|source| FarmError::Dial {
                endpoint: endpoint.clone(),
                source,
            })?;

        info!(%endpoint, chain_id, "connected to RPC endpoint");

        Ok(Self {
            provider,
            endpoint,
            chain_id,
        })
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Binds the farm interface to `address` once the node confirms there
    /// is code deployed there.
    pub async fn bind_farm(&self, address: Address) -> Result<IFarmInstance<DynProvider>, FarmError> {
        let code = self
            .provider
            .get_code_at(address)
            .await
            .map_err(|source| FarmError::Bind { address, source })?;

        if code.is_empty() {
            return Err(FarmError::NoContractCode(address));
        }

        debug!(%address, code_len = code.len(), "farm contract bound");

        Ok(IFarm::new(address, self.provider.clone()))
    }
}
