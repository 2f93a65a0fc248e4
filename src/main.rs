use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use rust_farm_web3::{
    client::rpc_client::redact_rpc_url,
    config::{CONTRACT_ADDRESS_VAR, FarmConfig, GAS_LIMIT_VAR, PRIVATE_KEY_VAR, RPC_URL_VAR},
    run_farm_reader,
};
use tracing::info;

/// Read the Dopex farm staking state for one account.
///
/// Every flag falls back to its environment variable (a `.env` file is
/// loaded first) and then to the built-in default.
#[derive(Parser, Debug)]
#[command(name = "farm-reader", version, about)]
struct Args {
    /// Hex private key of the account to inspect, only used to derive its address [env: PRIVATE_KEY]
    #[arg(long)]
    private_key: Option<String>,

    /// Gas limit, decimal [env: GAS_LIMIT]
    #[arg(long)]
    gas_limit: Option<String>,

    /// JSON-RPC endpoint [env: FARM_RPC_URL]
    #[arg(long)]
    rpc_url: Option<String>,

    /// Farm contract address [env: FARM_CONTRACT_ADDRESS]
    #[arg(long = "contract")]
    contract_address: Option<String>,

    /// Print the snapshot as JSON instead of one line per field
    #[arg(long)]
    json: bool,
}

impl Args {
    fn lookup(&self, name: &str) -> Option<String> {
        match name {
            PRIVATE_KEY_VAR => self.private_key.clone(),
            GAS_LIMIT_VAR => self.gas_limit.clone(),
            RPC_URL_VAR => self.rpc_url.clone(),
            CONTRACT_ADDRESS_VAR => self.contract_address.clone(),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = FarmConfig::from_env_with_overrides(|name| args.lookup(name))
        .context("Failed to load configuration")?;

    info!(
        endpoint = %redact_rpc_url(&config.rpc_url),
        contract = %config.contract_address,
        "starting farm reader"
    );

    if args.json {
        let snapshot = run_farm_reader(&config, &mut io::sink())
            .await
            .context("Failed to read farm state")?;

        let json = serde_json::to_string_pretty(&snapshot).context("Failed to encode snapshot")?;
        println!("{json}");
    } else {
        run_farm_reader(&config, &mut io::stdout())
            .await
            .context("Failed to read farm state")?;
    }

    Ok(())
}
