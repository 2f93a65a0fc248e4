use alloy::{signers::local::LocalSignerError, sol_types, transports::TransportError};
use alloy_primitives::Address;
use thiserror::Error;

/// Boxed error carried by a failed view call, whatever the backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every variant names the step of the read routine that failed.
///
/// Endpoints are carried as `scheme://host[:port]` only, hosted RPC URLs
/// tend to embed API keys in the path or query.
#[derive(Debug, Error)]
pub enum FarmError {
    #[error("failed to decode private key")]
    KeyDecode(#[source] LocalSignerError),

    #[error("invalid gas limit: {0}")]
    GasLimit(String),

    #[error("invalid RPC URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("failed to dial RPC endpoint {endpoint}")]
    Dial {
        endpoint: String,
        #[source]
        source: TransportError,
    },

    #[error("failed to bind farm contract at {address}")]
    Bind {
        address: Address,
        #[source]
        source: TransportError,
    },

    #[error("no contract code deployed at {0}")]
    NoContractCode(Address),

    #[error("farm.{method} call failed")]
    Call {
        method: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("failed to write farm output")]
    Output(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Failure of a single `eth_call` against the farm binding.
#[derive(Debug, Error)]
pub enum ViewCallError {
    #[error("eth_call request failed")]
    Transport(#[from] TransportError),

    #[error("failed to decode uint256 return value")]
    Decode(#[from] sol_types::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_error_names_method_and_keeps_source() {
        let err = FarmError::Call {
            method: "lastClaimed",
            source: "execution reverted".into(),
        };

        assert_eq!(err.to_string(), "farm.lastClaimed call failed");
        let source = std::error::Error::source(&err).expect("source must be kept");
        assert_eq!(source.to_string(), "execution reverted");
    }

    #[test]
    fn test_gas_limit_error_message() {
        let err = FarmError::GasLimit("abc".to_string());
        assert_eq!(err.to_string(), "invalid gas limit: abc");
    }
}
