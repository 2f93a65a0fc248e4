use alloy_primitives::{Address, address};

/// Dopex farm staking contract queried by the reader.
pub const FARM_CONTRACT_ADDRESS: Address = address!("0x8837d722301644044b15575530178f8959332648");

pub enum PublicRpcUrl {
    Mainnet,
}

impl PublicRpcUrl {
    pub fn url(&self) -> &'static str {
        match self {
            PublicRpcUrl::Mainnet => "https://eth.llamarpc.com",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farm_address_matches_checksum_form() {
        assert_eq!(
            FARM_CONTRACT_ADDRESS.to_string().to_lowercase(),
            "0x8837d722301644044b15575530178f8959332648"
        );
    }

    #[test]
    fn test_public_url_is_https() {
        assert!(PublicRpcUrl::Mainnet.url().starts_with("https://"));
    }
}
