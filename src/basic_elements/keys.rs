use std::str::FromStr;

use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::Address;

use crate::error::FarmError;

pub fn decode_private_key(private_key: &str) -> Result<PrivateKeySigner, FarmError> {
    PrivateKeySigner::from_str(private_key).map_err(FarmError::KeyDecode)
}

/// Derives the caller address. The signer is dropped before returning, the
/// key is only needed to know whose balances to read.
pub fn address_from_private_key(private_key: &str) -> Result<Address, FarmError> {
    let signer = decode_private_key(private_key)?;

    Ok(signer.address())
}
