use alloy_primitives::U256;

use crate::error::FarmError;

/// Parses a base 10 gas limit. Only ASCII digits are accepted, so signs,
/// separators and whitespace are errors rather than silently ignored.
pub fn parse_gas_limit(gas_limit: &str) -> Result<U256, FarmError> {
    if gas_limit.is_empty() || !gas_limit.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FarmError::GasLimit(gas_limit.to_string()));
    }

    U256::from_str_radix(gas_limit, 10).map_err(|_| FarmError::GasLimit(gas_limit.to_string()))
}
