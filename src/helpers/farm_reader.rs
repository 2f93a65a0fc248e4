use std::io::Write;

use alloy_primitives::Address;
use tracing::debug;

use crate::{
    client::farm_contract::FarmView,
    error::FarmError,
    types::{FarmQuery, snapshot::FarmSnapshot},
};

/// Issues every farm view call in order, writing one line per result as soon
/// as it arrives. The first failing call stops the pass.
pub async fn read_farm<V, W>(farm: &V, account: Address, out: &mut W) -> Result<FarmSnapshot, FarmError>
where
    V: FarmView,
    W: Write,
{
    let mut snapshot = FarmSnapshot::new(account);

    for query in FarmQuery::ALL {
        let value = farm
            .view(query, account)
            .await
            .map_err(|err| FarmError::Call {
                method: query.method(),
                source: Box::new(err),
            })?;

        debug!(method = query.method(), %value, "farm view call returned");

        writeln!(out, "{}", query.describe(&account, &value))?;
        snapshot.set(query, value);
    }

    Ok(snapshot)
}
