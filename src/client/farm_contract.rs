use alloy::{
    network::{Network, TransactionBuilder},
    providers::Provider,
    sol,
    sol_types::{SolCall, SolValue},
};
use alloy_primitives::{Address, Bytes, U256};

use crate::{error::ViewCallError, types::FarmQuery};

sol! {
    /// View surface of the Dopex farm staking contract.
    #[sol(rpc)]
    interface IFarm {
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function pendingRewards(address account) external view returns (uint256);
        function rewardRate(address account) external view returns (uint256);
        function lastClaimed(address account) external view returns (uint256);
        function rewardsDuration() external view returns (uint256);
        function periodFinish() external view returns (uint256);
        function rewardPerTokenStored() external view returns (uint256);
        function userRewardPerTokenPaid(address account) external view returns (uint256);
        function rewardsPerToken() external view returns (uint256);
    }
}

/// Anything that can answer the farm's view calls.
///
/// The contract binding below is the production implementation; tests drive
/// the reader through scripted implementations instead of a live node.
pub trait FarmView {
    type Error: std::error::Error + Send + Sync + 'static;

    fn view(
        &self,
        query: FarmQuery,
        account: Address,
    ) -> impl Future<Output = Result<U256, Self::Error>>;
}

impl FarmQuery {
    /// ABI encoded `eth_call` input for this query.
    pub fn calldata(&self, account: Address) -> Bytes {
        let encoded = match self {
            FarmQuery::TotalSupply => IFarm::totalSupplyCall {}.abi_encode(),
            FarmQuery::BalanceOf => IFarm::balanceOfCall { account }.abi_encode(),
            FarmQuery::PendingRewards => IFarm::pendingRewardsCall { account }.abi_encode(),
            FarmQuery::RewardRate => IFarm::rewardRateCall { account }.abi_encode(),
            FarmQuery::LastClaimed => IFarm::lastClaimedCall { account }.abi_encode(),
            FarmQuery::RewardsDuration => IFarm::rewardsDurationCall {}.abi_encode(),
            FarmQuery::PeriodFinish => IFarm::periodFinishCall {}.abi_encode(),
            FarmQuery::RewardPerTokenStored => IFarm::rewardPerTokenStoredCall {}.abi_encode(),
            FarmQuery::UserRewardPerTokenPaid => {
                IFarm::userRewardPerTokenPaidCall { account }.abi_encode()
            }
            FarmQuery::RewardsPerToken => IFarm::rewardsPerTokenCall {}.abi_encode(),
        };

        encoded.into()
    }
}

// Every farm view returns a single uint256
impl<P, N> FarmView for IFarm::IFarmInstance<P, N>
where
    P: Provider<N>,
    N: Network,
{
    type Error = ViewCallError;

    async fn view(&self, query: FarmQuery, account: Address) -> Result<U256, Self::Error> {
        let request = N::TransactionRequest::default()
            .with_to(*self.address())
            .with_input(query.calldata(account));

        let output = self.provider().call(request).await?;

        Ok(U256::abi_decode(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erc20_compatible_selectors() {
        // Same selectors as ERC20 totalSupply() / balanceOf(address)
        assert_eq!(IFarm::totalSupplyCall::SELECTOR, [0x18, 0x16, 0x0d, 0xdd]);
        assert_eq!(IFarm::balanceOfCall::SELECTOR, [0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn test_each_query_targets_its_own_method() {
        let expected = [
            (FarmQuery::TotalSupply, IFarm::totalSupplyCall::SELECTOR),
            (FarmQuery::BalanceOf, IFarm::balanceOfCall::SELECTOR),
            (FarmQuery::PendingRewards, IFarm::pendingRewardsCall::SELECTOR),
            (FarmQuery::RewardRate, IFarm::rewardRateCall::SELECTOR),
            (FarmQuery::LastClaimed, IFarm::lastClaimedCall::SELECTOR),
            (FarmQuery::RewardsDuration, IFarm::rewardsDurationCall::SELECTOR),
            (FarmQuery::PeriodFinish, IFarm::periodFinishCall::SELECTOR),
            (
                FarmQuery::RewardPerTokenStored,
                IFarm::rewardPerTokenStoredCall::SELECTOR,
            ),
            (
                FarmQuery::UserRewardPerTokenPaid,
                IFarm::userRewardPerTokenPaidCall::SELECTOR,
            ),
            (FarmQuery::RewardsPerToken, IFarm::rewardsPerTokenCall::SELECTOR),
        ];
        let account = Address::repeat_byte(0x42);

        for (query, selector) in expected {
            let calldata = query.calldata(account);
            assert_eq!(&calldata[..4], selector.as_slice(), "{query:?}");

            if query.takes_account() {
                assert_eq!(calldata.len(), 4 + 32, "{query:?}");
                assert_eq!(&calldata[4 + 12..], account.as_slice(), "{query:?}");
            } else {
                assert_eq!(calldata.len(), 4, "{query:?}");
            }
        }
    }

    #[test]
    fn test_signatures_match_query_methods() {
        let signatures = [
            IFarm::totalSupplyCall::SIGNATURE,
            IFarm::balanceOfCall::SIGNATURE,
            IFarm::pendingRewardsCall::SIGNATURE,
            IFarm::rewardRateCall::SIGNATURE,
            IFarm::lastClaimedCall::SIGNATURE,
            IFarm::rewardsDurationCall::SIGNATURE,
            IFarm::periodFinishCall::SIGNATURE,
            IFarm::rewardPerTokenStoredCall::SIGNATURE,
            IFarm::userRewardPerTokenPaidCall::SIGNATURE,
            IFarm::rewardsPerTokenCall::SIGNATURE,
        ];

        for (query, signature) in FarmQuery::ALL.iter().zip(signatures) {
            assert!(signature.starts_with(&format!("{}(", query.method())));
            let expected_arg = if query.takes_account() { "(address)" } else { "()" };
            assert!(signature.ends_with(expected_arg), "{signature}");
        }
    }
}
