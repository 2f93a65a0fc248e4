pub mod snapshot;

use alloy_primitives::{Address, U256};

/// The ten view calls issued against the farm, in the order they are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FarmQuery {
    TotalSupply,
    BalanceOf,
    PendingRewards,
    RewardRate,
    LastClaimed,
    RewardsDuration,
    PeriodFinish,
    RewardPerTokenStored,
    UserRewardPerTokenPaid,
    RewardsPerToken,
}

impl FarmQuery {
    pub const ALL: [FarmQuery; 10] = [
        FarmQuery::TotalSupply,
        FarmQuery::BalanceOf,
        FarmQuery::PendingRewards,
        FarmQuery::RewardRate,
        FarmQuery::LastClaimed,
        FarmQuery::RewardsDuration,
        FarmQuery::PeriodFinish,
        FarmQuery::RewardPerTokenStored,
        FarmQuery::UserRewardPerTokenPaid,
        FarmQuery::RewardsPerToken,
    ];

    /// Solidity method name as it appears in the farm ABI.
    pub fn method(&self) -> &'static str {
        match self {
            FarmQuery::TotalSupply => "totalSupply",
            FarmQuery::BalanceOf => "balanceOf",
            FarmQuery::PendingRewards => "pendingRewards",
            FarmQuery::RewardRate => "rewardRate",
            FarmQuery::LastClaimed => "lastClaimed",
            FarmQuery::RewardsDuration => "rewardsDuration",
            FarmQuery::PeriodFinish => "periodFinish",
            FarmQuery::RewardPerTokenStored => "rewardPerTokenStored",
            FarmQuery::UserRewardPerTokenPaid => "userRewardPerTokenPaid",
            FarmQuery::RewardsPerToken => "rewardsPerToken",
        }
    }

    pub fn takes_account(&self) -> bool {
        matches!(
            self,
            FarmQuery::BalanceOf
                | FarmQuery::PendingRewards
                | FarmQuery::RewardRate
                | FarmQuery::LastClaimed
                | FarmQuery::UserRewardPerTokenPaid
        )
    }

    // One human readable output line, without the trailing newline
    pub fn describe(&self, account: &Address, value: &U256) -> String {
        match self {
            FarmQuery::TotalSupply => format!("Total supply of DPX tokens: {value}"),
            FarmQuery::BalanceOf => {
                format!("Balance of DPX tokens for account {account}: {value}")
            }
            FarmQuery::PendingRewards => {
                format!("Pending rewards for account {account}: {value}")
            }
            FarmQuery::RewardRate => format!("Reward rate for account {account}: {value}"),
            FarmQuery::LastClaimed => {
                format!("Last time account {account} claimed rewards: {value}")
            }
            FarmQuery::RewardsDuration => format!("Duration of the rewards period: {value}"),
            FarmQuery::PeriodFinish => format!("Period finish time: {value}"),
            FarmQuery::RewardPerTokenStored => format!("Reward per token stored: {value}"),
            FarmQuery::UserRewardPerTokenPaid => {
                format!("User reward per token paid: {value}")
            }
            FarmQuery::RewardsPerToken => format!("Rewards per token: {value}"),
        }
    }
}
