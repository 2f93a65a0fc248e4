use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::FarmQuery;

/// Values returned by one full pass over the farm's view calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmSnapshot {
    pub account: Address,
    #[serde(with = "decimal")]
    pub total_supply: U256,
    #[serde(with = "decimal")]
    pub balance: U256,
    #[serde(with = "decimal")]
    pub pending_rewards: U256,
    #[serde(with = "decimal")]
    pub reward_rate: U256,
    #[serde(with = "decimal")]
    pub last_claimed: U256,
    #[serde(with = "decimal")]
    pub rewards_duration: U256,
    #[serde(with = "decimal")]
    pub period_finish: U256,
    #[serde(with = "decimal")]
    pub reward_per_token_stored: U256,
    #[serde(with = "decimal")]
    pub user_reward_per_token_paid: U256,
    #[serde(with = "decimal")]
    pub rewards_per_token: U256,
}

impl FarmSnapshot {
    pub fn new(account: Address) -> Self {
        Self {
            account,
            ..Default::default()
        }
    }

    fn slot_mut(&mut self, query: FarmQuery) -> &mut U256 {
        match query {
            FarmQuery::TotalSupply => &mut self.total_supply,
            FarmQuery::BalanceOf => &mut self.balance,
            FarmQuery::PendingRewards => &mut self.pending_rewards,
            FarmQuery::RewardRate => &mut self.reward_rate,
            FarmQuery::LastClaimed => &mut self.last_claimed,
            FarmQuery::RewardsDuration => &mut self.rewards_duration,
            FarmQuery::PeriodFinish => &mut self.period_finish,
            FarmQuery::RewardPerTokenStored => &mut self.reward_per_token_stored,
            FarmQuery::UserRewardPerTokenPaid => &mut self.user_reward_per_token_paid,
            FarmQuery::RewardsPerToken => &mut self.rewards_per_token,
        }
    }

    pub fn set(&mut self, query: FarmQuery, value: U256) {
        *self.slot_mut(query) = value;
    }

    pub fn get(&self, query: FarmQuery) -> U256 {
        match query {
            FarmQuery::TotalSupply => self.total_supply,
            FarmQuery::BalanceOf => self.balance,
            FarmQuery::PendingRewards => self.pending_rewards,
            FarmQuery::RewardRate => self.reward_rate,
            FarmQuery::LastClaimed => self.last_claimed,
            FarmQuery::RewardsDuration => self.rewards_duration,
            FarmQuery::PeriodFinish => self.period_finish,
            FarmQuery::RewardPerTokenStored => self.reward_per_token_stored,
            FarmQuery::UserRewardPerTokenPaid => self.user_reward_per_token_paid,
            FarmQuery::RewardsPerToken => self.rewards_per_token,
        }
    }

    /// Renders every field in call order, one line each.
    pub fn lines(&self) -> Vec<String> {
        FarmQuery::ALL
            .iter()
            .map(|query| query.describe(&self.account, &self.get(*query)))
            .collect()
    }
}

// U256 values are written as base 10 strings, the same digits the text output shows
mod decimal {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let digits = String::deserialize(deserializer)?;
        U256::from_str_radix(&digits, 10).map_err(D::Error::custom)
    }
}
