//! Town exploration reward formula.
//!
//! Attack power is fixed-point ×100 (100 = 1.00). Rewards are base-unit token
//! amounts (×10^18). The scale and period constants are calibrated so that one
//! week at attack power 1.00 yields roughly 1000 tokens and must not change.

use primitive_types::U256;

use crate::ratio::apply_ratio;

pub const REWARD_SCALE: u128 = 10_000_000_000_000_000; // 1e16
pub const REWARD_PERIOD_SECS: u128 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExploreLimits {
    pub min_explore_time: u64,
    pub max_explore_time: u64,
    pub max_explore_rewards: u128,
}

/// Reward for staying `spend_time` seconds with `attack_power`.
///
/// At or below `min_explore_time` the reward is zero; there is no partial
/// credit. Above it, time is clamped to `max_explore_time` and the result to
/// `max_explore_rewards`.
pub fn explore_reward(limits: &ExploreLimits, spend_time: u64, attack_power: u64) -> u128 {
    if spend_time <= limits.min_explore_time {
        return 0;
    }
    let spend_time = spend_time.min(limits.max_explore_time);
    let reward = U256::from(spend_time) * U256::from(attack_power) * U256::from(REWARD_SCALE)
        / U256::from(REWARD_PERIOD_SECS);
    let cap = U256::from(limits.max_explore_rewards);
    if reward > cap {
        limits.max_explore_rewards
    } else {
        reward.low_u128()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewardSplit {
    pub player: u128,
    pub explorer_fee: u128,
    pub system_fee: u128,
}

/// Splits a reward into the town owner's fee, the system fee and the player's
/// remainder. Fees never exceed the reward: the system fee is cut first when
/// the two ratios add up to more than 100%.
pub fn split_reward(reward: u128, explorer_fee_ratio: u32, system_fee_ratio: u32) -> RewardSplit {
    let explorer_fee = apply_ratio(reward, explorer_fee_ratio).min(reward);
    let system_fee = apply_ratio(reward, system_fee_ratio).min(reward - explorer_fee);
    RewardSplit {
        player: reward - explorer_fee - system_fee,
        explorer_fee,
        system_fee,
    }
}
