//! Shared types and pure-logic game formulas for the Realm contracts.
//! No NEAR SDK dependency, so it is usable on-chain and off-chain.

mod equipment;
mod error;
mod math;
mod ratio;
mod reward;

pub use equipment::{
    AFFIX_ROLL_RANGE, CATEGORY_COUNT, CATEGORY_ROLL_RANGE, EquipmentAttributes, EquipmentCategory,
    RANDOM_WORDS_PER_EQUIPMENT, RARITY_ROLL_RANGE, Rarity, derive_attributes, rarity_multi,
    roll_affixes, roll_category, roll_rarity,
};
pub use error::RollError;
pub use math::{isqrt, ring_number, virtual_town_limit};
pub use ratio::{RATIO_BASE, apply_ratio, roll_under_ratio};
pub use reward::{
    ExploreLimits, REWARD_PERIOD_SECS, REWARD_SCALE, RewardSplit, explore_reward, split_reward,
};

pub use primitive_types::U256;
