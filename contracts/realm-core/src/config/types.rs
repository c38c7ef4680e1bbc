use near_sdk::json_types::U128;
use near_sdk::near;

use super::{RelatedAddresses, WithRelated};
use crate::constants::{MAX_EXPLORER_SLOTS, RATIO_BASE};
use crate::errors::GameError;
use crate::storage::default_region_state;

fn check_ratio(name: &str, ratio: u32) -> Result<(), GameError> {
    if ratio > RATIO_BASE {
        return Err(GameError::InvalidInput(format!(
            "{} must be at most {} (got {})",
            name, RATIO_BASE, ratio
        )));
    }
    Ok(())
}

// --- Ring ---

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingConstants {
    // Append-only: new fields go at the end.
    pub distance: u64,
    pub origin_town_limit: u64,
    pub town_minting_ratio: u32,
    pub over_town_minting_ratio: u32,
    pub bounty_minting_ratio: u32,
    pub oblivion_minting_ratio: u32,
    pub initialized_at: u64,
    pub related: RelatedAddresses,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct RingInit {
    pub distance: u64,
    pub origin_town_limit: u64,
    pub town_minting_ratio: u32,
    pub over_town_minting_ratio: u32,
    pub bounty_minting_ratio: u32,
    pub oblivion_minting_ratio: u32,
}

impl RingConstants {
    /// Overwrites every configurable value. Returns whether the module had
    /// already been initialised.
    pub fn apply_init(&mut self, init: RingInit, now: u64) -> Result<bool, GameError> {
        if init.distance == 0 {
            return Err(GameError::InvalidInput("distance must be positive".into()));
        }
        check_ratio("town_minting_ratio", init.town_minting_ratio)?;
        check_ratio("over_town_minting_ratio", init.over_town_minting_ratio)?;
        check_ratio("bounty_minting_ratio", init.bounty_minting_ratio)?;
        check_ratio("oblivion_minting_ratio", init.oblivion_minting_ratio)?;

        let reinitialized = self.is_initialized();
        self.distance = init.distance;
        self.origin_town_limit = init.origin_town_limit;
        self.town_minting_ratio = init.town_minting_ratio;
        self.over_town_minting_ratio = init.over_town_minting_ratio;
        self.bounty_minting_ratio = init.bounty_minting_ratio;
        self.oblivion_minting_ratio = init.oblivion_minting_ratio;
        self.initialized_at = now;
        Ok(reinitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized_at != 0
    }
}

// --- Town ---

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TownConstants {
    // Append-only: new fields go at the end.
    pub explorer_fee_ratio: u32,
    pub system_fee_ratio: u32,
    pub explorer_slot: u32,
    pub min_explore_time: u64,
    pub max_explore_time: u64,
    pub max_explore_rewards: U128,
    pub initialized_at: u64,
    pub related: RelatedAddresses,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct TownInit {
    pub explorer_fee_ratio: u32,
    pub system_fee_ratio: u32,
    pub explorer_slot: u32,
    pub min_explore_time: u64,
    pub max_explore_time: u64,
    pub max_explore_rewards: U128,
}

impl TownConstants {
    pub fn apply_init(&mut self, init: TownInit, now: u64) -> Result<bool, GameError> {
        check_ratio("explorer_fee_ratio", init.explorer_fee_ratio)?;
        check_ratio("system_fee_ratio", init.system_fee_ratio)?;
        if init.explorer_fee_ratio + init.system_fee_ratio > RATIO_BASE {
            return Err(GameError::InvalidInput(
                "explorer and system fee ratios exceed 100%".into(),
            ));
        }
        if init.explorer_slot == 0 || init.explorer_slot > MAX_EXPLORER_SLOTS {
            return Err(GameError::InvalidInput(format!(
                "explorer_slot must be between 1 and {}",
                MAX_EXPLORER_SLOTS
            )));
        }
        if init.min_explore_time >= init.max_explore_time {
            return Err(GameError::InvalidInput(
                "min_explore_time must be below max_explore_time".into(),
            ));
        }

        let reinitialized = self.is_initialized();
        self.explorer_fee_ratio = init.explorer_fee_ratio;
        self.system_fee_ratio = init.system_fee_ratio;
        self.explorer_slot = init.explorer_slot;
        self.min_explore_time = init.min_explore_time;
        self.max_explore_time = init.max_explore_time;
        self.max_explore_rewards = init.max_explore_rewards;
        self.initialized_at = now;
        Ok(reinitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized_at != 0
    }

    pub fn explore_limits(&self) -> realm_types::ExploreLimits {
        realm_types::ExploreLimits {
            min_explore_time: self.min_explore_time,
            max_explore_time: self.max_explore_time,
            max_explore_rewards: self.max_explore_rewards.0,
        }
    }
}

// --- Oblivion / Bounty ---

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiscoveryConstants {
    // Append-only: new fields go at the end.
    pub valid_delay: u64,
    pub initialized_at: u64,
    pub related: RelatedAddresses,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct DiscoveryInit {
    pub valid_delay: u64,
}

impl DiscoveryConstants {
    pub fn apply_init(&mut self, init: DiscoveryInit, now: u64) -> bool {
        let reinitialized = self.initialized_at != 0;
        self.valid_delay = init.valid_delay;
        self.initialized_at = now;
        reinitialized
    }
}

// --- Equipment ---

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EquipmentConstants {
    // Append-only: new fields go at the end.
    pub initialized_at: u64,
    pub related: RelatedAddresses,
}

// --- Coin ---

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoinConstants {
    // Append-only: new fields go at the end.
    pub symbol: String,
    pub decimals: u8,
    pub initialized_at: u64,
    pub related: RelatedAddresses,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct CoinInit {
    pub symbol: String,
    pub decimals: u8,
}

impl CoinConstants {
    pub fn apply_init(&mut self, init: CoinInit, now: u64) -> Result<bool, GameError> {
        if init.symbol.is_empty() || init.symbol.len() > 16 {
            return Err(GameError::InvalidInput(
                "symbol must be 1-16 characters".into(),
            ));
        }
        let reinitialized = self.initialized_at != 0;
        self.symbol = init.symbol;
        self.decimals = init.decimals;
        self.initialized_at = now;
        Ok(reinitialized)
    }
}

// --- Player ---

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerConstants {
    // Append-only: new fields go at the end.
    pub base_attack_power: u64,
    pub equipment_attack_power: u64,
    pub initialized_at: u64,
    pub related: RelatedAddresses,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct PlayerInit {
    pub base_attack_power: u64,
    pub equipment_attack_power: u64,
}

impl PlayerConstants {
    pub fn apply_init(&mut self, init: PlayerInit, now: u64) -> Result<bool, GameError> {
        if init.base_attack_power == 0 {
            return Err(GameError::InvalidInput(
                "base_attack_power must be positive".into(),
            ));
        }
        let reinitialized = self.initialized_at != 0;
        self.base_attack_power = init.base_attack_power;
        self.equipment_attack_power = init.equipment_attack_power;
        self.initialized_at = now;
        Ok(reinitialized)
    }
}

macro_rules! with_related {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl WithRelated for $ty {
                fn related(&self) -> &RelatedAddresses {
                    &self.related
                }
                fn related_mut(&mut self) -> &mut RelatedAddresses {
                    &mut self.related
                }
            }
        )+
    };
}

with_related!(
    RingConstants,
    TownConstants,
    DiscoveryConstants,
    EquipmentConstants,
    CoinConstants,
    PlayerConstants,
);

default_region_state!(
    RingConstants,
    TownConstants,
    DiscoveryConstants,
    EquipmentConstants,
    CoinConstants,
    PlayerConstants,
);
