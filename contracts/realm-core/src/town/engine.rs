use near_sdk::json_types::U128;
use near_sdk::{AccountId, env};

use super::types::{ExploreRewardQuote, Town, TownAttribute, TownStorage};
use crate::config::TownConstants;
use crate::constants::{
    DEFAULT_TOWN_LEVEL, MAX_FLAG_PATH_LEN, MAX_TOWN_NICKNAME_LEN, TOWN_NICKNAME_DIGITS,
};
use crate::ring::Location;
use crate::{GameError, ModuleKind};

pub(crate) fn default_nickname(town_id: u64) -> String {
    format!("{:0width$}", town_id, width = TOWN_NICKNAME_DIGITS)
}

/// Town lifecycle and explorer roster over an opened town region.
pub(crate) struct TownEngine<'a> {
    storage: &'a mut TownStorage,
    constants: &'a TownConstants,
}

impl<'a> TownEngine<'a> {
    pub(crate) fn new(
        storage: &'a mut TownStorage,
        constants: &'a TownConstants,
    ) -> Result<Self, GameError> {
        if !constants.is_initialized() {
            return Err(GameError::not_initialized(ModuleKind::Town));
        }
        Ok(Self { storage, constants })
    }

    pub(crate) fn create(
        &mut self,
        owner: &AccountId,
        location: Location,
        now: u64,
    ) -> Result<u64, GameError> {
        let town_id = self.storage.last_town_id + 1;
        self.storage.ledger.mint(town_id, owner)?;

        let slots = self.constants.explorer_slot;
        self.storage.towns.insert(
            town_id,
            Town {
                nickname: default_nickname(town_id),
                flag_path: String::new(),
                location,
                level: DEFAULT_TOWN_LEVEL,
                explorer_fee_ratio: self.constants.explorer_fee_ratio,
                explorer_slot_count: slots,
                created_at: now,
            },
        );
        self.storage
            .attributes
            .insert(town_id, TownAttribute::with_capacity(slots));
        self.storage.last_town_id = town_id;
        Ok(town_id)
    }

    /// Occupies the first free slot. Returns the slot, or `None` when no
    /// free slot exists despite spare capacity (logged, state unchanged).
    pub(crate) fn add_explorer(
        &mut self,
        town_id: u64,
        player: &AccountId,
    ) -> Result<Option<u32>, GameError> {
        let slot_count = self.town(town_id)?.explorer_slot_count;
        let attr = self.attribute_mut(town_id)?;
        if attr.explorer_counter >= slot_count {
            return Err(GameError::InsufficientExplorerSlot(town_id));
        }
        let Some(slot) = attr.explorers.iter().position(Option::is_none) else {
            env::log_str(&format!(
                "Town {}: no free explorer slot with counter {} of {}",
                town_id, attr.explorer_counter, slot_count
            ));
            return Ok(None);
        };
        attr.explorers[slot] = Some(player.clone());
        attr.explorer_counter += 1;
        Ok(Some(slot as u32))
    }

    /// Frees the player's slot. Returns the freed slot; `None` when the town
    /// has no explorers or the player holds no slot.
    pub(crate) fn remove_explorer(
        &mut self,
        town_id: u64,
        player: &AccountId,
    ) -> Result<Option<u32>, GameError> {
        self.town(town_id)?;
        let attr = self.attribute_mut(town_id)?;
        if attr.explorer_counter == 0 {
            return Ok(None);
        }
        let Some(slot) = attr
            .explorers
            .iter()
            .position(|occupant| occupant.as_ref() == Some(player))
        else {
            return Ok(None);
        };
        attr.explorers[slot] = None;
        attr.explorer_counter -= 1;
        Ok(Some(slot as u32))
    }

    pub(crate) fn set_profile(
        &mut self,
        town_id: u64,
        caller: &AccountId,
        nickname: Option<String>,
        flag_path: Option<String>,
    ) -> Result<Town, GameError> {
        self.storage.ledger.check_owner(town_id, caller)?;
        if let Some(nickname) = &nickname {
            if nickname.is_empty() || nickname.len() > MAX_TOWN_NICKNAME_LEN {
                return Err(GameError::InvalidInput(format!(
                    "nickname must be 1-{} bytes",
                    MAX_TOWN_NICKNAME_LEN
                )));
            }
        }
        if flag_path.as_ref().is_some_and(|path| path.len() > MAX_FLAG_PATH_LEN) {
            return Err(GameError::InvalidInput(format!(
                "flag_path exceeds {} bytes",
                MAX_FLAG_PATH_LEN
            )));
        }
        let town = self
            .storage
            .towns
            .get_mut(&town_id)
            .ok_or_else(|| GameError::NotFound(format!("town {}", town_id)))?;
        if let Some(nickname) = nickname {
            town.nickname = nickname;
        }
        if let Some(flag_path) = flag_path {
            town.flag_path = flag_path;
        }
        Ok(town.clone())
    }

    fn town(&self, town_id: u64) -> Result<&Town, GameError> {
        self.storage
            .towns
            .get(&town_id)
            .ok_or_else(|| GameError::NotFound(format!("town {}", town_id)))
    }

    fn attribute_mut(&mut self, town_id: u64) -> Result<&mut TownAttribute, GameError> {
        self.storage
            .attributes
            .get_mut(&town_id)
            .ok_or_else(|| GameError::Fatal(format!("town {} has no attribute record", town_id)))
    }
}

/// Reward for `spend_time` seconds at `attack_power` (×100 per unit).
///
/// Zero at or below the minimum explore time; the fee ratios are returned
/// either way.
pub(crate) fn explore_rewards(
    storage: &TownStorage,
    constants: &TownConstants,
    town_id: u64,
    spend_time: u64,
    attack_power: u64,
) -> Result<ExploreRewardQuote, GameError> {
    if !constants.is_initialized() {
        return Err(GameError::not_initialized(ModuleKind::Town));
    }
    let town = storage
        .towns
        .get(&town_id)
        .ok_or_else(|| GameError::NotFound(format!("town {}", town_id)))?;
    let reward = realm_types::explore_reward(&constants.explore_limits(), spend_time, attack_power);
    Ok(ExploreRewardQuote {
        reward: U128(reward),
        explorer_fee_ratio: town.explorer_fee_ratio,
        system_fee_ratio: constants.system_fee_ratio,
    })
}
