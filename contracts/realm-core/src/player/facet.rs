use near_sdk::json_types::U128;
use serde_json::{Value, json};

use super::{Expedition, PlayerStorage, facet_account};
use crate::config::{PlayerConstants, RingConstants};
use crate::discovery::DiscoverableKind;
use crate::equipment::EquipmentStorage;
use crate::guards::now_secs;
use crate::randomness::{RandomPurpose, request_random_words};
use crate::ring::{Location, ring_number};
use crate::storage::{
    EQUIPMENT_STORAGE, PLAYER_CONSTANTS, PLAYER_STORAGE, RING_CONSTANTS, Region, TOWN_STORAGE,
};
use crate::town::TownStorage;
use crate::*;

impl Contract {
    /// Claims an unexplored location: mints its ring if needed and asks the
    /// oracle for the words that decide what is discovered there.
    pub(crate) fn player_explore(
        &mut self,
        player: &AccountId,
        location: Location,
    ) -> Result<Value, GameError> {
        {
            let mut storage = Region::<PlayerStorage>::open(PLAYER_STORAGE);
            if !storage.explored.insert(location) {
                return Err(GameError::AlreadyMinted(format!(
                    "location ({}, {}) already explored",
                    location.x, location.y
                )));
            }
        }
        let ring_id = {
            let constants = Region::<RingConstants>::open(RING_CONSTANTS);
            ring_number(&constants, location.distance_x(), location.distance_y())?
        };

        let ring = self.ring_safe_mint_as(&facet_account(), ring_id, player)?;
        let request_id = request_random_words(
            player,
            RandomPurpose::Discovery { location, ring_id },
            DISCOVERY_RANDOM_WORDS,
        )?;
        events::emit_player_explored(player, &location, ring_id, ring.minted, request_id);
        Ok(json!({
            "ring_id": ring_id,
            "ring_minted": ring.minted,
            "request_id": request_id,
        }))
    }

    pub(crate) fn player_forge_equipment(
        &mut self,
        player: &AccountId,
    ) -> Result<Value, GameError> {
        let request_id = request_random_words(player, RandomPurpose::Forge, FORGE_RANDOM_WORDS)?;
        Ok(json!({ "request_id": request_id }))
    }

    pub(crate) fn player_join_town(
        &mut self,
        player: &AccountId,
        town_id: u64,
    ) -> Result<Value, GameError> {
        if Region::<PlayerStorage>::open(PLAYER_STORAGE)
            .expeditions
            .contains_key(player)
        {
            return Err(GameError::InvalidState(format!(
                "{} is already on an expedition",
                player
            )));
        }
        let slot = self
            .town_add_explorer_as(&facet_account(), town_id, player)?
            .ok_or_else(|| {
                GameError::Fatal(format!("town {} has capacity but no free slot", town_id))
            })?;

        let expedition = Expedition {
            town_id,
            started_at: now_secs(),
        };
        Region::<PlayerStorage>::open(PLAYER_STORAGE)
            .expeditions
            .insert(player.clone(), expedition);
        events::emit_expedition_started(player, &expedition, slot);
        Ok(json!({ "town_id": town_id, "slot": slot }))
    }

    /// Ends the expedition and pays the reward: the town owner takes the
    /// explorer fee, the contract owner the system fee, the player the rest.
    pub(crate) fn player_leave_town(&mut self, player: &AccountId) -> Result<Value, GameError> {
        let expedition = Region::<PlayerStorage>::open(PLAYER_STORAGE)
            .expeditions
            .remove(player)
            .ok_or_else(|| {
                GameError::InvalidState(format!("{} is not on an expedition", player))
            })?;
        let peer = facet_account();
        self.town_remove_explorer_as(&peer, expedition.town_id, player)?;

        let spend_time = now_secs().saturating_sub(expedition.started_at);
        let attack_power = self.player_attack_power(player)?;
        let quote = self.town_explore_rewards_quote(expedition.town_id, spend_time, attack_power)?;
        let split = realm_types::split_reward(
            quote.reward.0,
            quote.explorer_fee_ratio,
            quote.system_fee_ratio,
        );

        let town_owner = Region::<TownStorage>::open(TOWN_STORAGE)
            .ledger
            .owner_of(expedition.town_id)
            .cloned()
            .ok_or_else(|| {
                GameError::Fatal(format!("town {} has no owner", expedition.town_id))
            })?;
        let system_account = self.owner_id.clone();
        self.coin_mint_as(&peer, player, split.player)?;
        self.coin_mint_as(&peer, &town_owner, split.explorer_fee)?;
        self.coin_mint_as(&peer, &system_account, split.system_fee)?;

        events::emit_expedition_ended(player, &expedition, spend_time, attack_power, &split);
        Ok(json!({
            "town_id": expedition.town_id,
            "spend_time": spend_time,
            "attack_power": attack_power,
            "reward": U128(quote.reward.0),
            "player_reward": U128(split.player),
            "explorer_fee": U128(split.explorer_fee),
            "system_fee": U128(split.system_fee),
        }))
    }

    pub(crate) fn player_challenge(
        &mut self,
        player: &AccountId,
        kind: DiscoverableKind,
        id: u64,
    ) -> Result<Value, GameError> {
        let entity = self
            .discovery_entity(kind, id)
            .ok_or(GameError::NotDiscovered(id))?;
        let now = now_secs();
        if now < entity.valid_at {
            return Err(GameError::InvalidState(format!(
                "{} {} cannot be challenged before {}",
                kind.as_str(),
                id,
                entity.valid_at
            )));
        }
        let entity = self.discovery_beat_as(&facet_account(), kind, id, player)?;
        Ok(json!({
            "kind": kind,
            "id": id,
            "beaten_at": entity.beaten_at,
        }))
    }

    pub(crate) fn player_equip(
        &mut self,
        player: &AccountId,
        token_id: u64,
    ) -> Result<Value, GameError> {
        let metadata = self.equipment_equip_as(player, token_id)?;
        Ok(json!({ "token_id": token_id, "equipped_at": metadata.equipped_at }))
    }

    pub(crate) fn player_unequip(
        &mut self,
        player: &AccountId,
        token_id: u64,
    ) -> Result<Value, GameError> {
        self.equipment_unequip_as(player, token_id)?;
        Ok(json!({ "token_id": token_id, "equipped_at": 0 }))
    }

    /// `base + Σ equipment_attack_power * rarity_multi / 10000` over equipped items.
    pub(crate) fn player_attack_power(&self, player: &AccountId) -> Result<u64, GameError> {
        let constants = Region::<PlayerConstants>::open(PLAYER_CONSTANTS);
        if constants.initialized_at == 0 {
            return Err(GameError::not_initialized(ModuleKind::Player));
        }
        let storage = Region::<EquipmentStorage>::open(EQUIPMENT_STORAGE);
        let mut attack_power = constants.base_attack_power;
        for token_id in storage.equipped_of(player).into_iter().take(MAX_EQUIPMENT_SCAN) {
            let Some(metadata) = storage.metadata.get(&token_id) else {
                continue;
            };
            let bonus = realm_types::apply_ratio(
                constants.equipment_attack_power as u128,
                realm_types::rarity_multi(metadata.rarity()?),
            );
            attack_power = attack_power.saturating_add(u64::try_from(bonus).unwrap_or(u64::MAX));
        }
        Ok(attack_power)
    }
}
