use super::{ExploreRewardQuote, Town, TownEngine, TownStorage, TownView, explore_rewards};
use crate::config::{TownConstants, WithRelated};
use crate::guards::now_secs;
use crate::ring::Location;
use crate::storage::{Region, TOWN_CONSTANTS, TOWN_STORAGE};
use crate::*;

impl Contract {
    pub(crate) fn town_create_as(
        &mut self,
        caller: &AccountId,
        owner: &AccountId,
        location: Location,
    ) -> Result<u64, GameError> {
        let constants = Region::<TownConstants>::open(TOWN_CONSTANTS);
        self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        let mut storage = Region::<TownStorage>::open(TOWN_STORAGE);
        let town_id =
            TownEngine::new(&mut storage, &constants)?.create(owner, location, now_secs())?;
        events::emit_town_created(caller, town_id, owner, &location);
        Ok(town_id)
    }

    pub(crate) fn town_add_explorer_as(
        &mut self,
        caller: &AccountId,
        town_id: u64,
        player: &AccountId,
    ) -> Result<Option<u32>, GameError> {
        let constants = Region::<TownConstants>::open(TOWN_CONSTANTS);
        self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        let mut storage = Region::<TownStorage>::open(TOWN_STORAGE);
        let slot = TownEngine::new(&mut storage, &constants)?.add_explorer(town_id, player)?;
        if let Some(slot) = slot {
            events::emit_explorer_added(caller, town_id, player, slot);
        }
        Ok(slot)
    }

    pub(crate) fn town_remove_explorer_as(
        &mut self,
        caller: &AccountId,
        town_id: u64,
        player: &AccountId,
    ) -> Result<Option<u32>, GameError> {
        let constants = Region::<TownConstants>::open(TOWN_CONSTANTS);
        self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        let mut storage = Region::<TownStorage>::open(TOWN_STORAGE);
        let slot = TownEngine::new(&mut storage, &constants)?.remove_explorer(town_id, player)?;
        if let Some(slot) = slot {
            events::emit_explorer_removed(caller, town_id, player, slot);
        }
        Ok(slot)
    }

    pub(crate) fn town_explore_rewards_quote(
        &self,
        town_id: u64,
        spend_time: u64,
        attack_power: u64,
    ) -> Result<ExploreRewardQuote, GameError> {
        let constants = Region::<TownConstants>::open(TOWN_CONSTANTS);
        let storage = Region::<TownStorage>::open(TOWN_STORAGE);
        explore_rewards(&storage, &constants, town_id, spend_time, attack_power)
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn town_create(&mut self, owner: AccountId, location: Location) -> Result<u64, GameError> {
        self.town_create_as(&env::predecessor_account_id(), &owner, location)
    }

    #[handle_result]
    pub fn town_add_explorer(
        &mut self,
        town_id: u64,
        player: AccountId,
    ) -> Result<Option<u32>, GameError> {
        self.town_add_explorer_as(&env::predecessor_account_id(), town_id, &player)
    }

    #[handle_result]
    pub fn town_remove_explorer(
        &mut self,
        town_id: u64,
        player: AccountId,
    ) -> Result<Option<u32>, GameError> {
        self.town_remove_explorer_as(&env::predecessor_account_id(), town_id, &player)
    }

    /// Only the town token owner may rename a town or change its flag.
    #[handle_result]
    pub fn town_set_profile(
        &mut self,
        town_id: u64,
        nickname: Option<String>,
        flag_path: Option<String>,
    ) -> Result<Town, GameError> {
        let caller = env::predecessor_account_id();
        let constants = Region::<TownConstants>::open(TOWN_CONSTANTS);
        let mut storage = Region::<TownStorage>::open(TOWN_STORAGE);
        let town = TownEngine::new(&mut storage, &constants)?
            .set_profile(town_id, &caller, nickname, flag_path)?;
        events::emit_town_profile_updated(&caller, town_id, &town);
        Ok(town)
    }

    #[handle_result]
    pub fn town_explore_rewards(
        &self,
        town_id: u64,
        spend_time: u64,
        attack_power: u64,
    ) -> Result<ExploreRewardQuote, GameError> {
        self.town_explore_rewards_quote(town_id, spend_time, attack_power)
    }

    pub fn town_get(&self, town_id: u64) -> Option<TownView> {
        Region::<TownStorage>::open(TOWN_STORAGE).view(town_id)
    }

    pub fn town_explorers(&self, town_id: u64) -> Vec<Option<AccountId>> {
        Region::<TownStorage>::open(TOWN_STORAGE)
            .attributes
            .get(&town_id)
            .map(|attr| attr.explorers.clone())
            .unwrap_or_default()
    }

    pub fn town_total_supply(&self) -> u64 {
        Region::<TownStorage>::open(TOWN_STORAGE).last_town_id
    }
}
