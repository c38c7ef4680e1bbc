use super::{
    DiscoverableEntity, DiscoverableKind, DiscoveryLedger, DiscoveryMintResult, DiscoveryStorage,
    on_beaten,
};
use crate::config::{DiscoveryConstants, WithRelated};
use crate::guards::now_secs;
use crate::ring::Location;
use crate::storage::Region;
use crate::*;

fn open_storage(kind: DiscoverableKind) -> Region<DiscoveryStorage> {
    Region::open(kind.storage_namespace())
}

fn open_constants(kind: DiscoverableKind) -> Region<DiscoveryConstants> {
    Region::open(kind.constants_namespace())
}

impl Contract {
    pub(crate) fn discovery_mint_as(
        &mut self,
        caller: &AccountId,
        kind: DiscoverableKind,
        player: &AccountId,
        coords: Location,
    ) -> Result<DiscoverableEntity, GameError> {
        let constants = open_constants(kind);
        self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        let mut storage = open_storage(kind);
        let entity =
            DiscoveryLedger::new(kind, &mut storage, &constants)?.mint(player, coords, now_secs())?;
        events::emit_entity_discovered(caller, &entity);
        Ok(entity)
    }

    pub(crate) fn discovery_safe_mint_as(
        &mut self,
        caller: &AccountId,
        kind: DiscoverableKind,
        player: &AccountId,
        coords: Location,
    ) -> Result<DiscoveryMintResult, GameError> {
        let constants = open_constants(kind);
        self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        let mut storage = open_storage(kind);
        let result = DiscoveryLedger::new(kind, &mut storage, &constants)?.safe_mint(
            player,
            coords,
            now_secs(),
        )?;
        if result.minted {
            events::emit_entity_discovered(caller, &result.entity);
        }
        Ok(result)
    }

    pub(crate) fn discovery_beat_as(
        &mut self,
        caller: &AccountId,
        kind: DiscoverableKind,
        id: u64,
        beater: &AccountId,
    ) -> Result<DiscoverableEntity, GameError> {
        let constants = open_constants(kind);
        self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        let mut storage = open_storage(kind);
        let entity =
            DiscoveryLedger::new(kind, &mut storage, &constants)?.beat(id, beater, now_secs())?;
        on_beaten(caller, &entity);
        Ok(entity)
    }

    pub(crate) fn discovery_entity(
        &self,
        kind: DiscoverableKind,
        id: u64,
    ) -> Option<DiscoverableEntity> {
        open_storage(kind).entities.get(&id).cloned()
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn discovery_mint(
        &mut self,
        kind: DiscoverableKind,
        player: AccountId,
        coords: Location,
    ) -> Result<DiscoverableEntity, GameError> {
        self.discovery_mint_as(&env::predecessor_account_id(), kind, &player, coords)
    }

    #[handle_result]
    pub fn discovery_safe_mint(
        &mut self,
        kind: DiscoverableKind,
        player: AccountId,
        coords: Location,
    ) -> Result<DiscoveryMintResult, GameError> {
        self.discovery_safe_mint_as(&env::predecessor_account_id(), kind, &player, coords)
    }

    #[handle_result]
    pub fn discovery_beat(
        &mut self,
        kind: DiscoverableKind,
        id: u64,
        beater: AccountId,
    ) -> Result<DiscoverableEntity, GameError> {
        self.discovery_beat_as(&env::predecessor_account_id(), kind, id, &beater)
    }

    pub fn discovery_get(&self, kind: DiscoverableKind, id: u64) -> Option<DiscoverableEntity> {
        self.discovery_entity(kind, id)
    }

    pub fn discovery_at(
        &self,
        kind: DiscoverableKind,
        coords: Location,
    ) -> Option<DiscoverableEntity> {
        open_storage(kind).at(&coords).cloned()
    }

    pub fn discovery_unbeaten(
        &self,
        kind: DiscoverableKind,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Vec<u64> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT as u32).min(MAX_PAGE_LIMIT as u32);
        open_storage(kind)
            .unbeaten
            .page(from_index.unwrap_or(0), limit)
    }

    pub fn discovery_unbeaten_count(&self, kind: DiscoverableKind) -> u32 {
        open_storage(kind).unbeaten.len()
    }

    pub fn discovery_index_of(&self, kind: DiscoverableKind, id: u64) -> Option<u32> {
        open_storage(kind).unbeaten.index_of(id)
    }

    pub fn discovery_total_supply(&self, kind: DiscoverableKind) -> u64 {
        open_storage(kind).last_id
    }
}
