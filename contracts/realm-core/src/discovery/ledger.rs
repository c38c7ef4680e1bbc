use near_sdk::AccountId;

use super::{DiscoverableEntity, DiscoverableKind, DiscoveryMintResult, DiscoveryStorage};
use crate::GameError;
use crate::config::DiscoveryConstants;
use crate::events;
use crate::ring::Location;

/// Entity lifecycle for one discoverable kind.
pub(crate) struct DiscoveryLedger<'a> {
    kind: DiscoverableKind,
    storage: &'a mut DiscoveryStorage,
    constants: &'a DiscoveryConstants,
}

impl<'a> DiscoveryLedger<'a> {
    pub(crate) fn new(
        kind: DiscoverableKind,
        storage: &'a mut DiscoveryStorage,
        constants: &'a DiscoveryConstants,
    ) -> Result<Self, GameError> {
        if constants.initialized_at == 0 {
            return Err(GameError::not_initialized(kind.module()));
        }
        Ok(Self {
            kind,
            storage,
            constants,
        })
    }

    pub(crate) fn mint(
        &mut self,
        player: &AccountId,
        coords: Location,
        now: u64,
    ) -> Result<DiscoverableEntity, GameError> {
        if self.storage.by_coords.contains_key(&coords) {
            return Err(GameError::AlreadyMinted(format!(
                "{} at ({}, {})",
                self.kind.as_str(),
                coords.x,
                coords.y
            )));
        }
        let id = self.storage.last_id + 1;
        let entity = DiscoverableEntity {
            owner_or_discoverer: player.clone(),
            coords,
            kind: self.kind,
            id,
            discoverer_reward_ratio: self.kind.discoverer_reward_ratio(),
            valid_at: now.saturating_add(self.constants.valid_delay),
            created_at: now,
            beaten_at: 0,
            beaten_by: None,
        };

        self.storage.ledger.mint(id, player)?;
        self.storage.entities.insert(id, entity.clone());
        self.storage.by_coords.insert(coords, id);
        self.storage.unbeaten.insert(id);
        self.storage.last_id = id;
        Ok(entity)
    }

    /// Idempotent by coordinates.
    pub(crate) fn safe_mint(
        &mut self,
        player: &AccountId,
        coords: Location,
        now: u64,
    ) -> Result<DiscoveryMintResult, GameError> {
        if let Some(entity) = self.storage.at(&coords) {
            return Ok(DiscoveryMintResult {
                entity: entity.clone(),
                minted: false,
            });
        }
        let entity = self.mint(player, coords, now)?;
        Ok(DiscoveryMintResult {
            entity,
            minted: true,
        })
    }

    pub(crate) fn beat(
        &mut self,
        id: u64,
        beater: &AccountId,
        now: u64,
    ) -> Result<DiscoverableEntity, GameError> {
        let entity = self
            .storage
            .entities
            .get(&id)
            .filter(|entity| entity.created_at != 0)
            .ok_or(GameError::NotDiscovered(id))?;
        if entity.is_beaten() {
            return Err(GameError::AlreadyBeaten(id));
        }
        if !self.storage.unbeaten.contains(id) {
            return Err(GameError::Fatal(format!(
                "unbeaten {} {} missing from the unbeaten set",
                self.kind.as_str(),
                id
            )));
        }

        self.storage.unbeaten.remove(id)?;
        let entity = self
            .storage
            .entities
            .get_mut(&id)
            .ok_or(GameError::NotDiscovered(id))?;
        entity.beaten_at = now;
        entity.beaten_by = Some(beater.clone());
        Ok(entity.clone())
    }
}

/// Runs after an entity is beaten. Records the outcome; rewards are not
/// paid out here.
pub(crate) fn on_beaten(author: &AccountId, entity: &DiscoverableEntity) {
    events::emit_entity_beaten(author, entity);
}
