use near_sdk::AccountId;
use realm_types::U256;

use super::{EquipmentMetadata, EquipmentStorage};
use crate::GameError;
use crate::constants::MAX_EQUIPMENT_SCAN;

/// Equipment minting and equip state over an opened equipment region.
pub(crate) struct EquipmentRegistry<'a> {
    storage: &'a mut EquipmentStorage,
}

impl<'a> EquipmentRegistry<'a> {
    pub(crate) fn new(storage: &'a mut EquipmentStorage) -> Self {
        Self { storage }
    }

    pub(crate) fn mint(
        &mut self,
        player: &AccountId,
        random_words: &[U256],
    ) -> Result<(u64, EquipmentMetadata), GameError> {
        let attributes = realm_types::derive_attributes(random_words)?;
        let token_id = self.storage.last_token_id + 1;
        let metadata = EquipmentMetadata::new(attributes, player.clone());

        self.storage.ledger.mint(token_id, player)?;
        self.storage.metadata.insert(token_id, metadata.clone());
        self.storage.last_token_id = token_id;
        Ok((token_id, metadata))
    }

    pub(crate) fn equip(
        &mut self,
        token_id: u64,
        caller: &AccountId,
        now: u64,
    ) -> Result<EquipmentMetadata, GameError> {
        self.check_held(token_id, caller)?;
        let mut equipped = self.storage.equipped_of(caller);
        let metadata = self.metadata_mut(token_id)?;
        if metadata.is_equipped() {
            return Err(GameError::AlreadyEquipped(token_id));
        }
        if equipped.len() >= MAX_EQUIPMENT_SCAN {
            return Err(GameError::InvalidState(format!(
                "at most {} items can be equipped",
                MAX_EQUIPMENT_SCAN
            )));
        }
        metadata.equipped_at = now;
        let metadata = metadata.clone();

        equipped.push(token_id);
        self.storage
            .equipped_by_owner
            .insert(caller.clone(), equipped);
        Ok(metadata)
    }

    pub(crate) fn unequip(
        &mut self,
        token_id: u64,
        caller: &AccountId,
    ) -> Result<EquipmentMetadata, GameError> {
        self.check_held(token_id, caller)?;
        let metadata = self.metadata_mut(token_id)?;
        if !metadata.is_equipped() {
            return Err(GameError::NotEquipped(token_id));
        }
        metadata.equipped_at = 0;
        let metadata = metadata.clone();

        let mut equipped = self.storage.equipped_of(caller);
        equipped.retain(|id| *id != token_id);
        if equipped.is_empty() {
            self.storage.equipped_by_owner.remove(caller);
        } else {
            self.storage
                .equipped_by_owner
                .insert(caller.clone(), equipped);
        }
        Ok(metadata)
    }

    fn check_held(&self, token_id: u64, caller: &AccountId) -> Result<(), GameError> {
        if !self.storage.metadata.contains_key(&token_id) {
            return Err(GameError::NotFound(format!("equipment {}", token_id)));
        }
        self.storage.ledger.check_owner(token_id, caller)
    }

    fn metadata_mut(&mut self, token_id: u64) -> Result<&mut EquipmentMetadata, GameError> {
        self.storage
            .metadata
            .get_mut(&token_id)
            .ok_or_else(|| GameError::NotFound(format!("equipment {}", token_id)))
    }
}
