use realm_types::{Rarity, U256};

use super::{EquipmentMetadata, EquipmentRegistry, EquipmentStorage, EquipmentView};
use crate::config::{EquipmentConstants, WithRelated};
use crate::guards::{check_not_latched, now_secs};
use crate::randomness::parse_random_words;
use crate::storage::{EQUIPMENT_CONSTANTS, EQUIPMENT_STORAGE, Region};
use crate::token::TokenCollection;
use crate::*;

impl Contract {
    pub(crate) fn equipment_mint_as(
        &mut self,
        caller: &AccountId,
        player: &AccountId,
        random_words: &[U256],
    ) -> Result<u64, GameError> {
        {
            let constants = Region::<EquipmentConstants>::open(EQUIPMENT_CONSTANTS);
            self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        }
        let mut storage = Region::<EquipmentStorage>::open(EQUIPMENT_STORAGE);
        let (token_id, metadata) = EquipmentRegistry::new(&mut storage).mint(player, random_words)?;
        events::emit_equipment_minted(caller, token_id, player, &metadata);
        Ok(token_id)
    }

    pub(crate) fn equipment_equip_as(
        &mut self,
        caller: &AccountId,
        token_id: u64,
    ) -> Result<EquipmentMetadata, GameError> {
        check_not_latched(TokenCollection::Equipment, token_id)?;
        let mut storage = Region::<EquipmentStorage>::open(EQUIPMENT_STORAGE);
        let metadata = EquipmentRegistry::new(&mut storage).equip(token_id, caller, now_secs())?;
        events::emit_equipment_equipped(caller, token_id, true);
        Ok(metadata)
    }

    pub(crate) fn equipment_unequip_as(
        &mut self,
        caller: &AccountId,
        token_id: u64,
    ) -> Result<EquipmentMetadata, GameError> {
        check_not_latched(TokenCollection::Equipment, token_id)?;
        let mut storage = Region::<EquipmentStorage>::open(EQUIPMENT_STORAGE);
        let metadata = EquipmentRegistry::new(&mut storage).unequip(token_id, caller)?;
        events::emit_equipment_equipped(caller, token_id, false);
        Ok(metadata)
    }
}

#[near]
impl Contract {
    /// `random_words` are decimal strings; exactly three are required.
    #[handle_result]
    pub fn equipment_mint(
        &mut self,
        player: AccountId,
        random_words: Vec<String>,
    ) -> Result<u64, GameError> {
        let words = parse_random_words(&random_words)?;
        self.equipment_mint_as(&env::predecessor_account_id(), &player, &words)
    }

    #[handle_result]
    pub fn equipment_equip(&mut self, token_id: u64) -> Result<EquipmentMetadata, GameError> {
        self.equipment_equip_as(&env::predecessor_account_id(), token_id)
    }

    #[handle_result]
    pub fn equipment_unequip(&mut self, token_id: u64) -> Result<EquipmentMetadata, GameError> {
        self.equipment_unequip_as(&env::predecessor_account_id(), token_id)
    }

    pub fn equipment_get(&self, token_id: u64) -> Option<EquipmentView> {
        Region::<EquipmentStorage>::open(EQUIPMENT_STORAGE).view(token_id)
    }

    pub fn equipment_equipped(&self, account_id: AccountId) -> Vec<u64> {
        Region::<EquipmentStorage>::open(EQUIPMENT_STORAGE).equipped_of(&account_id)
    }

    #[handle_result]
    pub fn equipment_rarity_multi(&self, rarity: u8) -> Result<u32, GameError> {
        Rarity::from_index(rarity)
            .map(realm_types::rarity_multi)
            .ok_or_else(|| GameError::InvalidInput(format!("unknown rarity {}", rarity)))
    }

    pub fn equipment_total_supply(&self) -> u64 {
        Region::<EquipmentStorage>::open(EQUIPMENT_STORAGE).last_token_id
    }
}
