use near_sdk::store::LookupMap;
use near_sdk::{AccountId, near};
use realm_types::{EquipmentAttributes, EquipmentCategory, Rarity};

use crate::GameError;
use crate::storage::{RegionKey, RegionState, StorageKey};
use crate::token::{NftLedger, TokenHolder};

/// Stored form: category and rarity are kept as their table indices.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct EquipmentMetadata {
    // Append-only: new fields go at the end.
    pub category: u8,
    pub rarity: u8,
    pub affixes: [bool; 2],
    pub minter: AccountId,
    pub equipped_at: u64,
}

impl EquipmentMetadata {
    pub fn new(attributes: EquipmentAttributes, minter: AccountId) -> Self {
        Self {
            category: attributes.category.index(),
            rarity: attributes.rarity.index(),
            affixes: attributes.affixes,
            minter,
            equipped_at: 0,
        }
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped_at != 0
    }

    pub fn rarity(&self) -> Result<Rarity, GameError> {
        Rarity::from_index(self.rarity)
            .ok_or_else(|| GameError::Fatal(format!("unknown rarity index {}", self.rarity)))
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct EquipmentView {
    pub token_id: u64,
    pub owner_id: Option<AccountId>,
    pub category: String,
    pub rarity: String,
    pub rarity_multi: u32,
    pub affixes: [bool; 2],
    pub minter: AccountId,
    pub equipped_at: u64,
}

#[near(serializers = [borsh])]
pub(crate) struct EquipmentStorage {
    // Append-only: new fields go at the end.
    pub(crate) last_token_id: u64,
    pub(crate) metadata: LookupMap<u64, EquipmentMetadata>,
    pub(crate) equipped_by_owner: LookupMap<AccountId, Vec<u64>>,
    pub(crate) ledger: NftLedger,
}

impl RegionState for EquipmentStorage {
    fn fresh(key: &RegionKey) -> Self {
        Self {
            last_token_id: 0,
            metadata: LookupMap::new(key.child(StorageKey::EquipmentMetadata)),
            equipped_by_owner: LookupMap::new(key.child(StorageKey::EquippedByOwner)),
            ledger: NftLedger::new(key.child(StorageKey::Ledger)),
        }
    }
}

impl TokenHolder for EquipmentStorage {
    fn ledger(&self) -> &NftLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut NftLedger {
        &mut self.ledger
    }

    fn check_transferable(&self, token_id: u64) -> Result<(), GameError> {
        if self
            .metadata
            .get(&token_id)
            .is_some_and(EquipmentMetadata::is_equipped)
        {
            return Err(GameError::TransferBlocked(format!(
                "equipment {} is equipped",
                token_id
            )));
        }
        Ok(())
    }
}

impl EquipmentStorage {
    pub(crate) fn view(&self, token_id: u64) -> Option<EquipmentView> {
        let metadata = self.metadata.get(&token_id)?;
        let category = EquipmentCategory::from_index(metadata.category)?;
        let rarity = Rarity::from_index(metadata.rarity)?;
        Some(EquipmentView {
            token_id,
            owner_id: self.ledger.owner_of(token_id).cloned(),
            category: category.as_str().to_string(),
            rarity: rarity.as_str().to_string(),
            rarity_multi: realm_types::rarity_multi(rarity),
            affixes: metadata.affixes,
            minter: metadata.minter.clone(),
            equipped_at: metadata.equipped_at,
        })
    }

    pub(crate) fn equipped_of(&self, account_id: &AccountId) -> Vec<u64> {
        self.equipped_by_owner
            .get(account_id)
            .cloned()
            .unwrap_or_default()
    }
}
