use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, near};

use crate::ring::Location;
use crate::storage::{RegionKey, RegionState, StorageKey};
use crate::token::{NftLedger, TokenHolder};

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Town {
    // Append-only: new fields go at the end.
    pub nickname: String,
    pub flag_path: String,
    pub location: Location,
    pub level: u32,
    pub explorer_fee_ratio: u32,
    pub explorer_slot_count: u32,
    pub created_at: u64,
}

/// Explorer roster of a town: `explorers[slot]` is the occupant, if any.
/// Slots are never compacted.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TownAttribute {
    // Append-only: new fields go at the end.
    pub explorer_counter: u32,
    pub explorers: Vec<Option<AccountId>>,
}

impl TownAttribute {
    pub fn with_capacity(slots: u32) -> Self {
        Self {
            explorer_counter: 0,
            explorers: vec![None; slots as usize],
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct TownView {
    pub town_id: u64,
    pub owner_id: Option<AccountId>,
    pub town: Town,
    pub explorer_counter: u32,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ExploreRewardQuote {
    pub reward: U128,
    pub explorer_fee_ratio: u32,
    pub system_fee_ratio: u32,
}

#[near(serializers = [borsh])]
pub(crate) struct TownStorage {
    // Append-only: new fields go at the end.
    pub(crate) last_town_id: u64,
    pub(crate) towns: LookupMap<u64, Town>,
    pub(crate) attributes: LookupMap<u64, TownAttribute>,
    pub(crate) ledger: NftLedger,
}

impl RegionState for TownStorage {
    fn fresh(key: &RegionKey) -> Self {
        Self {
            last_town_id: 0,
            towns: LookupMap::new(key.child(StorageKey::Towns)),
            attributes: LookupMap::new(key.child(StorageKey::TownAttributes)),
            ledger: NftLedger::new(key.child(StorageKey::Ledger)),
        }
    }
}

impl TokenHolder for TownStorage {
    fn ledger(&self) -> &NftLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut NftLedger {
        &mut self.ledger
    }
}

impl TownStorage {
    pub(crate) fn view(&self, town_id: u64) -> Option<TownView> {
        let town = self.towns.get(&town_id)?;
        Some(TownView {
            town_id,
            owner_id: self.ledger.owner_of(town_id).cloned(),
            town: town.clone(),
            explorer_counter: self
                .attributes
                .get(&town_id)
                .map(|attr| attr.explorer_counter)
                .unwrap_or(0),
        })
    }
}
