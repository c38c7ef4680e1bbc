use near_sdk::store::{LookupMap, LookupSet};
use near_sdk::{AccountId, near};

use crate::ring::Location;
use crate::storage::{RegionKey, RegionState, StorageKey};

#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expedition {
    pub town_id: u64,
    pub started_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerView {
    pub account_id: AccountId,
    pub expedition: Option<Expedition>,
    pub attack_power: u64,
    pub equipped: Vec<u64>,
}

#[near(serializers = [borsh])]
pub(crate) struct PlayerStorage {
    // Append-only: new fields go at the end.
    pub(crate) expeditions: LookupMap<AccountId, Expedition>,
    pub(crate) explored: LookupSet<Location>,
}

impl RegionState for PlayerStorage {
    fn fresh(key: &RegionKey) -> Self {
        Self {
            expeditions: LookupMap::new(key.child(StorageKey::Expeditions)),
            explored: LookupSet::new(key.child(StorageKey::ExploredLocations)),
        }
    }
}
