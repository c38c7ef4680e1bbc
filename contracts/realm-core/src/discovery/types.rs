use near_sdk::store::LookupMap;
use near_sdk::{AccountId, near};

use super::{DiscoverableKind, UnbeatenSet};
use crate::ring::Location;
use crate::storage::{RegionKey, RegionState, StorageKey};
use crate::token::{NftLedger, TokenHolder};

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct DiscoverableEntity {
    // Append-only: new fields go at the end.
    pub owner_or_discoverer: AccountId,
    pub coords: Location,
    pub kind: DiscoverableKind,
    pub id: u64,
    pub discoverer_reward_ratio: u32,
    pub valid_at: u64,
    pub created_at: u64,
    pub beaten_at: u64,
    pub beaten_by: Option<AccountId>,
}

impl DiscoverableEntity {
    pub fn is_beaten(&self) -> bool {
        self.beaten_at != 0
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct DiscoveryMintResult {
    pub entity: DiscoverableEntity,
    pub minted: bool,
}

/// Shared by the oblivion and bounty regions; each kind opens its own.
#[near(serializers = [borsh])]
pub(crate) struct DiscoveryStorage {
    // Append-only: new fields go at the end.
    pub(crate) last_id: u64,
    pub(crate) entities: LookupMap<u64, DiscoverableEntity>,
    pub(crate) by_coords: LookupMap<Location, u64>,
    pub(crate) unbeaten: UnbeatenSet,
    pub(crate) ledger: NftLedger,
}

impl RegionState for DiscoveryStorage {
    fn fresh(key: &RegionKey) -> Self {
        Self {
            last_id: 0,
            entities: LookupMap::new(key.child(StorageKey::Entities)),
            by_coords: LookupMap::new(key.child(StorageKey::EntitiesByCoords)),
            unbeaten: UnbeatenSet::new(
                key.child(StorageKey::Unbeaten),
                key.child(StorageKey::UnbeatenIndex),
            ),
            ledger: NftLedger::new(key.child(StorageKey::Ledger)),
        }
    }
}

impl TokenHolder for DiscoveryStorage {
    fn ledger(&self) -> &NftLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut NftLedger {
        &mut self.ledger
    }
}

impl DiscoveryStorage {
    pub(crate) fn at(&self, coords: &Location) -> Option<&DiscoverableEntity> {
        let id = self.by_coords.get(coords)?;
        self.entities.get(id)
    }
}
