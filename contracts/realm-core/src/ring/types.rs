use near_sdk::store::LookupMap;
use near_sdk::{AccountId, near};

use crate::config::RingConstants;
use crate::constants::ORIGIN_RING_ID;
use crate::storage::{RegionKey, RegionState, StorageKey};
use crate::token::{NftLedger, TokenHolder};

/// Map coordinate. Ring distance uses `|x|` and `|y|`.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub x: i64,
    pub y: i64,
}

impl Location {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn distance_x(&self) -> u64 {
        self.x.unsigned_abs()
    }

    pub fn distance_y(&self) -> u64 {
        self.y.unsigned_abs()
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring {
    // Append-only: new fields go at the end.
    pub town_limit: u64,
    pub town_count: u64,
    pub town_minting_ratio: u32,
    pub bounty_minting_ratio: u32,
    pub oblivion_minting_ratio: u32,
    pub explorer: Option<AccountId>,
    pub explored_at: u64,
}

impl Ring {
    pub fn is_minted(&self) -> bool {
        self.explored_at != 0
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct RingMetadata {
    pub ring_id: u64,
    pub ring: Ring,
    pub existed: bool,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct RingMintResult {
    pub ring_id: u64,
    pub ring: Ring,
    pub minted: bool,
}

#[near(serializers = [borsh])]
pub(crate) struct RingStorage {
    // Append-only: new fields go at the end.
    pub(crate) rings: LookupMap<u64, Ring>,
    pub(crate) minted_count: u64,
    pub(crate) ledger: NftLedger,
}

impl RegionState for RingStorage {
    fn fresh(key: &RegionKey) -> Self {
        Self {
            rings: LookupMap::new(key.child(StorageKey::Rings)),
            minted_count: 0,
            ledger: NftLedger::new(key.child(StorageKey::Ledger)),
        }
    }
}

impl TokenHolder for RingStorage {
    fn ledger(&self) -> &NftLedger {
        &self.ledger
    }

    fn ledger_mut(&mut self) -> &mut NftLedger {
        &mut self.ledger
    }
}

impl RingStorage {
    pub(crate) fn minted(&self, ring_id: u64) -> Option<&Ring> {
        self.rings.get(&ring_id).filter(|ring| ring.is_minted())
    }

    pub(crate) fn is_minted(&self, ring_id: u64) -> bool {
        self.minted(ring_id).is_some()
    }

    /// Stored ring, or the virtual ring minting would produce.
    ///
    /// Virtual rings take `town_limit = ring[1].town_limit * (id² + 2·id)`.
    /// Ring 1 itself is seeded from `origin_town_limit`; any other ring read
    /// before ring 1 is minted gets a limit of zero.
    pub(crate) fn metadata(&self, ring_id: u64, constants: &RingConstants) -> RingMetadata {
        if let Some(ring) = self.minted(ring_id) {
            return RingMetadata {
                ring_id,
                ring: ring.clone(),
                existed: true,
            };
        }

        let town_limit = if ring_id == ORIGIN_RING_ID {
            constants.origin_town_limit
        } else {
            let origin = self
                .minted(ORIGIN_RING_ID)
                .map(|ring| ring.town_limit)
                .unwrap_or(0);
            realm_types::virtual_town_limit(origin, ring_id)
        };

        RingMetadata {
            ring_id,
            ring: Ring {
                town_limit,
                town_count: 0,
                town_minting_ratio: constants.town_minting_ratio,
                bounty_minting_ratio: constants.bounty_minting_ratio,
                oblivion_minting_ratio: constants.oblivion_minting_ratio,
                explorer: None,
                explored_at: 0,
            },
            existed: false,
        }
    }
}
