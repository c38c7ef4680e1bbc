use near_sdk::store::LookupMap;
use near_sdk::{AccountId, near};

use crate::ring::Location;
use crate::storage::{RegionKey, RegionState, StorageKey};

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug, PartialEq)]
pub enum RandomPurpose {
    Discovery { location: Location, ring_id: u64 },
    Forge,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct RandomRequest {
    // Append-only: new fields go at the end.
    pub requester: AccountId,
    pub purpose: RandomPurpose,
    pub num_words: u32,
    pub requested_at: u64,
}

#[near(serializers = [borsh])]
pub(crate) struct RandomnessStorage {
    // Append-only: new fields go at the end.
    pub(crate) last_request_id: u64,
    pub(crate) pending: LookupMap<u64, RandomRequest>,
}

impl RegionState for RandomnessStorage {
    fn fresh(key: &RegionKey) -> Self {
        Self {
            last_request_id: 0,
            pending: LookupMap::new(key.child(StorageKey::PendingRequests)),
        }
    }
}
