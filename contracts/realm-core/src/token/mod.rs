//! Non-fungible token surface shared by the game collections.
//!
//! Each collection keeps its `NftLedger` inside the owning module's storage
//! region; this module only knows how to reach it through [`TokenHolder`].

mod api;
mod ledger;

pub(crate) use ledger::NftLedger;

use near_sdk::near;

use crate::GameError;
use crate::discovery::DiscoveryStorage;
use crate::equipment::EquipmentStorage;
use crate::ring::RingStorage;
use crate::storage::{
    BOUNTY_STORAGE, EQUIPMENT_STORAGE, OBLIVION_STORAGE, RING_STORAGE, Region, TOWN_STORAGE,
};
use crate::town::TownStorage;

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCollection {
    Ring,
    Town,
    Equipment,
    Oblivion,
    Bounty,
}

impl TokenCollection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Town => "town",
            Self::Equipment => "equipment",
            Self::Oblivion => "oblivion",
            Self::Bounty => "bounty",
        }
    }
}

/// A storage record that owns one collection's ledger.
pub(crate) trait TokenHolder {
    fn ledger(&self) -> &NftLedger;

    fn ledger_mut(&mut self) -> &mut NftLedger;

    /// Collection-specific precondition evaluated before any transfer.
    fn check_transferable(&self, _token_id: u64) -> Result<(), GameError> {
        Ok(())
    }
}

pub(crate) fn read_holder<R>(
    collection: TokenCollection,
    f: impl FnOnce(&dyn TokenHolder) -> R,
) -> R {
    match collection {
        TokenCollection::Ring => f(&*Region::<RingStorage>::open(RING_STORAGE)),
        TokenCollection::Town => f(&*Region::<TownStorage>::open(TOWN_STORAGE)),
        TokenCollection::Equipment => f(&*Region::<EquipmentStorage>::open(EQUIPMENT_STORAGE)),
        TokenCollection::Oblivion => f(&*Region::<DiscoveryStorage>::open(OBLIVION_STORAGE)),
        TokenCollection::Bounty => f(&*Region::<DiscoveryStorage>::open(BOUNTY_STORAGE)),
    }
}

pub(crate) fn write_holder<R>(
    collection: TokenCollection,
    f: impl FnOnce(&mut dyn TokenHolder) -> R,
) -> R {
    match collection {
        TokenCollection::Ring => f(&mut *Region::<RingStorage>::open(RING_STORAGE)),
        TokenCollection::Town => f(&mut *Region::<TownStorage>::open(TOWN_STORAGE)),
        TokenCollection::Equipment => {
            f(&mut *Region::<EquipmentStorage>::open(EQUIPMENT_STORAGE))
        }
        TokenCollection::Oblivion => f(&mut *Region::<DiscoveryStorage>::open(OBLIVION_STORAGE)),
        TokenCollection::Bounty => f(&mut *Region::<DiscoveryStorage>::open(BOUNTY_STORAGE)),
    }
}
