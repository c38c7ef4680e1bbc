use near_sdk::{BorshStorageKey, near};

/// Tags for keyed collections inside a region.
///
/// Collections are addressed `region_key ++ borsh(tag)`, so variants are part
/// of the persisted layout: append new ones at the end, never reorder.
#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Ledger,
    LedgerOwners,
    LedgerTokens,
    LedgerTokensPerOwner,
    LedgerTokensPerOwnerInner { account_id_hash: Vec<u8> },
    Rings,
    Towns,
    TownAttributes,
    Entities,
    EntitiesByCoords,
    Unbeaten,
    UnbeatenIndex,
    EquipmentMetadata,
    EquippedByOwner,
    Balances,
    PendingRequests,
    Expeditions,
    ExploredLocations,
    Routes,
    Latched,
}
