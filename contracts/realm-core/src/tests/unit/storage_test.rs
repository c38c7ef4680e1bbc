use std::collections::BTreeSet;

use crate::coin::CoinStorage;
use crate::storage::*;
use crate::tests::test_utils::*;
use near_sdk::testing_env;

// --- Namespace registry ---

#[test]
fn namespaces_are_unique() {
    let unique: BTreeSet<&str> = ALL_NAMESPACES.iter().copied().collect();
    assert_eq!(unique.len(), ALL_NAMESPACES.len(), "duplicate region namespace");
}

#[test]
fn namespaces_share_the_realm_prefix() {
    for namespace in ALL_NAMESPACES {
        assert!(namespace.starts_with("realm."), "{} escapes the realm prefix", namespace);
    }
}

#[test]
fn region_keys_are_distinct() {
    testing_env!(context(owner()).build());
    let keys: BTreeSet<Vec<u8>> = ALL_NAMESPACES
        .iter()
        .map(|namespace| RegionKey::derive(*namespace).as_bytes().to_vec())
        .collect();
    assert_eq!(keys.len(), ALL_NAMESPACES.len());
}

#[test]
fn region_key_is_sha256_of_namespace() {
    testing_env!(context(owner()).build());
    let key = RegionKey::derive(RING_STORAGE);
    assert_eq!(key.as_bytes(), near_sdk::env::sha256(RING_STORAGE.as_bytes()).as_slice());
    assert_eq!(key.namespace(), RING_STORAGE);
}

#[test]
fn child_prefixes_do_not_alias_across_regions() {
    testing_env!(context(owner()).build());
    let ring = RegionKey::derive(RING_STORAGE);
    let town = RegionKey::derive(TOWN_STORAGE);
    assert_ne!(ring.child(StorageKey::Ledger), town.child(StorageKey::Ledger));
    assert_ne!(ring.child(StorageKey::Ledger), ring.child(StorageKey::Rings));
    assert!(ring.child(StorageKey::Rings).starts_with(ring.as_bytes()));
}

// --- Region lifecycle ---

#[test]
fn unwritten_region_opens_fresh() {
    testing_env!(context(owner()).build());
    assert!(!Region::<CoinStorage>::exists(COIN_STORAGE));
    let storage = Region::<CoinStorage>::open(COIN_STORAGE);
    assert_eq!(storage.total_supply, 0);
    assert!(!storage.genesis_minted);
}

#[test]
fn read_only_handle_writes_nothing() {
    testing_env!(context(owner()).build());
    {
        let storage = Region::<CoinStorage>::open(COIN_STORAGE);
        assert_eq!(storage.balance_of(&player()), 0);
    }
    assert!(!Region::<CoinStorage>::exists(COIN_STORAGE));
}

#[test]
fn mutated_region_persists_on_drop() {
    testing_env!(context(owner()).build());
    {
        let mut storage = Region::<CoinStorage>::open(COIN_STORAGE);
        storage.mint(&player(), 42).unwrap();
    }
    assert!(Region::<CoinStorage>::exists(COIN_STORAGE));
    let storage = Region::<CoinStorage>::open(COIN_STORAGE);
    assert_eq!(storage.total_supply, 42);
    assert_eq!(storage.balance_of(&player()), 42);
}

#[test]
fn regions_are_isolated() {
    testing_env!(context(owner()).build());
    {
        let mut storage = Region::<CoinStorage>::open(COIN_STORAGE);
        storage.mint(&player(), 7).unwrap();
    }
    // Same record type under another namespace sees nothing.
    let other = Region::<CoinStorage>::open(PLAYER_STORAGE);
    assert_eq!(other.total_supply, 0);
    assert_eq!(other.balance_of(&player()), 0);
}
