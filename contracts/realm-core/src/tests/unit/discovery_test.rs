use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- Helpers ---

fn mint_at(contract: &mut Contract, kind: DiscoverableKind, x: i64) -> u64 {
    testing_env!(context(owner()).build());
    contract
        .discovery_mint(kind, player(), Location::new(x, 0))
        .unwrap()
        .id
}

fn setup_bounties(count: i64) -> Contract {
    let mut contract = setup();
    for x in 1..=count {
        mint_at(&mut contract, DiscoverableKind::Bounty, x);
    }
    contract
}

/// Every unbeaten id sits at the position its index claims.
fn assert_index_consistent(contract: &Contract, kind: DiscoverableKind) {
    let ids = contract.discovery_unbeaten(kind, None, Some(MAX_PAGE_LIMIT as u32));
    assert_eq!(ids.len() as u32, contract.discovery_unbeaten_count(kind));
    for (position, id) in ids.iter().enumerate() {
        assert_eq!(contract.discovery_index_of(kind, *id), Some(position as u32));
        let entity = contract.discovery_get(kind, *id).unwrap();
        assert_eq!(entity.beaten_at, 0);
    }
}

// --- Minting ---

#[test]
fn mint_records_entity() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let entity = contract
        .discovery_mint(DiscoverableKind::Oblivion, player(), Location::new(-5, 7))
        .unwrap();

    assert_eq!(entity.id, 1);
    assert_eq!(entity.kind, DiscoverableKind::Oblivion);
    assert_eq!(entity.owner_or_discoverer, player());
    assert_eq!(entity.discoverer_reward_ratio, OBLIVION_DISCOVERER_REWARD_RATIO);
    assert_eq!(entity.created_at, START_SECS);
    assert_eq!(entity.valid_at, START_SECS + 3_600);
    assert_eq!(entity.beaten_at, 0);
    assert!(emitted("entity_discovered"));

    assert_eq!(contract.discovery_index_of(DiscoverableKind::Oblivion, 1), Some(0));
    assert_eq!(contract.nft_owner_of(TokenCollection::Oblivion, 1), Some(player()));
    assert_eq!(
        contract.discovery_at(DiscoverableKind::Oblivion, Location::new(-5, 7)),
        Some(entity)
    );
}

#[test]
fn bounty_ratio_is_fixed_per_kind() {
    let mut contract = setup();
    let id = mint_at(&mut contract, DiscoverableKind::Bounty, 1);
    let entity = contract.discovery_get(DiscoverableKind::Bounty, id).unwrap();
    assert_eq!(entity.discoverer_reward_ratio, BOUNTY_DISCOVERER_REWARD_RATIO);
}

#[test]
fn kinds_are_independent() {
    let mut contract = setup();
    mint_at(&mut contract, DiscoverableKind::Bounty, 1);
    mint_at(&mut contract, DiscoverableKind::Bounty, 2);
    let oblivion = mint_at(&mut contract, DiscoverableKind::Oblivion, 1);

    assert_eq!(oblivion, 1);
    assert_eq!(contract.discovery_total_supply(DiscoverableKind::Bounty), 2);
    assert_eq!(contract.discovery_total_supply(DiscoverableKind::Oblivion), 1);
    assert_eq!(contract.discovery_unbeaten_count(DiscoverableKind::Oblivion), 1);
}

#[test]
fn occupied_coordinates_are_rejected() {
    let mut contract = setup();
    mint_at(&mut contract, DiscoverableKind::Bounty, 1);
    testing_env!(context(owner()).build());
    let err = contract
        .discovery_mint(DiscoverableKind::Bounty, other(), Location::new(1, 0))
        .unwrap_err();
    assert!(matches!(err, GameError::AlreadyMinted(_)));
}

#[test]
fn safe_mint_is_idempotent_by_coordinates() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let first = contract
        .discovery_safe_mint(DiscoverableKind::Oblivion, player(), Location::new(3, 3))
        .unwrap();
    assert!(first.minted);

    testing_env!(context_after(owner(), 60).build());
    let second = contract
        .discovery_safe_mint(DiscoverableKind::Oblivion, other(), Location::new(3, 3))
        .unwrap();
    assert!(!second.minted);
    assert_eq!(second.entity, first.entity);
    assert!(!emitted("entity_discovered"));
    assert_eq!(contract.discovery_total_supply(DiscoverableKind::Oblivion), 1);
    assert_eq!(contract.discovery_unbeaten_count(DiscoverableKind::Oblivion), 1);
}

#[test]
fn mint_requires_owner_or_player_peer() {
    let mut contract = setup();
    testing_env!(context(other()).build());
    let err = contract
        .discovery_mint(DiscoverableKind::Bounty, other(), Location::new(1, 1))
        .unwrap_err();
    assert!(matches!(err, GameError::Unauthorized(_, _)));
}

#[test]
fn mint_requires_kind_init() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .discovery_init(DiscoverableKind::Bounty, DiscoveryInit { valid_delay: 0 })
        .unwrap();

    testing_env!(context(owner()).build());
    let err = contract
        .discovery_mint(DiscoverableKind::Oblivion, player(), Location::new(1, 1))
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidState(_)));
}

// --- Beating ---

#[test]
fn beat_marks_entity_and_leaves_set() {
    let mut contract = setup_bounties(1);
    testing_env!(context(owner()).build());
    let entity = contract.discovery_beat(DiscoverableKind::Bounty, 1, other()).unwrap();

    assert_eq!(entity.beaten_at, START_SECS);
    assert_eq!(entity.beaten_by, Some(other()));
    assert!(entity.is_beaten());
    assert_eq!(contract.discovery_unbeaten_count(DiscoverableKind::Bounty), 0);
    assert_eq!(contract.discovery_index_of(DiscoverableKind::Bounty, 1), None);
    assert!(emitted("entity_beaten"));
}

#[test]
fn beat_twice_is_rejected() {
    let mut contract = setup_bounties(1);
    testing_env!(context(owner()).build());
    contract.discovery_beat(DiscoverableKind::Bounty, 1, other()).unwrap();
    let result = contract.discovery_beat(DiscoverableKind::Bounty, 1, other());
    assert_not_fatal(&result);
    assert_eq!(result.unwrap_err(), GameError::AlreadyBeaten(1));
}

#[test]
fn beat_unknown_entity() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let err = contract.discovery_beat(DiscoverableKind::Oblivion, 4, other()).unwrap_err();
    assert_eq!(err, GameError::NotDiscovered(4));
}

#[test]
fn swap_and_pop_from_the_middle() {
    let mut contract = setup_bounties(4);
    testing_env!(context(owner()).build());
    contract.discovery_beat(DiscoverableKind::Bounty, 2, other()).unwrap();

    // Last id takes the freed position.
    assert_eq!(
        contract.discovery_unbeaten(DiscoverableKind::Bounty, None, None),
        vec![1, 4, 3]
    );
    assert_index_consistent(&contract, DiscoverableKind::Bounty);
}

#[test]
fn swap_and_pop_of_the_last_element() {
    let mut contract = setup_bounties(3);
    testing_env!(context(owner()).build());
    contract.discovery_beat(DiscoverableKind::Bounty, 3, other()).unwrap();
    assert_eq!(
        contract.discovery_unbeaten(DiscoverableKind::Bounty, None, None),
        vec![1, 2]
    );
    assert_eq!(contract.discovery_index_of(DiscoverableKind::Bounty, 3), None);
    assert_index_consistent(&contract, DiscoverableKind::Bounty);
}

#[test]
fn swap_and_pop_until_empty() {
    let mut contract = setup_bounties(5);
    for id in [3, 1, 5, 2, 4] {
        testing_env!(context(owner()).build());
        let result = contract.discovery_beat(DiscoverableKind::Bounty, id, other());
        assert_not_fatal(&result);
        result.unwrap();
        assert_index_consistent(&contract, DiscoverableKind::Bounty);
    }
    assert_eq!(contract.discovery_unbeaten_count(DiscoverableKind::Bounty), 0);
}

#[test]
fn mint_after_beat_appends_behind_swapped_id() {
    let mut contract = setup_bounties(3);
    testing_env!(context(owner()).build());
    contract.discovery_beat(DiscoverableKind::Bounty, 1, other()).unwrap();
    assert_index_consistent(&contract, DiscoverableKind::Bounty);

    assert_eq!(mint_at(&mut contract, DiscoverableKind::Bounty, 4), 4);
    assert_eq!(
        contract.discovery_unbeaten(DiscoverableKind::Bounty, None, None),
        vec![3, 2, 4]
    );
    assert_index_consistent(&contract, DiscoverableKind::Bounty);
}

#[test]
fn interleaved_mint_and_beat_keep_index_consistent() {
    let kind = DiscoverableKind::Oblivion;
    let mut contract = setup();
    let mut expected: Vec<u64> = Vec::new();
    let mut seed: u64 = 0x5eed;
    let mut next_x = 1;

    for _ in 0..80 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let roll = seed >> 33;
        if expected.is_empty() || roll % 3 != 0 {
            let id = mint_at(&mut contract, kind, next_x);
            next_x += 1;
            expected.push(id);
        } else {
            let position = (roll as usize / 3) % expected.len();
            let id = expected.swap_remove(position);
            testing_env!(context(owner()).build());
            let result = contract.discovery_beat(kind, id, other());
            assert_not_fatal(&result);
            result.unwrap();
            assert_eq!(contract.discovery_index_of(kind, id), None);
        }
        assert_eq!(contract.discovery_unbeaten(kind, None, Some(MAX_PAGE_LIMIT as u32)), expected);
        assert_index_consistent(&contract, kind);
    }
}

#[test]
fn unbeaten_pages() {
    let contract = setup_bounties(5);
    assert_eq!(
        contract.discovery_unbeaten(DiscoverableKind::Bounty, Some(1), Some(2)),
        vec![2, 3]
    );
    assert!(contract
        .discovery_unbeaten(DiscoverableKind::Bounty, Some(9), None)
        .is_empty());
}
