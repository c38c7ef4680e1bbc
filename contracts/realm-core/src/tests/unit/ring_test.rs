use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- ring_number ---

#[test]
fn ring_number_requires_init() {
    let contract = new_contract();
    let err = contract.ring_number(300_000, 400_000).unwrap_err();
    assert!(matches!(err, GameError::InvalidState(_)));
}

#[test]
fn ring_number_of_three_four_five_triangle() {
    let contract = setup();
    // isqrt(300000² + 400000²) = 500000; 500000 / 200000 = 2.
    assert_eq!(contract.ring_number(300_000, 400_000).unwrap(), 2);
}

#[test]
fn ring_number_boundaries() {
    let contract = setup();
    assert_eq!(contract.ring_number(0, 0).unwrap(), 0);
    assert_eq!(contract.ring_number(DISTANCE - 1, 0).unwrap(), 0);
    assert_eq!(contract.ring_number(DISTANCE, 0).unwrap(), 1);
    assert_eq!(contract.ring_number(0, DISTANCE * 3).unwrap(), 3);
}

// --- Metadata ---

#[test]
fn virtual_origin_ring_is_seeded_from_constants() {
    let contract = setup();
    let metadata = contract.ring_metadata(1);
    assert!(!metadata.existed);
    assert_eq!(metadata.ring.town_limit, ORIGIN_TOWN_LIMIT);
    assert_eq!(metadata.ring.town_minting_ratio, 5_000);
    assert_eq!(metadata.ring.explorer, None);
    assert_eq!(metadata.ring.explored_at, 0);
}

#[test]
fn virtual_outer_ring_scales_with_origin_limit() {
    let mut contract = setup();
    assert_eq!(contract.ring_metadata(2).ring.town_limit, 0);

    testing_env!(context(owner()).build());
    contract.ring_mint_by_explorer(1, player()).unwrap();
    // 10 * (2² + 2·2)
    assert_eq!(contract.ring_metadata(2).ring.town_limit, 80);
}

// --- Minting ---

#[test]
fn mint_by_explorer_persists_ring_and_token() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let ring = contract.ring_mint_by_explorer(1, player()).unwrap();

    assert_eq!(ring.explorer, Some(player()));
    assert_eq!(ring.explored_at, START_SECS);
    assert_eq!(ring.town_count, 0);
    assert!(contract.ring_is_minted(1));
    assert!(contract.ring_metadata(1).existed);
    assert_eq!(contract.ring_total_supply(), 1);
    assert_eq!(contract.nft_owner_of(TokenCollection::Ring, 1), Some(player()));
    assert!(emitted("ring_minted"));
}

#[test]
fn outer_ring_requires_origin_ring() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let err = contract.ring_mint_by_explorer(2, player()).unwrap_err();
    assert!(matches!(err, GameError::InvalidState(_)));
    assert!(!contract.ring_is_minted(2));
}

#[test]
fn direct_mint_twice_is_rejected() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    contract.ring_mint_by_explorer(1, player()).unwrap();
    let result = contract.ring_mint_by_explorer(1, other());
    assert_not_fatal(&result);
    assert!(matches!(result.unwrap_err(), GameError::AlreadyMinted(_)));
}

#[test]
fn mint_requires_owner_or_player_peer() {
    let mut contract = setup();
    testing_env!(context(player()).build());
    let err = contract.ring_mint_by_explorer(1, player()).unwrap_err();
    assert!(matches!(err, GameError::Unauthorized(_, _)));

    testing_env!(context(realm()).build());
    assert!(contract.ring_mint_by_explorer(1, player()).is_ok());
}

#[test]
fn mint_requires_init() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let err = contract.ring_mint_by_explorer(1, player()).unwrap_err();
    assert!(matches!(err, GameError::InvalidState(_)));
}

#[test]
fn safe_mint_is_idempotent() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let first = contract.ring_safe_mint(1, player()).unwrap();
    assert!(first.minted);

    testing_env!(context_after(owner(), 500).build());
    let second = contract.ring_safe_mint(1, other()).unwrap();
    assert!(!second.minted);
    assert_eq!(second.ring, first.ring);
    assert!(!emitted("ring_minted"));

    assert_eq!(contract.ring_total_supply(), 1);
    assert_eq!(contract.nft_total_supply(TokenCollection::Ring), U128(1));
    assert_eq!(contract.nft_owner_of(TokenCollection::Ring, 1), Some(player()));
    assert_eq!(contract.ring_metadata(1).ring.explored_at, START_SECS);
}

// --- Town count ---

#[test]
fn increase_town_count_rejects_zero_step() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    contract.ring_mint_by_explorer(1, player()).unwrap();
    let err = contract.ring_increase_town_count(1, 0).unwrap_err();
    assert_eq!(err, GameError::InvalidStep);
}

#[test]
fn increase_town_count_on_unminted_ring() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let err = contract.ring_increase_town_count(1, 1).unwrap_err();
    assert!(matches!(err, GameError::NotFound(_)));
}

#[test]
fn escalation_at_town_limit_is_one_way() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    contract.ring_mint_by_explorer(1, player()).unwrap();

    let ring = contract.ring_increase_town_count(1, ORIGIN_TOWN_LIMIT - 1).unwrap();
    assert_eq!(ring.town_count, ORIGIN_TOWN_LIMIT - 1);
    assert_eq!(ring.town_minting_ratio, 5_000);

    testing_env!(context(owner()).build());
    let ring = contract.ring_increase_town_count(1, 1).unwrap();
    assert_eq!(ring.town_count, ORIGIN_TOWN_LIMIT);
    assert_eq!(ring.town_minting_ratio, 1_000);
    assert_eq!(events()[0]["data"][0]["escalated"], true);

    testing_env!(context(owner()).build());
    let ring = contract.ring_increase_town_count(1, 5).unwrap();
    assert_eq!(ring.town_minting_ratio, 1_000);
    assert_eq!(events()[0]["data"][0]["escalated"], false);
}
