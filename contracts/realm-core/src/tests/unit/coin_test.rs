use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- Genesis ---

#[test]
fn genesis_mint_is_single_shot() {
    let mut contract = setup();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .coin_mint_genesis(owner(), U128(1_000 * ONE_TOKEN))
        .unwrap();
    assert_eq!(contract.coin_balance_of(owner()), U128(1_000 * ONE_TOKEN));
    assert_eq!(events()[0]["data"][0]["genesis"], true);

    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.coin_mint_genesis(owner(), U128(1)).unwrap_err();
    assert!(matches!(err, GameError::AlreadyMinted(_)));
    assert_eq!(contract.coin_total_supply(), U128(1_000 * ONE_TOKEN));
}

#[test]
fn genesis_mint_requires_owner_and_deposit() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let err = contract.coin_mint_genesis(owner(), U128(1)).unwrap_err();
    assert!(matches!(err, GameError::InsufficientDeposit(_)));

    testing_env!(context_with_deposit(player(), 1).build());
    let err = contract.coin_mint_genesis(player(), U128(1)).unwrap_err();
    assert!(matches!(err, GameError::Unauthorized(_, _)));
    assert!(!contract.coin_metadata().genesis_minted);
}

// --- Mint ---

#[test]
fn peer_mint_accumulates() {
    let mut contract = setup();
    testing_env!(context(realm()).build());
    contract.coin_mint(player(), U128(5)).unwrap();
    contract.coin_mint(player(), U128(7)).unwrap();
    assert_eq!(contract.coin_balance_of(player()), U128(12));
    assert_eq!(contract.coin_total_supply(), U128(12));
}

#[test]
fn zero_mint_is_skipped() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    contract.coin_mint(player(), U128(0)).unwrap();
    assert!(events().is_empty());
    assert_eq!(contract.coin_total_supply(), U128(0));
}

#[test]
fn mint_requires_owner_or_player_peer() {
    let mut contract = setup();
    testing_env!(context(player()).build());
    let err = contract.coin_mint(player(), U128(5)).unwrap_err();
    assert!(matches!(err, GameError::Unauthorized(_, _)));
}

// --- Transfer ---

#[test]
fn transfer_moves_balance() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    contract.coin_mint(player(), U128(100)).unwrap();

    testing_env!(context_with_deposit(player(), 1).build());
    contract.coin_transfer(other(), U128(40)).unwrap();
    assert_eq!(contract.coin_balance_of(player()), U128(60));
    assert_eq!(contract.coin_balance_of(other()), U128(40));
    assert_eq!(contract.coin_total_supply(), U128(100));
    assert!(emitted("coin_transfer"));
}

#[test]
fn transfer_rejects_bad_amounts() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    contract.coin_mint(player(), U128(10)).unwrap();

    testing_env!(context_with_deposit(player(), 1).build());
    let err = contract.coin_transfer(other(), U128(11)).unwrap_err();
    assert!(matches!(err, GameError::InvalidState(_)));
    let err = contract.coin_transfer(other(), U128(0)).unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
    let err = contract.coin_transfer(player(), U128(1)).unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
    assert_eq!(contract.coin_balance_of(player()), U128(10));
}

#[test]
fn metadata_reflects_init() {
    let contract = setup();
    let metadata = contract.coin_metadata();
    assert_eq!(metadata.symbol, "REALM");
    assert_eq!(metadata.decimals, 18);
    assert_eq!(metadata.total_supply, U128(0));
}
