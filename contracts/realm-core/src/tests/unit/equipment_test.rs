use crate::guards::enter_latch;
use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- Helpers ---

fn mint(contract: &mut Contract, values: &[u64]) -> u64 {
    testing_env!(context(owner()).build());
    contract.equipment_mint(player(), words(values)).unwrap()
}

// --- Minting ---

#[test]
fn derives_attributes_from_three_words() {
    let mut contract = setup();
    let token_id = mint(&mut contract, &[50, 50, 1_000]);
    assert_eq!(token_id, 1);
    assert!(emitted("equipment_minted"));

    let view = contract.equipment_get(token_id).unwrap();
    assert_eq!(view.category, "necklace");
    assert_eq!(view.rarity, "common");
    assert_eq!(view.affixes, [true, true]);
    assert_eq!(view.rarity_multi, 10_000);
    assert_eq!(view.owner_id, Some(player()));
    assert_eq!(view.minter, player());
    assert_eq!(view.equipped_at, 0);
}

#[test]
fn extreme_rolls_reach_the_last_buckets() {
    let mut contract = setup();
    let token_id = mint(&mut contract, &[1_000, 1_000, 499]);
    let view = contract.equipment_get(token_id).unwrap();
    assert_eq!(view.category, "relic");
    assert_eq!(view.rarity, "mythic");
    assert_eq!(view.affixes, [true, false]);
}

#[test]
fn words_are_reduced_modulo_roll_range() {
    let mut contract = setup();
    // 1001 + 250 reduces to 250.
    let token_id = mint(&mut contract, &[1_251, 1_251, 1_501]);
    let view = contract.equipment_get(token_id).unwrap();
    assert_eq!(view.category, "armor");
    assert_eq!(view.rarity, "common");
    assert_eq!(view.affixes, [false, true]);
}

#[test]
fn large_decimal_words_are_accepted() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let big = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
    let token_id = contract
        .equipment_mint(player(), vec![big.into(), big.into(), big.into()])
        .unwrap();
    assert!(contract.equipment_get(token_id).is_some());
}

#[test]
fn wrong_word_count_is_rejected() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let result = contract.equipment_mint(player(), words(&[1, 2]));
    assert_not_fatal(&result);
    assert_eq!(result.unwrap_err(), GameError::InvalidRandomWordsLength(3, 2));
    assert_eq!(contract.equipment_total_supply(), 0);
}

#[test]
fn malformed_word_is_rejected() {
    let mut contract = setup();
    testing_env!(context(owner()).build());
    let err = contract
        .equipment_mint(player(), vec!["1".into(), "two".into(), "3".into()])
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
}

#[test]
fn mint_requires_owner_or_player_peer() {
    let mut contract = setup();
    testing_env!(context(player()).build());
    let err = contract.equipment_mint(player(), words(&[1, 2, 3])).unwrap_err();
    assert!(matches!(err, GameError::Unauthorized(_, _)));
}

#[test]
fn rarity_multi_table() {
    let contract = new_contract();
    let expected = [10_000, 11_000, 13_000, 16_000, 20_000, 25_000];
    for (tier, multi) in expected.iter().enumerate() {
        assert_eq!(contract.equipment_rarity_multi(tier as u8).unwrap(), *multi);
    }
    let err = contract.equipment_rarity_multi(6).unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
}

// --- Equip ---

#[test]
fn equip_and_unequip() {
    let mut contract = setup();
    let token_id = mint(&mut contract, &[0, 0, 0]);

    testing_env!(context(player()).build());
    let metadata = contract.equipment_equip(token_id).unwrap();
    assert_eq!(metadata.equipped_at, START_SECS);
    assert_eq!(contract.equipment_equipped(player()), vec![token_id]);
    assert!(emitted("equipped"));

    testing_env!(context(player()).build());
    let metadata = contract.equipment_unequip(token_id).unwrap();
    assert_eq!(metadata.equipped_at, 0);
    assert!(contract.equipment_equipped(player()).is_empty());
    assert!(emitted("unequipped"));
}

#[test]
fn equip_twice_and_unequip_idle() {
    let mut contract = setup();
    let token_id = mint(&mut contract, &[0, 0, 0]);

    testing_env!(context(player()).build());
    let err = contract.equipment_unequip(token_id).unwrap_err();
    assert_eq!(err, GameError::NotEquipped(token_id));

    contract.equipment_equip(token_id).unwrap();
    let err = contract.equipment_equip(token_id).unwrap_err();
    assert_eq!(err, GameError::AlreadyEquipped(token_id));
}

#[test]
fn equip_requires_token_owner() {
    let mut contract = setup();
    let token_id = mint(&mut contract, &[0, 0, 0]);

    testing_env!(context(other()).build());
    let err = contract.equipment_equip(token_id).unwrap_err();
    assert!(matches!(err, GameError::NotOwned(_, _)));

    let err = contract.equipment_equip(99).unwrap_err();
    assert!(matches!(err, GameError::NotFound(_)));
}

#[test]
fn equipped_token_cannot_transfer() {
    let mut contract = setup();
    let token_id = mint(&mut contract, &[0, 0, 0]);
    testing_env!(context(player()).build());
    contract.equipment_equip(token_id).unwrap();

    testing_env!(context_with_deposit(player(), 1).build());
    let err = contract
        .nft_transfer(TokenCollection::Equipment, other(), token_id, None)
        .unwrap_err();
    assert!(matches!(err, GameError::TransferBlocked(_)));
    assert_eq!(contract.nft_owner_of(TokenCollection::Equipment, token_id), Some(player()));

    testing_env!(context(player()).build());
    contract.equipment_unequip(token_id).unwrap();
    testing_env!(context_with_deposit(player(), 1).build());
    contract
        .nft_transfer(TokenCollection::Equipment, other(), token_id, None)
        .unwrap();
    assert_eq!(contract.nft_owner_of(TokenCollection::Equipment, token_id), Some(other()));
}

#[test]
fn latched_token_cannot_equip() {
    let mut contract = setup();
    let token_id = mint(&mut contract, &[0, 0, 0]);
    testing_env!(context(player()).build());
    enter_latch(TokenCollection::Equipment, token_id).unwrap();
    let err = contract.equipment_equip(token_id).unwrap_err();
    assert!(matches!(err, GameError::Reentrancy(_)));
}
