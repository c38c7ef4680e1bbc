use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn new_sets_owner_and_version() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), &owner());
    assert_eq!(contract.get_version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn new_leaves_modules_uninitialised() {
    let contract = new_contract();
    assert_eq!(contract.get_ring_constants().initialized_at, 0);
    assert_eq!(contract.get_town_constants().initialized_at, 0);
    assert_eq!(contract.get_player_constants().initialized_at, 0);
}

#[test]
fn transfer_ownership() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.transfer_ownership(player()).unwrap();
    assert_eq!(contract.get_owner(), &player());
    assert!(emitted("owner_transferred"));

    // Old owner lost admin rights.
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.ring_init(ring_init_args()).unwrap_err();
    assert!(matches!(err, GameError::Unauthorized(_, _)));
}

#[test]
fn transfer_ownership_requires_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(player(), 1).build());
    let err = contract.transfer_ownership(player()).unwrap_err();
    assert!(matches!(err, GameError::Unauthorized(_, _)));
}

#[test]
fn transfer_ownership_to_self_is_rejected() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.transfer_ownership(owner()).unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
}

#[test]
fn update_contract_requires_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(player(), 1).build());
    let Err(err) = contract.update_contract() else {
        panic!("non-owner upgrade accepted");
    };
    assert!(matches!(err, GameError::Unauthorized(_, _)));
}

#[test]
fn update_contract_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let Err(err) = contract.update_contract() else {
        panic!("upgrade without deposit accepted");
    };
    assert!(matches!(err, GameError::InsufficientDeposit(_)));
}
