use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- Init gating ---

#[test]
fn init_requires_one_yocto() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let err = contract.ring_init(ring_init_args()).unwrap_err();
    assert!(matches!(err, GameError::InsufficientDeposit(_)));
}

#[test]
fn init_requires_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(player(), 1).build());
    let err = contract.town_init(town_init_args()).unwrap_err();
    assert!(matches!(err, GameError::Unauthorized(_, _)));
    assert_eq!(contract.get_town_constants().initialized_at, 0);
}

#[test]
fn ring_init_writes_every_value() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.ring_init(ring_init_args()).unwrap();

    let constants = contract.get_ring_constants();
    assert_eq!(constants.distance, DISTANCE);
    assert_eq!(constants.origin_town_limit, ORIGIN_TOWN_LIMIT);
    assert_eq!(constants.town_minting_ratio, 5_000);
    assert_eq!(constants.over_town_minting_ratio, 1_000);
    assert_eq!(constants.initialized_at, START_SECS);
    assert!(emitted("constants_initialized"));
}

#[test]
fn reinit_overwrites_and_is_reported() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.ring_init(ring_init_args()).unwrap();

    testing_env!(context_with_deposit(owner(), 1).build());
    let mut args = ring_init_args();
    args.distance = 1_000;
    contract.ring_init(args).unwrap();

    assert_eq!(contract.get_ring_constants().distance, 1_000);
    let events = events();
    assert_eq!(events[0]["data"][0]["reinitialized"], true);
    assert_eq!(events[0]["data"][0]["module"], "ring");
}

#[test]
fn ring_init_rejects_zero_distance() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let mut args = ring_init_args();
    args.distance = 0;
    let err = contract.ring_init(args).unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
}

#[test]
fn ring_init_rejects_ratio_above_base() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let mut args = ring_init_args();
    args.bounty_minting_ratio = RATIO_BASE + 1;
    let err = contract.ring_init(args).unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
}

#[test]
fn town_init_validation() {
    let mut contract = new_contract();
    let cases = [
        TownInit {
            explorer_fee_ratio: 6_000,
            system_fee_ratio: 5_000,
            ..town_init_args()
        },
        TownInit {
            explorer_slot: 0,
            ..town_init_args()
        },
        TownInit {
            explorer_slot: MAX_EXPLORER_SLOTS + 1,
            ..town_init_args()
        },
        TownInit {
            min_explore_time: 604_800,
            ..town_init_args()
        },
    ];
    for args in cases {
        testing_env!(context_with_deposit(owner(), 1).build());
        let err = contract.town_init(args).unwrap_err();
        assert!(matches!(err, GameError::InvalidInput(_)));
    }
    assert_eq!(contract.get_town_constants().initialized_at, 0);
}

#[test]
fn town_init_stores_reward_cap() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.town_init(town_init_args()).unwrap();
    let constants = contract.get_town_constants();
    assert_eq!(constants.max_explore_rewards, U128(4_000 * ONE_TOKEN));
    assert_eq!(constants.explorer_slot, 2);
}

#[test]
fn discovery_init_is_per_kind() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .discovery_init(DiscoverableKind::Bounty, DiscoveryInit { valid_delay: 60 })
        .unwrap();

    assert_eq!(contract.get_discovery_constants(DiscoverableKind::Bounty).valid_delay, 60);
    let oblivion = contract.get_discovery_constants(DiscoverableKind::Oblivion);
    assert_eq!(oblivion.initialized_at, 0);
    assert_eq!(events()[0]["data"][0]["module"], "bounty");
}

#[test]
fn coin_init_rejects_bad_symbol() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract
        .coin_init(CoinInit {
            symbol: String::new(),
            decimals: 18,
        })
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
}

#[test]
fn player_init_rejects_zero_base_power() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract
        .player_init(PlayerInit {
            base_attack_power: 0,
            equipment_attack_power: 10,
        })
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
}

// --- Related addresses ---

#[test]
fn new_registers_facet_as_player_peer() {
    let contract = new_contract();
    for module in [
        ModuleKind::Ring,
        ModuleKind::Town,
        ModuleKind::Oblivion,
        ModuleKind::Bounty,
        ModuleKind::Equipment,
        ModuleKind::Coin,
    ] {
        let related = contract.get_related_addresses(module).unwrap();
        assert_eq!(related.get(ModuleKind::Player), Some(&realm()), "{:?}", module);
    }
}

#[test]
fn update_related_address_sets_and_clears() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let related = contract
        .update_related_address(
            ModuleKind::Town,
            vec![RelatedAddressUpdate {
                peer: ModuleKind::Player,
                account_id: Some(other()),
            }],
        )
        .unwrap();
    assert!(related.is_peer(ModuleKind::Player, &other()));
    assert!(!related.is_peer(ModuleKind::Player, &realm()));
    assert!(emitted("related_address_updated"));

    testing_env!(context_with_deposit(owner(), 1).build());
    let related = contract
        .update_related_address(
            ModuleKind::Town,
            vec![RelatedAddressUpdate {
                peer: ModuleKind::Player,
                account_id: None,
            }],
        )
        .unwrap();
    assert_eq!(related.get(ModuleKind::Player), None);
}

#[test]
fn update_related_address_requires_owner() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(player(), 1).build());
    let err = contract
        .update_related_address(
            ModuleKind::Coin,
            vec![RelatedAddressUpdate {
                peer: ModuleKind::Player,
                account_id: Some(player()),
            }],
        )
        .unwrap_err();
    assert!(matches!(err, GameError::Unauthorized(_, _)));
}

#[test]
fn oracle_registry_lives_with_player_constants() {
    let contract = setup();
    let related = contract.get_related_addresses(ModuleKind::Player).unwrap();
    assert_eq!(related.get(ModuleKind::Oracle), Some(&oracle()));
    assert_eq!(contract.get_player_constants().related, related);
    // The oracle is a peer only; it has no registry of its own.
    let err = contract.get_related_addresses(ModuleKind::Oracle).unwrap_err();
    assert!(matches!(err, GameError::InvalidInput(_)));
}

#[test]
fn constants_survive_reinit_of_peers() {
    let mut contract = setup();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract.ring_init(ring_init_args()).unwrap();
    // Re-initialising values leaves the peer registry alone.
    let related = contract.get_related_addresses(ModuleKind::Ring).unwrap();
    assert_eq!(related.get(ModuleKind::Player), Some(&realm()));
}
