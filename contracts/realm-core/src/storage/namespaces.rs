//! Region registry.
//!
//! IMPORTANT: namespaces are part of the persisted layout. Never rename or
//! reuse one; add new namespaces at the end of `ALL_NAMESPACES`.
//! Storage and constants of a module are separate regions so they can evolve
//! independently.

pub const RING_STORAGE: &str = "realm.storage.ring";
pub const RING_CONSTANTS: &str = "realm.constants.ring";

pub const TOWN_STORAGE: &str = "realm.storage.town";
pub const TOWN_CONSTANTS: &str = "realm.constants.town";

pub const OBLIVION_STORAGE: &str = "realm.storage.oblivion";
pub const OBLIVION_CONSTANTS: &str = "realm.constants.oblivion";

pub const BOUNTY_STORAGE: &str = "realm.storage.bounty";
pub const BOUNTY_CONSTANTS: &str = "realm.constants.bounty";

pub const EQUIPMENT_STORAGE: &str = "realm.storage.equipment";
pub const EQUIPMENT_CONSTANTS: &str = "realm.constants.equipment";

pub const COIN_STORAGE: &str = "realm.storage.coin";
pub const COIN_CONSTANTS: &str = "realm.constants.coin";

pub const PLAYER_STORAGE: &str = "realm.storage.player";
pub const PLAYER_CONSTANTS: &str = "realm.constants.player";

pub const RANDOMNESS_STORAGE: &str = "realm.storage.randomness";
pub const DISPATCH_STORAGE: &str = "realm.storage.dispatch";
pub const GUARD_STORAGE: &str = "realm.storage.guard";

pub const ALL_NAMESPACES: &[&str] = &[
    RING_STORAGE,
    RING_CONSTANTS,
    TOWN_STORAGE,
    TOWN_CONSTANTS,
    OBLIVION_STORAGE,
    OBLIVION_CONSTANTS,
    BOUNTY_STORAGE,
    BOUNTY_CONSTANTS,
    EQUIPMENT_STORAGE,
    EQUIPMENT_CONSTANTS,
    COIN_STORAGE,
    COIN_CONSTANTS,
    PLAYER_STORAGE,
    PLAYER_CONSTANTS,
    RANDOMNESS_STORAGE,
    DISPATCH_STORAGE,
    GUARD_STORAGE,
];
