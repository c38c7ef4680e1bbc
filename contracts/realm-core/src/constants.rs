use near_sdk::NearToken;

pub use realm_types::RATIO_BASE;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

// Token amounts are scaled by 10^18.
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

// Hard-coded per entity kind; not sourced from constants.
pub const BOUNTY_DISCOVERER_REWARD_RATIO: u32 = 2_500;
pub const OBLIVION_DISCOVERER_REWARD_RATIO: u32 = 2_000;

// Ring 1 anchors the virtual town-limit formula of every outer ring.
pub const ORIGIN_RING_ID: u64 = 1;

pub const DEFAULT_TOWN_LEVEL: u32 = 1;
pub const TOWN_NICKNAME_DIGITS: usize = 6;
pub const MAX_TOWN_NICKNAME_LEN: usize = 32;
pub const MAX_FLAG_PATH_LEN: usize = 256;
pub const MAX_EXPLORER_SLOTS: u32 = 64;

pub const DISCOVERY_RANDOM_WORDS: u32 = 3;
pub const FORGE_RANDOM_WORDS: u32 = 3;
pub const MAX_RANDOM_WORDS: u32 = 16;

// Upper bound on equipped items summed into a player's attack power.
pub const MAX_EQUIPMENT_SCAN: usize = 100;

pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

pub const DEFAULT_CALLBACK_TGAS: u64 = 50;
pub const GAS_MIGRATE_TGAS: u64 = 200;
