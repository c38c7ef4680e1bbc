use near_sdk::{AccountId, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;

mod config;
mod events;
mod storage;

mod coin;
mod token;

mod discovery;
mod equipment;
mod ring;
mod town;

mod player;
mod randomness;

mod admin;
mod dispatch;
mod execute;
mod upgrade;

#[cfg(test)]
mod tests;

pub use coin::CoinView;
pub use config::{
    CoinConstants, CoinInit, DiscoveryConstants, DiscoveryInit, EquipmentConstants, ModuleKind,
    PlayerConstants, PlayerInit, RelatedAddressUpdate, RelatedAddresses, RingConstants, RingInit,
    TownConstants, TownInit,
};
pub use constants::*;
pub use discovery::{DiscoverableEntity, DiscoverableKind, DiscoveryMintResult};
pub use dispatch::{ExecuteRequest, FacetRoute};
pub use equipment::{EquipmentMetadata, EquipmentView};
pub use errors::GameError;
pub use player::{Expedition, PlayerView};
pub use randomness::{RandomPurpose, RandomRequest};
pub use ring::{Location, Ring, RingMetadata, RingMintResult};
pub use storage::{Region, RegionKey, RegionState};
pub use token::TokenCollection;
pub use town::{ExploreRewardQuote, Town, TownView};

/// Contract root.
///
/// Only identity lives here. Every game module keeps its state in its own
/// namespaced region (see `storage`), so modules evolve without touching this
/// layout.
#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    pub owner_id: AccountId,
}
