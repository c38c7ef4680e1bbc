mod record;

mod coin;
mod config;
mod contract;
mod discovery;
mod equipment;
mod player;
mod ring;
mod token;
mod town;

pub use coin::*;
pub use config::*;
pub use contract::*;
pub use discovery::*;
pub use equipment::*;
pub use player::*;
pub use ring::*;
pub use token::*;
pub use town::*;

use near_sdk::serde::Serialize;
use record::record;

pub(crate) const STANDARD: &str = "realm";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

/// The `event` tag of a realm log line; one per module that emits.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(crate = "near_sdk::serde")]
pub(crate) enum EventKind {
    #[serde(rename = "CONTRACT_UPDATE")]
    Contract,
    #[serde(rename = "CONFIG_UPDATE")]
    Config,
    #[serde(rename = "DISPATCH_UPDATE")]
    Dispatch,
    #[serde(rename = "TOKEN_UPDATE")]
    Token,
    #[serde(rename = "COIN_UPDATE")]
    Coin,
    #[serde(rename = "RING_UPDATE")]
    Ring,
    #[serde(rename = "TOWN_UPDATE")]
    Town,
    #[serde(rename = "DISCOVERY_UPDATE")]
    Discovery,
    #[serde(rename = "EQUIPMENT_UPDATE")]
    Equipment,
    #[serde(rename = "RANDOMNESS_UPDATE")]
    Randomness,
    #[serde(rename = "PLAYER_UPDATE")]
    Player,
}
