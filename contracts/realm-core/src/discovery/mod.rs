//! Oblivions and bounties: discoverable entities with an unbeaten-set.

mod api;
mod kind;
mod ledger;
mod types;
mod unbeaten;

pub use kind::DiscoverableKind;
pub(crate) use ledger::{DiscoveryLedger, on_beaten};
pub(crate) use types::DiscoveryStorage;
pub use types::{DiscoverableEntity, DiscoveryMintResult};
pub(crate) use unbeaten::UnbeatenSet;
