//! Player facet.
//!
//! Runs inside the contract and reaches the other modules through their
//! peer entry points, acting as the contract's own account. Modules grant it
//! the `player` capability by registering that account in their constants.

mod api;
mod facet;
mod fulfill;
mod types;

pub(crate) use types::PlayerStorage;
pub use types::{Expedition, PlayerView};

use near_sdk::{AccountId, env};

/// Caller identity the facet presents to peer-gated entry points.
pub(crate) fn facet_account() -> AccountId {
    env::current_account_id()
}
