mod api;
mod engine;
mod types;

pub(crate) use engine::{TownEngine, explore_rewards};
pub(crate) use types::TownStorage;
pub use types::{ExploreRewardQuote, Town, TownView};
