//! In-game fungible coin: genesis supply plus exploration rewards.

mod api;
mod ledger;

pub(crate) use ledger::CoinStorage;
pub use ledger::CoinView;
