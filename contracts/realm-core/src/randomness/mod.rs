//! Request/fulfil protocol with the off-chain randomness oracle.
//!
//! A request is recorded and announced with a `random_words_requested`
//! event; the oracle answers through `fulfill_random_words`, which hands the
//! words to the purpose's handler in the player facet.

mod api;
mod types;

pub(crate) use api::{parse_random_words, request_random_words};
pub(crate) use types::RandomnessStorage;
pub use types::{RandomPurpose, RandomRequest};
