mod allocator;
mod api;
mod types;

pub(crate) use allocator::{RingAllocator, ring_number};
pub(crate) use types::RingStorage;
pub use types::{Location, Ring, RingMetadata, RingMintResult};
