//! Namespaced region storage.
//!
//! Every module keeps its persistent record in a region addressed by
//! `sha256(namespace)`. Keyed collections owned by a region live under child
//! prefixes `region_key ++ tag`, so nothing a module writes can alias another
//! module's data.

mod keys;
mod namespaces;
mod region;

pub use keys::StorageKey;
pub use namespaces::*;
pub use region::{Region, RegionKey, RegionState};

use near_sdk::IntoStorageKey;

/// `prefix ++ key.into_storage_key()`.
pub(crate) fn prefixed(prefix: &[u8], key: impl IntoStorageKey) -> Vec<u8> {
    let tail = key.into_storage_key();
    let mut out = Vec::with_capacity(prefix.len() + tail.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(&tail);
    out
}

/// Implements [`RegionState`] for records whose fresh state is `Default`.
macro_rules! default_region_state {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::storage::RegionState for $ty {
                fn fresh(_key: &$crate::storage::RegionKey) -> Self {
                    Self::default()
                }
            }
        )+
    };
}
pub(crate) use default_region_state;
