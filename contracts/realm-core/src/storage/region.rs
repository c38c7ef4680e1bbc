use std::ops::{Deref, DerefMut};

use borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::{IntoStorageKey, env};

/// Storage address of one region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionKey {
    namespace: &'static str,
    bytes: Vec<u8>,
}

impl RegionKey {
    pub fn derive(namespace: &'static str) -> Self {
        Self {
            namespace,
            bytes: env::sha256(namespace.as_bytes()),
        }
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Prefix for a keyed collection owned by this region.
    pub fn child(&self, key: impl IntoStorageKey) -> Vec<u8> {
        super::prefixed(&self.bytes, key)
    }
}

/// A record that can live in a region.
///
/// Append-only: once a record type has been deployed, new fields may only be
/// appended. Borsh layout is positional; reordering, removing or retyping a
/// field corrupts every existing region of that type.
pub trait RegionState: BorshSerialize + BorshDeserialize {
    /// Zero-valued record returned by the first read of an unwritten region.
    fn fresh(key: &RegionKey) -> Self;
}

/// Loaded handle to a region record.
///
/// Mutable access marks the handle dirty; a dirty handle writes the record
/// back when flushed or dropped. Never hold two handles to the same region at
/// once: the later drop would overwrite the earlier one's writes.
pub struct Region<T: RegionState> {
    key: RegionKey,
    state: T,
    dirty: bool,
}

impl<T: RegionState> Region<T> {
    pub fn open(namespace: &'static str) -> Self {
        let key = RegionKey::derive(namespace);
        let state = match env::storage_read(key.as_bytes()) {
            Some(bytes) => T::try_from_slice(&bytes).unwrap_or_else(|_| {
                env::panic_str(&format!("Fatal: region {} failed to decode", namespace))
            }),
            None => T::fresh(&key),
        };
        Self {
            key,
            state,
            dirty: false,
        }
    }

    /// Whether the region has ever been written.
    pub fn exists(namespace: &'static str) -> bool {
        env::storage_has_key(RegionKey::derive(namespace).as_bytes())
    }

    pub fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        let bytes = borsh::to_vec(&self.state).unwrap_or_else(|_| {
            env::panic_str(&format!(
                "Fatal: region {} failed to encode",
                self.key.namespace()
            ))
        });
        env::storage_write(self.key.as_bytes(), &bytes);
        self.dirty = false;
    }
}

impl<T: RegionState> Deref for Region<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.state
    }
}

impl<T: RegionState> DerefMut for Region<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.dirty = true;
        &mut self.state
    }
}

impl<T: RegionState> Drop for Region<T> {
    fn drop(&mut self) {
        self.flush();
    }
}
