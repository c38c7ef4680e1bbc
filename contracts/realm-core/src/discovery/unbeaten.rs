use near_sdk::near;
use near_sdk::store::{LookupMap, Vector};

use crate::GameError;

/// Ids of entities not yet beaten, with an `id -> position` side table.
///
/// Every id in `ids` has its current position in `index_of`; ids outside
/// the array have no entry.
#[near(serializers = [borsh])]
pub(crate) struct UnbeatenSet {
    // Append-only: new fields go at the end.
    ids: Vector<u64>,
    index_of: LookupMap<u64, u32>,
}

impl UnbeatenSet {
    pub(crate) fn new(ids_prefix: Vec<u8>, index_prefix: Vec<u8>) -> Self {
        Self {
            ids: Vector::new(ids_prefix),
            index_of: LookupMap::new(index_prefix),
        }
    }

    pub(crate) fn len(&self) -> u32 {
        self.ids.len()
    }

    pub(crate) fn index_of(&self, id: u64) -> Option<u32> {
        self.index_of.get(&id).copied()
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.index_of.contains_key(&id)
    }

    pub(crate) fn insert(&mut self, id: u64) {
        if self.contains(id) {
            return;
        }
        self.index_of.insert(id, self.ids.len());
        self.ids.push(id);
    }

    /// Swap-and-pop: the last id takes the removed id's position.
    pub(crate) fn remove(&mut self, id: u64) -> Result<(), GameError> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| GameError::Fatal(format!("unbeaten entity {} has no index", id)))?;
        let len = self.ids.len();
        if idx >= len {
            return Err(GameError::Fatal(format!(
                "unbeaten index {} out of bounds ({})",
                idx, len
            )));
        }
        let last = *self
            .ids
            .get(len - 1)
            .ok_or_else(|| GameError::Fatal("unbeaten set tail missing".into()))?;

        self.ids.set(idx, last);
        self.index_of.insert(last, idx);
        self.ids.pop();
        self.index_of.remove(&id);
        Ok(())
    }

    pub(crate) fn page(&self, from_index: u32, limit: u32) -> Vec<u64> {
        let end = from_index.saturating_add(limit).min(self.ids.len());
        (from_index..end)
            .filter_map(|i| self.ids.get(i).copied())
            .collect()
    }
}
