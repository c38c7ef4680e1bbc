use near_sdk::AccountId;

use super::types::{Ring, RingMintResult, RingStorage};
use crate::config::RingConstants;
use crate::constants::ORIGIN_RING_ID;
use crate::{GameError, ModuleKind};

/// `floor(isqrt(dx² + dy²) / distance)`.
pub(crate) fn ring_number(
    constants: &RingConstants,
    distance_x: u64,
    distance_y: u64,
) -> Result<u64, GameError> {
    realm_types::ring_number(distance_x, distance_y, constants.distance)
        .ok_or_else(|| GameError::not_initialized(ModuleKind::Ring))
}

/// Ring minting and town-count bookkeeping over an opened ring region.
pub(crate) struct RingAllocator<'a> {
    storage: &'a mut RingStorage,
    constants: &'a RingConstants,
}

impl<'a> RingAllocator<'a> {
    pub(crate) fn new(
        storage: &'a mut RingStorage,
        constants: &'a RingConstants,
    ) -> Result<Self, GameError> {
        if !constants.is_initialized() {
            return Err(GameError::not_initialized(ModuleKind::Ring));
        }
        Ok(Self { storage, constants })
    }

    pub(crate) fn mint_by_explorer(
        &mut self,
        ring_id: u64,
        explorer: &AccountId,
        now: u64,
    ) -> Result<Ring, GameError> {
        if ring_id > ORIGIN_RING_ID && !self.storage.is_minted(ORIGIN_RING_ID) {
            return Err(GameError::InvalidState(format!(
                "ring {} must be minted before ring {}",
                ORIGIN_RING_ID, ring_id
            )));
        }
        let metadata = self.storage.metadata(ring_id, self.constants);
        if metadata.existed {
            return Err(GameError::AlreadyMinted(format!("ring {}", ring_id)));
        }
        self.persist(ring_id, metadata.ring, explorer, now)
    }

    /// Mints the ring unless it exists; an existing ring comes back untouched
    /// with `minted == false`.
    pub(crate) fn safe_mint(
        &mut self,
        ring_id: u64,
        explorer: &AccountId,
        now: u64,
    ) -> Result<RingMintResult, GameError> {
        if let Some(ring) = self.storage.minted(ring_id) {
            return Ok(RingMintResult {
                ring_id,
                ring: ring.clone(),
                minted: false,
            });
        }
        let ring = self.mint_by_explorer(ring_id, explorer, now)?;
        Ok(RingMintResult {
            ring_id,
            ring,
            minted: true,
        })
    }

    /// Adds `step` towns. Returns the ring and whether this call escalated
    /// its minting ratio.
    pub(crate) fn increase_town_count(
        &mut self,
        ring_id: u64,
        step: u64,
    ) -> Result<(Ring, bool), GameError> {
        if step == 0 {
            return Err(GameError::InvalidStep);
        }
        let over_ratio = self.constants.over_town_minting_ratio;
        let ring = self
            .storage
            .rings
            .get_mut(&ring_id)
            .filter(|ring| ring.is_minted())
            .ok_or_else(|| GameError::NotFound(format!("ring {}", ring_id)))?;

        ring.town_count = ring.town_count.saturating_add(step);
        // One way: once escalated the ratio never returns.
        let escalated = ring.town_count >= ring.town_limit && ring.town_minting_ratio != over_ratio;
        if escalated {
            ring.town_minting_ratio = over_ratio;
        }
        Ok((ring.clone(), escalated))
    }

    fn persist(
        &mut self,
        ring_id: u64,
        mut ring: Ring,
        explorer: &AccountId,
        now: u64,
    ) -> Result<Ring, GameError> {
        if self.storage.is_minted(ring_id) {
            return Err(GameError::Fatal(format!(
                "ring {} reported unminted but is already stored",
                ring_id
            )));
        }
        ring.town_count = 0;
        ring.explorer = Some(explorer.clone());
        ring.explored_at = now;

        self.storage
            .ledger
            .mint(ring_id, explorer)
            .map_err(|_| GameError::Fatal(format!("ring token {} already exists", ring_id)))?;
        self.storage.rings.insert(ring_id, ring.clone());
        self.storage.minted_count += 1;
        Ok(ring)
    }
}
