use super::{Ring, RingAllocator, RingMetadata, RingMintResult, RingStorage};
use crate::config::{RingConstants, WithRelated};
use crate::guards::now_secs;
use crate::storage::{RING_CONSTANTS, RING_STORAGE, Region};
use crate::*;

impl Contract {
    pub(crate) fn ring_mint_by_explorer_as(
        &mut self,
        caller: &AccountId,
        ring_id: u64,
        explorer: &AccountId,
    ) -> Result<Ring, GameError> {
        let constants = Region::<RingConstants>::open(RING_CONSTANTS);
        self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        let mut storage = Region::<RingStorage>::open(RING_STORAGE);
        let ring = RingAllocator::new(&mut storage, &constants)?.mint_by_explorer(
            ring_id,
            explorer,
            now_secs(),
        )?;
        events::emit_ring_minted(caller, ring_id, &ring);
        Ok(ring)
    }

    pub(crate) fn ring_safe_mint_as(
        &mut self,
        caller: &AccountId,
        ring_id: u64,
        explorer: &AccountId,
    ) -> Result<RingMintResult, GameError> {
        let constants = Region::<RingConstants>::open(RING_CONSTANTS);
        self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        let mut storage = Region::<RingStorage>::open(RING_STORAGE);
        // Existing ring: read through `Deref` only, so nothing is written back.
        if let Some(ring) = storage.minted(ring_id) {
            return Ok(RingMintResult {
                ring_id,
                ring: ring.clone(),
                minted: false,
            });
        }
        let result =
            RingAllocator::new(&mut storage, &constants)?.safe_mint(ring_id, explorer, now_secs())?;
        if result.minted {
            events::emit_ring_minted(caller, ring_id, &result.ring);
        }
        Ok(result)
    }

    pub(crate) fn ring_increase_town_count_as(
        &mut self,
        caller: &AccountId,
        ring_id: u64,
        step: u64,
    ) -> Result<Ring, GameError> {
        let constants = Region::<RingConstants>::open(RING_CONSTANTS);
        self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        let mut storage = Region::<RingStorage>::open(RING_STORAGE);
        let (ring, escalated) =
            RingAllocator::new(&mut storage, &constants)?.increase_town_count(ring_id, step)?;
        events::emit_ring_town_count_increased(caller, ring_id, step, &ring, escalated);
        Ok(ring)
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn ring_number(&self, distance_x: u64, distance_y: u64) -> Result<u64, GameError> {
        let constants = Region::<RingConstants>::open(RING_CONSTANTS);
        super::ring_number(&constants, distance_x, distance_y)
    }

    pub fn ring_is_minted(&self, ring_id: u64) -> bool {
        Region::<RingStorage>::open(RING_STORAGE).is_minted(ring_id)
    }

    pub fn ring_metadata(&self, ring_id: u64) -> RingMetadata {
        let constants = Region::<RingConstants>::open(RING_CONSTANTS);
        Region::<RingStorage>::open(RING_STORAGE).metadata(ring_id, &constants)
    }

    pub fn ring_total_supply(&self) -> u64 {
        Region::<RingStorage>::open(RING_STORAGE).minted_count
    }

    #[handle_result]
    pub fn ring_mint_by_explorer(
        &mut self,
        ring_id: u64,
        explorer: AccountId,
    ) -> Result<Ring, GameError> {
        self.ring_mint_by_explorer_as(&env::predecessor_account_id(), ring_id, &explorer)
    }

    #[handle_result]
    pub fn ring_safe_mint(
        &mut self,
        ring_id: u64,
        explorer: AccountId,
    ) -> Result<RingMintResult, GameError> {
        self.ring_safe_mint_as(&env::predecessor_account_id(), ring_id, &explorer)
    }

    #[handle_result]
    pub fn ring_increase_town_count(&mut self, ring_id: u64, step: u64) -> Result<Ring, GameError> {
        self.ring_increase_town_count_as(&env::predecessor_account_id(), ring_id, step)
    }
}
