use near_sdk::AccountId;

use super::{EventKind, record};
use crate::ring::Ring;

pub fn emit_ring_minted(author: &AccountId, ring_id: u64, ring: &Ring) {
    record(EventKind::Ring, "ring_minted", author)
        .field("ring_id", ring_id)
        .field_opt("explorer", ring.explorer.as_ref())
        .field("town_limit", ring.town_limit)
        .field("town_minting_ratio", ring.town_minting_ratio)
        .field("explored_at", ring.explored_at)
        .emit();
}

pub fn emit_ring_town_count_increased(
    author: &AccountId,
    ring_id: u64,
    step: u64,
    ring: &Ring,
    escalated: bool,
) {
    record(EventKind::Ring, "town_count_increased", author)
        .field("ring_id", ring_id)
        .field("step", step)
        .field("town_count", ring.town_count)
        .field("town_limit", ring.town_limit)
        .field("town_minting_ratio", ring.town_minting_ratio)
        .field("escalated", escalated)
        .emit();
}
