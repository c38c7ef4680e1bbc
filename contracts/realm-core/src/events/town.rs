use near_sdk::AccountId;

use super::{EventKind, record};
use crate::ring::Location;
use crate::town::Town;

pub fn emit_town_created(
    author: &AccountId,
    town_id: u64,
    owner_id: &AccountId,
    location: &Location,
) {
    record(EventKind::Town, "town_created", author)
        .field("town_id", town_id)
        .field("owner_id", owner_id)
        .field("location", location)
        .emit();
}

pub fn emit_town_profile_updated(author: &AccountId, town_id: u64, town: &Town) {
    record(EventKind::Town, "town_profile_updated", author)
        .field("town_id", town_id)
        .field("nickname", town.nickname.as_str())
        .field("flag_path", town.flag_path.as_str())
        .emit();
}

pub fn emit_explorer_added(author: &AccountId, town_id: u64, player: &AccountId, slot: u32) {
    record(EventKind::Town, "explorer_added", author)
        .field("town_id", town_id)
        .field("player", player)
        .field("slot", slot)
        .emit();
}

pub fn emit_explorer_removed(author: &AccountId, town_id: u64, player: &AccountId, slot: u32) {
    record(EventKind::Town, "explorer_removed", author)
        .field("town_id", town_id)
        .field("player", player)
        .field("slot", slot)
        .emit();
}
