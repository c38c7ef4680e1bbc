use near_sdk::AccountId;
use realm_types::RewardSplit;

use super::{EventKind, record};
use crate::player::Expedition;
use crate::randomness::RandomRequest;
use crate::ring::Location;

pub fn emit_random_words_requested(request_id: u64, request: &RandomRequest) {
    record(EventKind::Randomness, "random_words_requested", &request.requester)
        .field("request_id", request_id)
        .field("num_words", request.num_words)
        .field(
            "purpose",
            &request.purpose,
        )
        .emit();
}

pub fn emit_random_words_fulfilled(author: &AccountId, request_id: u64, request: &RandomRequest) {
    record(EventKind::Randomness, "random_words_fulfilled", author)
        .field("request_id", request_id)
        .field("requester", &request.requester)
        .emit();
}

pub fn emit_player_explored(
    player: &AccountId,
    location: &Location,
    ring_id: u64,
    ring_minted: bool,
    request_id: u64,
) {
    record(EventKind::Player, "explored", player)
        .field("location", location)
        .field("ring_id", ring_id)
        .field("ring_minted", ring_minted)
        .field("request_id", request_id)
        .emit();
}

pub fn emit_expedition_started(player: &AccountId, expedition: &Expedition, slot: u32) {
    record(EventKind::Player, "expedition_started", player)
        .field("town_id", expedition.town_id)
        .field("slot", slot)
        .field("started_at", expedition.started_at)
        .emit();
}

pub fn emit_expedition_ended(
    player: &AccountId,
    expedition: &Expedition,
    spend_time: u64,
    attack_power: u64,
    split: &RewardSplit,
) {
    record(EventKind::Player, "expedition_ended", player)
        .field("town_id", expedition.town_id)
        .field("spend_time", spend_time)
        .field("attack_power", attack_power)
        .field("player_reward", split.player)
        .field("explorer_fee", split.explorer_fee)
        .field("system_fee", split.system_fee)
        .emit();
}
