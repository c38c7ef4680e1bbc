use near_sdk::AccountId;

use super::{EventKind, record};
use crate::discovery::DiscoverableEntity;

pub fn emit_entity_discovered(author: &AccountId, entity: &DiscoverableEntity) {
    record(EventKind::Discovery, "entity_discovered", author)
        .field("kind", entity.kind.as_str())
        .field("id", entity.id)
        .field("discoverer", &entity.owner_or_discoverer)
        .field("coords", &entity.coords)
        .field("discoverer_reward_ratio", entity.discoverer_reward_ratio)
        .field("valid_at", entity.valid_at)
        .emit();
}

pub fn emit_entity_beaten(author: &AccountId, entity: &DiscoverableEntity) {
    record(EventKind::Discovery, "entity_beaten", author)
        .field("kind", entity.kind.as_str())
        .field("id", entity.id)
        .field_opt("beaten_by", entity.beaten_by.as_ref())
        .field("beaten_at", entity.beaten_at)
        .emit();
}
