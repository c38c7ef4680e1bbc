use near_sdk::AccountId;

use super::{EventKind, record};
use crate::equipment::EquipmentMetadata;

pub fn emit_equipment_minted(
    author: &AccountId,
    token_id: u64,
    owner_id: &AccountId,
    metadata: &EquipmentMetadata,
) {
    record(EventKind::Equipment, "equipment_minted", author)
        .field("token_id", token_id)
        .field("owner_id", owner_id)
        .field("category", u32::from(metadata.category))
        .field("rarity", u32::from(metadata.rarity))
        .field("affix_0", metadata.affixes[0])
        .field("affix_1", metadata.affixes[1])
        .emit();
}

pub fn emit_equipment_equipped(owner_id: &AccountId, token_id: u64, equipped: bool) {
    let operation = if equipped { "equipped" } else { "unequipped" };
    record(EventKind::Equipment, operation, owner_id)
        .field("token_id", token_id)
        .emit();
}
