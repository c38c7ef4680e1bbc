use near_sdk::AccountId;

use super::{EventKind, record};
use crate::ModuleKind;

pub fn emit_constants_initialized(owner_id: &AccountId, module: ModuleKind, reinitialized: bool) {
    record(EventKind::Config, "constants_initialized", owner_id)
        .field("module", module.as_str())
        .field("reinitialized", reinitialized)
        .emit();
}

pub fn emit_related_address_updated(
    owner_id: &AccountId,
    module: ModuleKind,
    peer: ModuleKind,
    account_id: Option<&AccountId>,
) {
    record(EventKind::Config, "related_address_updated", owner_id)
        .field("module", module.as_str())
        .field("peer", peer.as_str())
        .field_opt("account_id", account_id)
        .emit();
}
