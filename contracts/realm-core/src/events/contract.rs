use near_sdk::AccountId;

use super::{EventKind, record};

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    record(EventKind::Contract, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    record(EventKind::Contract, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_route_updated(
    owner_id: &AccountId,
    selector: &str,
    previous: Option<&str>,
    handler: Option<&str>,
) {
    let operation = if handler.is_some() { "route_set" } else { "route_removed" };
    record(EventKind::Dispatch, operation, owner_id)
        .field("selector", selector)
        .field_opt("previous_handler", previous)
        .field_opt("handler", handler)
        .emit();
}
