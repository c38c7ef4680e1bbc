use near_sdk::near;
use near_sdk::store::LookupSet;

use crate::config::RelatedAddresses;
use crate::storage::{GUARD_STORAGE, Region, RegionKey, RegionState, StorageKey};
use crate::token::TokenCollection;
use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), GameError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(GameError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

/// Block time in whole seconds; every stored timestamp uses this unit.
pub(crate) fn now_secs() -> u64 {
    env::block_timestamp() / NANOS_PER_SEC
}

impl Contract {
    pub(crate) fn check_owner(&self, caller: &AccountId) -> Result<(), GameError> {
        if caller != &self.owner_id {
            return Err(GameError::only_owner(caller));
        }
        Ok(())
    }

    /// Owner, or the account registered as `peer` in the module's constants.
    pub(crate) fn check_owner_or_peer(
        &self,
        caller: &AccountId,
        related: &RelatedAddresses,
        peer: ModuleKind,
    ) -> Result<(), GameError> {
        if caller == &self.owner_id || related.is_peer(peer, caller) {
            return Ok(());
        }
        Err(GameError::owner_or_peer(peer, caller))
    }
}

// --- Transfer latch ---

#[near(serializers = [borsh])]
pub(crate) struct GuardStorage {
    // Append-only: new fields go at the end.
    latched: LookupSet<String>,
}

impl RegionState for GuardStorage {
    fn fresh(key: &RegionKey) -> Self {
        Self {
            latched: LookupSet::new(key.child(StorageKey::Latched)),
        }
    }
}

fn latch_key(collection: TokenCollection, token_id: u64) -> String {
    format!("{}:{}", collection.as_str(), token_id)
}

/// Fails while the token is held by an unresolved `nft_transfer_call`.
pub(crate) fn check_not_latched(
    collection: TokenCollection,
    token_id: u64,
) -> Result<(), GameError> {
    let guard = Region::<GuardStorage>::open(GUARD_STORAGE);
    let key = latch_key(collection, token_id);
    if guard.latched.contains(&key) {
        return Err(GameError::Reentrancy(format!(
            "{} is locked by a pending transfer call",
            key
        )));
    }
    Ok(())
}

pub(crate) fn enter_latch(collection: TokenCollection, token_id: u64) -> Result<(), GameError> {
    let mut guard = Region::<GuardStorage>::open(GUARD_STORAGE);
    let key = latch_key(collection, token_id);
    if !guard.latched.insert(key.clone()) {
        return Err(GameError::Reentrancy(format!(
            "{} is locked by a pending transfer call",
            key
        )));
    }
    Ok(())
}

pub(crate) fn exit_latch(collection: TokenCollection, token_id: u64) {
    let mut guard = Region::<GuardStorage>::open(GUARD_STORAGE);
    guard.latched.remove(&latch_key(collection, token_id));
}
