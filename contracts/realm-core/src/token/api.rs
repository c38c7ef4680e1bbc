use near_sdk::json_types::U128;
use near_sdk::{Gas, Promise, ext_contract};

use super::{TokenCollection, read_holder, write_holder};
use crate::guards::{check_not_latched, check_one_yocto, enter_latch, exit_latch};
use crate::*;

#[ext_contract(ext_token_receiver)]
pub trait RealmTokenReceiver {
    /// Returns `true` to hand the token back to `previous_owner_id`.
    fn nft_on_transfer(
        &mut self,
        sender_id: AccountId,
        previous_owner_id: AccountId,
        collection: TokenCollection,
        token_id: u64,
        msg: String,
    ) -> bool;
}

#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn nft_resolve_transfer(
        &mut self,
        collection: TokenCollection,
        previous_owner_id: AccountId,
        receiver_id: AccountId,
        token_id: u64,
    ) -> bool;
}

#[near]
impl Contract {
    pub fn nft_owner_of(&self, collection: TokenCollection, token_id: u64) -> Option<AccountId> {
        read_holder(collection, |holder| holder.ledger().owner_of(token_id).cloned())
    }

    pub fn nft_total_supply(&self, collection: TokenCollection) -> U128 {
        U128(read_holder(collection, |holder| holder.ledger().total_supply()) as u128)
    }

    pub fn nft_supply_for_owner(&self, collection: TokenCollection, account_id: AccountId) -> U128 {
        let supply =
            read_holder(collection, |holder| holder.ledger().supply_for_owner(&account_id));
        U128(supply as u128)
    }

    pub fn nft_tokens_for_owner(
        &self,
        collection: TokenCollection,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<u64> {
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
        read_holder(collection, |holder| {
            holder.ledger().tokens_for_owner(&account_id, start, limit)
        })
    }

    pub fn nft_token_by_index(&self, collection: TokenCollection, index: U128) -> Option<u64> {
        let index = u64::try_from(index.0).ok()?;
        read_holder(collection, |holder| holder.ledger().token_by_index(index))
    }

    #[payable]
    #[handle_result]
    pub fn nft_transfer(
        &mut self,
        collection: TokenCollection,
        receiver_id: AccountId,
        token_id: u64,
        memo: Option<String>,
    ) -> Result<(), GameError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();
        self.internal_nft_transfer(
            collection,
            &sender_id,
            &receiver_id,
            token_id,
            memo.as_deref(),
        )?;
        Ok(())
    }

    /// Transfers first, then notifies the receiver. The token stays latched
    /// until `nft_resolve_transfer` runs, so it cannot move, equip or
    /// unequip while the receiver holds the call.
    #[payable]
    #[handle_result]
    pub fn nft_transfer_call(
        &mut self,
        collection: TokenCollection,
        receiver_id: AccountId,
        token_id: u64,
        memo: Option<String>,
        msg: String,
    ) -> Result<Promise, GameError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();
        let previous_owner_id = self.internal_nft_transfer(
            collection,
            &sender_id,
            &receiver_id,
            token_id,
            memo.as_deref(),
        )?;
        enter_latch(collection, token_id)?;

        let callback_gas = Gas::from_tgas(DEFAULT_CALLBACK_TGAS);
        Ok(ext_token_receiver::ext(receiver_id.clone())
            .with_static_gas(callback_gas)
            .nft_on_transfer(
                sender_id,
                previous_owner_id.clone(),
                collection,
                token_id,
                msg,
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(callback_gas)
                    .nft_resolve_transfer(collection, previous_owner_id, receiver_id, token_id),
            ))
    }

    /// Returns whether the transfer stands.
    #[private]
    pub fn nft_resolve_transfer(
        &mut self,
        collection: TokenCollection,
        previous_owner_id: AccountId,
        receiver_id: AccountId,
        token_id: u64,
    ) -> bool {
        exit_latch(collection, token_id);

        let should_revert = match env::promise_result_checked(0, 16) {
            Ok(value) => serde_json::from_slice::<bool>(&value).unwrap_or(false),
            Err(_) => false,
        };
        if !should_revert {
            return true;
        }

        let reverted = write_holder(collection, |holder| {
            // Ownership may have moved again while the receiver held the call.
            if holder.ledger().owner_of(token_id) != Some(&receiver_id) {
                return false;
            }
            holder
                .ledger_mut()
                .move_token(token_id, &receiver_id, &previous_owner_id);
            true
        });
        if !reverted {
            env::log_str(&format!(
                "Cannot revert transfer: {} {} no longer owned by {}",
                collection.as_str(),
                token_id,
                receiver_id
            ));
            return true;
        }

        events::emit_nft_transfer(
            collection,
            &receiver_id,
            &previous_owner_id,
            token_id,
            Some("transfer reverted"),
        );
        false
    }
}

impl Contract {
    pub(crate) fn internal_nft_transfer(
        &mut self,
        collection: TokenCollection,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: u64,
        memo: Option<&str>,
    ) -> Result<AccountId, GameError> {
        check_not_latched(collection, token_id)?;
        let previous_owner_id = write_holder(collection, |holder| {
            holder.check_transferable(token_id)?;
            holder.ledger_mut().transfer(token_id, sender_id, receiver_id)
        })?;
        events::emit_nft_transfer(collection, &previous_owner_id, receiver_id, token_id, memo);
        Ok(previous_owner_id)
    }
}
