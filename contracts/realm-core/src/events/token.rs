use near_sdk::AccountId;

use super::{EventKind, record};
use crate::token::TokenCollection;

pub fn emit_nft_transfer(
    collection: TokenCollection,
    old_owner_id: &AccountId,
    new_owner_id: &AccountId,
    token_id: u64,
    memo: Option<&str>,
) {
    record(EventKind::Token, "nft_transfer", old_owner_id)
        .field("collection", collection.as_str())
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .field("token_id", token_id)
        .field_opt("memo", memo)
        .emit();
}
