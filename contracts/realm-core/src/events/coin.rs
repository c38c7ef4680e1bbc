use near_sdk::AccountId;

use super::{EventKind, record};

pub fn emit_coin_minted(author: &AccountId, receiver_id: &AccountId, amount: u128, genesis: bool) {
    record(EventKind::Coin, "coin_mint", author)
        .field("receiver_id", receiver_id)
        .field("amount", amount)
        .field("genesis", genesis)
        .emit();
}

pub fn emit_coin_transfer(sender_id: &AccountId, receiver_id: &AccountId, amount: u128) {
    record(EventKind::Coin, "coin_transfer", sender_id)
        .field("receiver_id", receiver_id)
        .field("amount", amount)
        .emit();
}
