use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, near};

use crate::GameError;
use crate::storage::{RegionKey, RegionState, StorageKey};

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct CoinView {
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U128,
    pub genesis_minted: bool,
}

#[near(serializers = [borsh])]
pub(crate) struct CoinStorage {
    // Append-only: new fields go at the end.
    pub(crate) total_supply: u128,
    pub(crate) genesis_minted: bool,
    pub(crate) balances: LookupMap<AccountId, u128>,
}

impl RegionState for CoinStorage {
    fn fresh(key: &RegionKey) -> Self {
        Self {
            total_supply: 0,
            genesis_minted: false,
            balances: LookupMap::new(key.child(StorageKey::Balances)),
        }
    }
}

impl CoinStorage {
    pub(crate) fn balance_of(&self, account_id: &AccountId) -> u128 {
        self.balances.get(account_id).copied().unwrap_or(0)
    }

    pub(crate) fn mint(&mut self, receiver_id: &AccountId, amount: u128) -> Result<(), GameError> {
        let total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or_else(|| GameError::InvalidState("coin supply overflow".into()))?;
        let balance = self.balance_of(receiver_id) + amount;
        self.balances.insert(receiver_id.clone(), balance);
        self.total_supply = total_supply;
        Ok(())
    }

    pub(crate) fn transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        amount: u128,
    ) -> Result<(), GameError> {
        if amount == 0 {
            return Err(GameError::InvalidInput("amount must be positive".into()));
        }
        if sender_id == receiver_id {
            return Err(GameError::InvalidInput(
                "Sender and receiver must differ".into(),
            ));
        }
        let sender_balance = self.balance_of(sender_id);
        if sender_balance < amount {
            return Err(GameError::InvalidState(format!(
                "insufficient balance: {} < {}",
                sender_balance, amount
            )));
        }
        self.balances
            .insert(sender_id.clone(), sender_balance - amount);
        let receiver_balance = self.balance_of(receiver_id) + amount;
        self.balances.insert(receiver_id.clone(), receiver_balance);
        Ok(())
    }
}
