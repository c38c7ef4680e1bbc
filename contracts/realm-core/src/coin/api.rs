use near_sdk::json_types::U128;

use super::{CoinStorage, CoinView};
use crate::config::{CoinConstants, WithRelated};
use crate::guards::check_one_yocto;
use crate::storage::{COIN_CONSTANTS, COIN_STORAGE, Region};
use crate::*;

impl Contract {
    /// Zero amounts are skipped without an event.
    pub(crate) fn coin_mint_as(
        &mut self,
        caller: &AccountId,
        receiver_id: &AccountId,
        amount: u128,
    ) -> Result<(), GameError> {
        {
            let constants = Region::<CoinConstants>::open(COIN_CONSTANTS);
            self.check_owner_or_peer(caller, constants.related(), ModuleKind::Player)?;
        }
        if amount == 0 {
            return Ok(());
        }
        Region::<CoinStorage>::open(COIN_STORAGE).mint(receiver_id, amount)?;
        events::emit_coin_minted(caller, receiver_id, amount, false);
        Ok(())
    }
}

#[near]
impl Contract {
    /// One-shot owner mint of the initial supply.
    #[payable]
    #[handle_result]
    pub fn coin_mint_genesis(
        &mut self,
        receiver_id: AccountId,
        amount: U128,
    ) -> Result<(), GameError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_owner(&caller)?;
        let mut storage = Region::<CoinStorage>::open(COIN_STORAGE);
        if storage.genesis_minted {
            return Err(GameError::AlreadyMinted("coin genesis supply".into()));
        }
        storage.mint(&receiver_id, amount.0)?;
        storage.genesis_minted = true;
        events::emit_coin_minted(&caller, &receiver_id, amount.0, true);
        Ok(())
    }

    #[handle_result]
    pub fn coin_mint(&mut self, receiver_id: AccountId, amount: U128) -> Result<(), GameError> {
        self.coin_mint_as(&env::predecessor_account_id(), &receiver_id, amount.0)
    }

    #[payable]
    #[handle_result]
    pub fn coin_transfer(&mut self, receiver_id: AccountId, amount: U128) -> Result<(), GameError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();
        Region::<CoinStorage>::open(COIN_STORAGE).transfer(&sender_id, &receiver_id, amount.0)?;
        events::emit_coin_transfer(&sender_id, &receiver_id, amount.0);
        Ok(())
    }

    pub fn coin_balance_of(&self, account_id: AccountId) -> U128 {
        U128(Region::<CoinStorage>::open(COIN_STORAGE).balance_of(&account_id))
    }

    pub fn coin_total_supply(&self) -> U128 {
        U128(Region::<CoinStorage>::open(COIN_STORAGE).total_supply)
    }

    pub fn coin_metadata(&self) -> CoinView {
        let constants = Region::<CoinConstants>::open(COIN_CONSTANTS);
        let storage = Region::<CoinStorage>::open(COIN_STORAGE);
        CoinView {
            symbol: constants.symbol.clone(),
            decimals: constants.decimals,
            total_supply: U128(storage.total_supply),
            genesis_minted: storage.genesis_minted,
        }
    }
}
