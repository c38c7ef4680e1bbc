use near_sdk::store::{IterableSet, LookupMap, Vector};
use near_sdk::{AccountId, near};

use crate::GameError;
use crate::guards::hash_account_id;
use crate::storage::{StorageKey, prefixed};

/// Ownership bookkeeping for one collection. Tokens are never burned, so
/// `tokens` doubles as the by-index enumeration.
#[near(serializers = [borsh])]
pub(crate) struct NftLedger {
    // Append-only: new fields go at the end.
    prefix: Vec<u8>,
    owners: LookupMap<u64, AccountId>,
    tokens: Vector<u64>,
    tokens_per_owner: LookupMap<AccountId, IterableSet<u64>>,
}

impl NftLedger {
    pub(crate) fn new(prefix: Vec<u8>) -> Self {
        Self {
            owners: LookupMap::new(prefixed(&prefix, StorageKey::LedgerOwners)),
            tokens: Vector::new(prefixed(&prefix, StorageKey::LedgerTokens)),
            tokens_per_owner: LookupMap::new(prefixed(&prefix, StorageKey::LedgerTokensPerOwner)),
            prefix,
        }
    }

    pub(crate) fn mint(&mut self, token_id: u64, owner_id: &AccountId) -> Result<(), GameError> {
        if self.owners.contains_key(&token_id) {
            return Err(GameError::AlreadyMinted(format!("token {}", token_id)));
        }
        self.owners.insert(token_id, owner_id.clone());
        self.tokens.push(token_id);
        self.add_to_owner(owner_id, token_id);
        Ok(())
    }

    pub(crate) fn owner_of(&self, token_id: u64) -> Option<&AccountId> {
        self.owners.get(&token_id)
    }

    pub(crate) fn check_owner(
        &self,
        token_id: u64,
        account_id: &AccountId,
    ) -> Result<(), GameError> {
        match self.owners.get(&token_id) {
            None => Err(GameError::NotFound(format!("token {}", token_id))),
            Some(owner) if owner != account_id => Err(GameError::not_owned(token_id, account_id)),
            Some(_) => Ok(()),
        }
    }

    /// Moves `token_id` from `sender_id` to `receiver_id`. Returns the previous owner.
    pub(crate) fn transfer(
        &mut self,
        token_id: u64,
        sender_id: &AccountId,
        receiver_id: &AccountId,
    ) -> Result<AccountId, GameError> {
        self.check_owner(token_id, sender_id)?;
        if sender_id == receiver_id {
            return Err(GameError::InvalidInput(
                "Sender and receiver must differ".into(),
            ));
        }
        self.move_token(token_id, sender_id, receiver_id);
        Ok(sender_id.clone())
    }

    /// Unchecked move used when a transfer call is reverted.
    pub(crate) fn move_token(&mut self, token_id: u64, from: &AccountId, to: &AccountId) {
        self.remove_from_owner(from, token_id);
        self.add_to_owner(to, token_id);
        self.owners.insert(token_id, to.clone());
    }

    pub(crate) fn total_supply(&self) -> u64 {
        u64::from(self.tokens.len())
    }

    pub(crate) fn token_by_index(&self, index: u64) -> Option<u64> {
        let index = u32::try_from(index).ok()?;
        self.tokens.get(index).copied()
    }

    pub(crate) fn supply_for_owner(&self, account_id: &AccountId) -> u64 {
        self.tokens_per_owner
            .get(account_id)
            .map(|set| u64::from(set.len()))
            .unwrap_or(0)
    }

    pub(crate) fn tokens_for_owner(
        &self,
        account_id: &AccountId,
        from_index: usize,
        limit: usize,
    ) -> Vec<u64> {
        let Some(set) = self.tokens_per_owner.get(account_id) else {
            return vec![];
        };
        set.iter().skip(from_index).take(limit).copied().collect()
    }

    fn add_to_owner(&mut self, account_id: &AccountId, token_id: u64) {
        if !self.tokens_per_owner.contains_key(account_id) {
            let inner = prefixed(
                &self.prefix,
                StorageKey::LedgerTokensPerOwnerInner {
                    account_id_hash: hash_account_id(account_id),
                },
            );
            self.tokens_per_owner
                .insert(account_id.clone(), IterableSet::new(inner));
        }
        if let Some(set) = self.tokens_per_owner.get_mut(account_id) {
            set.insert(token_id);
        }
    }

    fn remove_from_owner(&mut self, account_id: &AccountId, token_id: u64) {
        let now_empty = match self.tokens_per_owner.get_mut(account_id) {
            Some(set) => {
                set.remove(&token_id);
                set.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.tokens_per_owner.remove(account_id);
        }
    }
}
