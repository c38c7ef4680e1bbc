//! Per-module game constants and the peer-address registry.

mod admin;
mod types;

pub use types::*;

use std::collections::BTreeMap;

use near_sdk::{AccountId, near};

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleKind {
    Ring,
    Town,
    Oblivion,
    Bounty,
    Equipment,
    Coin,
    Player,
    Oracle,
}

impl ModuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Town => "town",
            Self::Oblivion => "oblivion",
            Self::Bounty => "bounty",
            Self::Equipment => "equipment",
            Self::Coin => "coin",
            Self::Player => "player",
            Self::Oracle => "oracle",
        }
    }
}

/// Peer modules granted elevated access to one module.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelatedAddresses {
    pub peers: BTreeMap<ModuleKind, AccountId>,
}

impl RelatedAddresses {
    pub fn get(&self, kind: ModuleKind) -> Option<&AccountId> {
        self.peers.get(&kind)
    }

    pub fn is_peer(&self, kind: ModuleKind, account_id: &AccountId) -> bool {
        self.peers.get(&kind) == Some(account_id)
    }

    pub fn set(&mut self, kind: ModuleKind, account_id: Option<AccountId>) {
        match account_id {
            Some(id) => {
                self.peers.insert(kind, id);
            }
            None => {
                self.peers.remove(&kind);
            }
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct RelatedAddressUpdate {
    pub peer: ModuleKind,
    pub account_id: Option<AccountId>,
}

/// Constants records that carry a peer registry.
pub trait WithRelated {
    fn related(&self) -> &RelatedAddresses;
    fn related_mut(&mut self) -> &mut RelatedAddresses;
}
