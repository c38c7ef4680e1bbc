use near_sdk::near;

use crate::ModuleKind;
use crate::constants::{BOUNTY_DISCOVERER_REWARD_RATIO, OBLIVION_DISCOVERER_REWARD_RATIO};
use crate::storage::{BOUNTY_CONSTANTS, BOUNTY_STORAGE, OBLIVION_CONSTANTS, OBLIVION_STORAGE};
use crate::token::TokenCollection;

/// Selects one of the two independent discovery regions.
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiscoverableKind {
    Oblivion,
    Bounty,
}

impl DiscoverableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Oblivion => "oblivion",
            Self::Bounty => "bounty",
        }
    }

    pub fn discoverer_reward_ratio(self) -> u32 {
        match self {
            Self::Oblivion => OBLIVION_DISCOVERER_REWARD_RATIO,
            Self::Bounty => BOUNTY_DISCOVERER_REWARD_RATIO,
        }
    }

    pub(crate) fn module(self) -> ModuleKind {
        match self {
            Self::Oblivion => ModuleKind::Oblivion,
            Self::Bounty => ModuleKind::Bounty,
        }
    }

    pub(crate) fn collection(self) -> TokenCollection {
        match self {
            Self::Oblivion => TokenCollection::Oblivion,
            Self::Bounty => TokenCollection::Bounty,
        }
    }

    pub(crate) fn storage_namespace(self) -> &'static str {
        match self {
            Self::Oblivion => OBLIVION_STORAGE,
            Self::Bounty => BOUNTY_STORAGE,
        }
    }

    pub(crate) fn constants_namespace(self) -> &'static str {
        match self {
            Self::Oblivion => OBLIVION_CONSTANTS,
            Self::Bounty => BOUNTY_CONSTANTS,
        }
    }
}
