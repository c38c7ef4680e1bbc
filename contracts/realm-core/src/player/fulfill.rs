use realm_types::{U256, roll_under_ratio};
use serde_json::{Value, json};

use super::facet_account;
use crate::discovery::DiscoverableKind;
use crate::randomness::{RandomPurpose, RandomRequest};
use crate::ring::{Location, RingStorage};
use crate::storage::{RING_STORAGE, Region};
use crate::*;

impl Contract {
    pub(crate) fn player_fulfill(
        &mut self,
        request_id: u64,
        request: RandomRequest,
        words: &[U256],
    ) -> Result<Value, GameError> {
        match request.purpose {
            RandomPurpose::Discovery { location, ring_id } => {
                self.fulfill_discovery(request_id, &request.requester, location, ring_id, words)
            }
            RandomPurpose::Forge => {
                let token_id = self.equipment_mint_as(&facet_account(), &request.requester, words)?;
                Ok(json!({ "request_id": request_id, "equipment_id": token_id }))
            }
        }
    }

    /// Word 0 rolls for a town, word 1 for a bounty, word 2 for an oblivion,
    /// each against the ring's ratio.
    fn fulfill_discovery(
        &mut self,
        request_id: u64,
        player: &AccountId,
        location: Location,
        ring_id: u64,
        words: &[U256],
    ) -> Result<Value, GameError> {
        let [town_word, bounty_word, oblivion_word] = words else {
            return Err(GameError::InvalidRandomWordsLength(
                DISCOVERY_RANDOM_WORDS,
                words.len() as u32,
            ));
        };
        let ring = Region::<RingStorage>::open(RING_STORAGE)
            .minted(ring_id)
            .cloned()
            .ok_or_else(|| GameError::Fatal(format!("explored ring {} is not minted", ring_id)))?;

        let peer = facet_account();
        let mut town_id = None;
        if roll_under_ratio(*town_word, ring.town_minting_ratio) {
            town_id = Some(self.town_create_as(&peer, player, location)?);
            self.ring_increase_town_count_as(&peer, ring_id, 1)?;
        }
        let mut bounty_id = None;
        if roll_under_ratio(*bounty_word, ring.bounty_minting_ratio) {
            let result =
                self.discovery_safe_mint_as(&peer, DiscoverableKind::Bounty, player, location)?;
            bounty_id = Some(result.entity.id);
        }
        let mut oblivion_id = None;
        if roll_under_ratio(*oblivion_word, ring.oblivion_minting_ratio) {
            let result =
                self.discovery_safe_mint_as(&peer, DiscoverableKind::Oblivion, player, location)?;
            oblivion_id = Some(result.entity.id);
        }

        Ok(json!({
            "request_id": request_id,
            "ring_id": ring_id,
            "town_id": town_id,
            "bounty_id": bounty_id,
            "oblivion_id": oblivion_id,
        }))
    }
}
