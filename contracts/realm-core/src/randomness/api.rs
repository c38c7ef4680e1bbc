use realm_types::U256;
use serde_json::Value;

use super::{RandomPurpose, RandomRequest, RandomnessStorage};
use crate::config::{PlayerConstants, WithRelated};
use crate::guards::now_secs;
use crate::storage::{PLAYER_CONSTANTS, RANDOMNESS_STORAGE, Region};
use crate::*;

/// Random words arrive as decimal strings of 256-bit integers.
pub(crate) fn parse_random_words(words: &[String]) -> Result<Vec<U256>, GameError> {
    words
        .iter()
        .map(|word| {
            U256::from_dec_str(word)
                .map_err(|_| GameError::InvalidInput(format!("invalid random word: {}", word)))
        })
        .collect()
}

pub(crate) fn request_random_words(
    requester: &AccountId,
    purpose: RandomPurpose,
    num_words: u32,
) -> Result<u64, GameError> {
    if num_words == 0 || num_words > MAX_RANDOM_WORDS {
        return Err(GameError::InvalidInput(format!(
            "num_words must be between 1 and {}",
            MAX_RANDOM_WORDS
        )));
    }
    let mut storage = Region::<RandomnessStorage>::open(RANDOMNESS_STORAGE);
    let request_id = storage.last_request_id + 1;
    let request = RandomRequest {
        requester: requester.clone(),
        purpose,
        num_words,
        requested_at: now_secs(),
    };
    events::emit_random_words_requested(request_id, &request);
    storage.pending.insert(request_id, request);
    storage.last_request_id = request_id;
    Ok(request_id)
}

#[near]
impl Contract {
    /// Oracle callback. Only the owner or the registered oracle may answer.
    #[handle_result]
    pub fn fulfill_random_words(
        &mut self,
        request_id: u64,
        random_words: Vec<String>,
    ) -> Result<Value, GameError> {
        let caller = env::predecessor_account_id();
        {
            let constants = Region::<PlayerConstants>::open(PLAYER_CONSTANTS);
            self.check_owner_or_peer(&caller, constants.related(), ModuleKind::Oracle)?;
        }
        let words = parse_random_words(&random_words)?;

        let request = {
            let mut storage = Region::<RandomnessStorage>::open(RANDOMNESS_STORAGE);
            let expected = storage
                .pending
                .get(&request_id)
                .map(|request| request.num_words)
                .ok_or_else(|| GameError::NotFound(format!("random request {}", request_id)))?;
            if words.len() != expected as usize {
                return Err(GameError::InvalidRandomWordsLength(expected, words.len() as u32));
            }
            storage
                .pending
                .remove(&request_id)
                .ok_or_else(|| GameError::Fatal(format!("random request {} vanished", request_id)))?
        };

        events::emit_random_words_fulfilled(&caller, request_id, &request);
        self.player_fulfill(request_id, request, &words)
    }

    pub fn randomness_pending(&self, request_id: u64) -> Option<RandomRequest> {
        Region::<RandomnessStorage>::open(RANDOMNESS_STORAGE)
            .pending
            .get(&request_id)
            .cloned()
    }
}
