use near_sdk::serde::de::DeserializeOwned;
use near_sdk::{AccountId, near};
use serde_json::Value;

use crate::discovery::DiscoverableKind;
use crate::ring::Location;
use crate::{Contract, GameError};

pub(crate) type Handler = fn(&mut Contract, &AccountId, Value) -> Result<Value, GameError>;

/// Every handler the contract ships. Ids are never reused for a different
/// behaviour; a changed handler gets a new `@version`.
const HANDLERS: &[(&str, Handler)] = &[
    ("explore@1", explore),
    ("forge_equipment@1", forge_equipment),
    ("join_town@1", join_town),
    ("leave_town@1", leave_town),
    ("challenge@1", challenge),
    ("equip@1", equip),
    ("unequip@1", unequip),
];

/// Routes installed by `new`: selector -> handler id.
pub(crate) const DEFAULT_ROUTES: &[(&str, &str)] = &[
    ("explore", "explore@1"),
    ("forge_equipment", "forge_equipment@1"),
    ("join_town", "join_town@1"),
    ("leave_town", "leave_town@1"),
    ("challenge", "challenge@1"),
    ("equip", "equip@1"),
    ("unequip", "unequip@1"),
];

pub(crate) fn lookup_handler(id: &str) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(handler_id, _)| *handler_id == id)
        .map(|(_, handler)| *handler)
}

pub(crate) fn handler_ids() -> Vec<String> {
    HANDLERS.iter().map(|(id, _)| id.to_string()).collect()
}

fn decode<T: DeserializeOwned>(args: Value) -> Result<T, GameError> {
    serde_json::from_value(args)
        .map_err(|e| GameError::InvalidInput(format!("Invalid args: {}", e)))
}

#[near(serializers = [json])]
struct ExploreArgs {
    location: Location,
}

#[near(serializers = [json])]
struct JoinTownArgs {
    town_id: u64,
}

#[near(serializers = [json])]
struct ChallengeArgs {
    kind: DiscoverableKind,
    id: u64,
}

#[near(serializers = [json])]
struct TokenArgs {
    token_id: u64,
}

fn explore(contract: &mut Contract, caller: &AccountId, args: Value) -> Result<Value, GameError> {
    let ExploreArgs { location } = decode(args)?;
    contract.player_explore(caller, location)
}

fn forge_equipment(
    contract: &mut Contract,
    caller: &AccountId,
    _args: Value,
) -> Result<Value, GameError> {
    contract.player_forge_equipment(caller)
}

fn join_town(contract: &mut Contract, caller: &AccountId, args: Value) -> Result<Value, GameError> {
    let JoinTownArgs { town_id } = decode(args)?;
    contract.player_join_town(caller, town_id)
}

fn leave_town(
    contract: &mut Contract,
    caller: &AccountId,
    _args: Value,
) -> Result<Value, GameError> {
    contract.player_leave_town(caller)
}

fn challenge(contract: &mut Contract, caller: &AccountId, args: Value) -> Result<Value, GameError> {
    let ChallengeArgs { kind, id } = decode(args)?;
    contract.player_challenge(caller, kind, id)
}

fn equip(contract: &mut Contract, caller: &AccountId, args: Value) -> Result<Value, GameError> {
    let TokenArgs { token_id } = decode(args)?;
    contract.player_equip(caller, token_id)
}

fn unequip(contract: &mut Contract, caller: &AccountId, args: Value) -> Result<Value, GameError> {
    let TokenArgs { token_id } = decode(args)?;
    contract.player_unequip(caller, token_id)
}
