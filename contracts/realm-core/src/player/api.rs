use super::{PlayerStorage, PlayerView};
use crate::equipment::EquipmentStorage;
use crate::ring::Location;
use crate::storage::{EQUIPMENT_STORAGE, PLAYER_STORAGE, Region};
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn player_get(&self, account_id: AccountId) -> Result<PlayerView, GameError> {
        let attack_power = self.player_attack_power(&account_id)?;
        let expedition = Region::<PlayerStorage>::open(PLAYER_STORAGE)
            .expeditions
            .get(&account_id)
            .copied();
        let equipped = Region::<EquipmentStorage>::open(EQUIPMENT_STORAGE).equipped_of(&account_id);
        Ok(PlayerView {
            account_id,
            expedition,
            attack_power,
            equipped,
        })
    }

    pub fn player_is_explored(&self, location: Location) -> bool {
        Region::<PlayerStorage>::open(PLAYER_STORAGE)
            .explored
            .contains(&location)
    }
}
