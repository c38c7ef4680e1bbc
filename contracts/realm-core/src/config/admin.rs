use super::{
    CoinConstants, CoinInit, DiscoveryConstants, DiscoveryInit, EquipmentConstants, ModuleKind,
    PlayerConstants, PlayerInit, RelatedAddressUpdate, RelatedAddresses, RingConstants, RingInit,
    TownConstants, TownInit, WithRelated,
};
use crate::discovery::DiscoverableKind;
use crate::guards::{check_one_yocto, now_secs};
use crate::player::facet_account;
use crate::storage::{
    BOUNTY_CONSTANTS, COIN_CONSTANTS, EQUIPMENT_CONSTANTS, OBLIVION_CONSTANTS, PLAYER_CONSTANTS,
    RING_CONSTANTS, Region, RegionState, TOWN_CONSTANTS,
};
use crate::*;

/// Constants region of a module; the oracle is a peer only and has none.
fn constants_namespace(module: ModuleKind) -> Result<&'static str, GameError> {
    match module {
        ModuleKind::Ring => Ok(RING_CONSTANTS),
        ModuleKind::Town => Ok(TOWN_CONSTANTS),
        ModuleKind::Oblivion => Ok(OBLIVION_CONSTANTS),
        ModuleKind::Bounty => Ok(BOUNTY_CONSTANTS),
        ModuleKind::Equipment => Ok(EQUIPMENT_CONSTANTS),
        ModuleKind::Coin => Ok(COIN_CONSTANTS),
        ModuleKind::Player => Ok(PLAYER_CONSTANTS),
        ModuleKind::Oracle => Err(GameError::InvalidInput(
            "oracle has no constants region".into(),
        )),
    }
}

fn apply_related<T: RegionState + WithRelated>(
    namespace: &'static str,
    updates: &[RelatedAddressUpdate],
) -> RelatedAddresses {
    let mut constants = Region::<T>::open(namespace);
    for update in updates {
        constants
            .related_mut()
            .set(update.peer, update.account_id.clone());
    }
    constants.related().clone()
}

fn read_related<T: RegionState + WithRelated>(namespace: &'static str) -> RelatedAddresses {
    Region::<T>::open(namespace).related().clone()
}

impl Contract {
    /// Grants the in-contract player facet its peer capability on every
    /// module it drives.
    pub(crate) fn register_facet_peers(&mut self) {
        let facet = facet_account();
        let grant = [RelatedAddressUpdate {
            peer: ModuleKind::Player,
            account_id: Some(facet),
        }];
        apply_related::<RingConstants>(RING_CONSTANTS, &grant);
        apply_related::<TownConstants>(TOWN_CONSTANTS, &grant);
        apply_related::<DiscoveryConstants>(OBLIVION_CONSTANTS, &grant);
        apply_related::<DiscoveryConstants>(BOUNTY_CONSTANTS, &grant);
        apply_related::<EquipmentConstants>(EQUIPMENT_CONSTANTS, &grant);
        apply_related::<CoinConstants>(COIN_CONSTANTS, &grant);
    }

    fn check_admin_call(&self) -> Result<AccountId, GameError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_owner(&caller)?;
        Ok(caller)
    }
}

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn ring_init(&mut self, args: RingInit) -> Result<(), GameError> {
        let caller = self.check_admin_call()?;
        let reinitialized =
            Region::<RingConstants>::open(RING_CONSTANTS).apply_init(args, now_secs())?;
        events::emit_constants_initialized(&caller, ModuleKind::Ring, reinitialized);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn town_init(&mut self, args: TownInit) -> Result<(), GameError> {
        let caller = self.check_admin_call()?;
        let reinitialized =
            Region::<TownConstants>::open(TOWN_CONSTANTS).apply_init(args, now_secs())?;
        events::emit_constants_initialized(&caller, ModuleKind::Town, reinitialized);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn discovery_init(
        &mut self,
        kind: DiscoverableKind,
        args: DiscoveryInit,
    ) -> Result<(), GameError> {
        let caller = self.check_admin_call()?;
        let reinitialized = Region::<DiscoveryConstants>::open(kind.constants_namespace())
            .apply_init(args, now_secs());
        events::emit_constants_initialized(&caller, kind.module(), reinitialized);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn equipment_init(&mut self) -> Result<(), GameError> {
        let caller = self.check_admin_call()?;
        let mut constants = Region::<EquipmentConstants>::open(EQUIPMENT_CONSTANTS);
        let reinitialized = constants.initialized_at != 0;
        constants.initialized_at = now_secs();
        events::emit_constants_initialized(&caller, ModuleKind::Equipment, reinitialized);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn coin_init(&mut self, args: CoinInit) -> Result<(), GameError> {
        let caller = self.check_admin_call()?;
        let reinitialized =
            Region::<CoinConstants>::open(COIN_CONSTANTS).apply_init(args, now_secs())?;
        events::emit_constants_initialized(&caller, ModuleKind::Coin, reinitialized);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn player_init(&mut self, args: PlayerInit) -> Result<(), GameError> {
        let caller = self.check_admin_call()?;
        let reinitialized =
            Region::<PlayerConstants>::open(PLAYER_CONSTANTS).apply_init(args, now_secs())?;
        events::emit_constants_initialized(&caller, ModuleKind::Player, reinitialized);
        Ok(())
    }

    /// Sets or clears peer addresses granted access to `module`. Addresses
    /// are not checked for the interface they are expected to expose.
    #[payable]
    #[handle_result]
    pub fn update_related_address(
        &mut self,
        module: ModuleKind,
        updates: Vec<RelatedAddressUpdate>,
    ) -> Result<RelatedAddresses, GameError> {
        let caller = self.check_admin_call()?;
        let namespace = constants_namespace(module)?;
        let related = match module {
            ModuleKind::Ring => apply_related::<RingConstants>(namespace, &updates),
            ModuleKind::Town => apply_related::<TownConstants>(namespace, &updates),
            ModuleKind::Oblivion | ModuleKind::Bounty => {
                apply_related::<DiscoveryConstants>(namespace, &updates)
            }
            ModuleKind::Equipment => apply_related::<EquipmentConstants>(namespace, &updates),
            ModuleKind::Coin => apply_related::<CoinConstants>(namespace, &updates),
            ModuleKind::Player | ModuleKind::Oracle => {
                apply_related::<PlayerConstants>(namespace, &updates)
            }
        };
        for update in &updates {
            events::emit_related_address_updated(
                &caller,
                module,
                update.peer,
                update.account_id.as_ref(),
            );
        }
        Ok(related)
    }

    #[handle_result]
    pub fn get_related_addresses(&self, module: ModuleKind) -> Result<RelatedAddresses, GameError> {
        let namespace = constants_namespace(module)?;
        Ok(match module {
            ModuleKind::Ring => read_related::<RingConstants>(namespace),
            ModuleKind::Town => read_related::<TownConstants>(namespace),
            ModuleKind::Oblivion | ModuleKind::Bounty => {
                read_related::<DiscoveryConstants>(namespace)
            }
            ModuleKind::Equipment => read_related::<EquipmentConstants>(namespace),
            ModuleKind::Coin => read_related::<CoinConstants>(namespace),
            ModuleKind::Player | ModuleKind::Oracle => read_related::<PlayerConstants>(namespace),
        })
    }

    pub fn get_ring_constants(&self) -> RingConstants {
        Region::<RingConstants>::open(RING_CONSTANTS).clone()
    }

    pub fn get_town_constants(&self) -> TownConstants {
        Region::<TownConstants>::open(TOWN_CONSTANTS).clone()
    }

    pub fn get_discovery_constants(&self, kind: DiscoverableKind) -> DiscoveryConstants {
        Region::<DiscoveryConstants>::open(kind.constants_namespace()).clone()
    }

    pub fn get_equipment_constants(&self) -> EquipmentConstants {
        Region::<EquipmentConstants>::open(EQUIPMENT_CONSTANTS).clone()
    }

    pub fn get_coin_constants(&self) -> CoinConstants {
        Region::<CoinConstants>::open(COIN_CONSTANTS).clone()
    }

    pub fn get_player_constants(&self) -> PlayerConstants {
        Region::<PlayerConstants>::open(PLAYER_CONSTANTS).clone()
    }
}
