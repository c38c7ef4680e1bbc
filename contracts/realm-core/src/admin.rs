use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        let mut contract = Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
        };
        contract.register_facet_peers();
        contract.install_default_routes();
        contract
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), GameError> {
        check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(GameError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
