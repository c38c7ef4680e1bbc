use near_sdk::{Gas, NearToken, Promise};

use crate::constants::GAS_MIGRATE_TGAS;
use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Deploys the wasm passed as raw input and runs `migrate` on it.
    #[payable]
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, GameError> {
        check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        let code = env::input()
            .ok_or_else(|| GameError::InvalidInput("No input".into()))?;
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    /// Rewrites the root only; region records are not touched.
    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let Some(mut contract) = env::state_read::<Self>() else {
            env::panic_str("State read failed");
        };
        let old_version = contract.version.clone();
        contract.version = env!("CARGO_PKG_VERSION").to_string();

        events::emit_contract_upgraded(&env::current_account_id(), &old_version, &contract.version);

        contract
    }
}
