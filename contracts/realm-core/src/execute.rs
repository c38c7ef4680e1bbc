use serde_json::{Map, Value};

use crate::dispatch::{DispatchStorage, ExecuteRequest, lookup_handler};
use crate::storage::{DISPATCH_STORAGE, Region};
use crate::*;

#[near]
impl Contract {
    /// Public entry point of the player facet; the caller acts as the player.
    #[handle_result]
    pub fn execute(&mut self, request: ExecuteRequest) -> Result<Value, GameError> {
        let ExecuteRequest { method, args } = request;
        let caller = env::predecessor_account_id();

        let handler_id = Region::<DispatchStorage>::open(DISPATCH_STORAGE)
            .route(&method)
            .cloned()
            .ok_or_else(|| GameError::NotFound(format!("No route for method: {}", method)))?;
        let handler = lookup_handler(&handler_id).ok_or_else(|| {
            GameError::Fatal(format!("route {} points at unknown handler {}", method, handler_id))
        })?;

        handler(self, &caller, args.unwrap_or_else(|| Value::Object(Map::new())))
    }
}
