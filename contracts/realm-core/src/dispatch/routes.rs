use near_sdk::store::IterableMap;

use super::{DEFAULT_ROUTES, FacetRoute, handler_ids, lookup_handler};
use crate::guards::check_one_yocto;
use crate::storage::{DISPATCH_STORAGE, Region, RegionKey, RegionState, StorageKey};
use crate::*;

#[near(serializers = [borsh])]
pub(crate) struct DispatchStorage {
    // Append-only: new fields go at the end.
    pub(crate) routes: IterableMap<String, String>,
}

impl RegionState for DispatchStorage {
    fn fresh(key: &RegionKey) -> Self {
        Self {
            routes: IterableMap::new(key.child(StorageKey::Routes)),
        }
    }
}

impl DispatchStorage {
    pub(crate) fn route(&self, selector: &str) -> Option<&String> {
        self.routes.get(selector)
    }
}

impl Contract {
    pub(crate) fn install_default_routes(&mut self) {
        let mut storage = Region::<DispatchStorage>::open(DISPATCH_STORAGE);
        for (selector, handler) in DEFAULT_ROUTES {
            storage
                .routes
                .insert(selector.to_string(), handler.to_string());
        }
    }
}

#[near]
impl Contract {
    /// Adds, replaces (`Some`) or removes (`None`) the route for `selector`.
    #[payable]
    #[handle_result]
    pub fn facet_cut(
        &mut self,
        selector: String,
        handler: Option<String>,
    ) -> Result<(), GameError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_owner(&caller)?;
        if selector.is_empty() {
            return Err(GameError::InvalidInput("selector must not be empty".into()));
        }

        let mut storage = Region::<DispatchStorage>::open(DISPATCH_STORAGE);
        let previous = match &handler {
            Some(id) => {
                if lookup_handler(id).is_none() {
                    return Err(GameError::NotFound(format!("handler {}", id)));
                }
                storage.routes.insert(selector.clone(), id.clone())
            }
            None => storage.routes.remove(&selector),
        };
        events::emit_route_updated(&caller, &selector, previous.as_deref(), handler.as_deref());
        Ok(())
    }

    pub fn facet_routes(&self) -> Vec<FacetRoute> {
        Region::<DispatchStorage>::open(DISPATCH_STORAGE)
            .routes
            .iter()
            .map(|(selector, handler)| FacetRoute {
                selector: selector.clone(),
                handler: handler.clone(),
            })
            .collect()
    }

    pub fn facet_handlers(&self) -> Vec<String> {
        handler_ids()
    }
}
