//! Selector routing for `execute`.
//!
//! Handlers are compiled in and addressed by a versioned id
//! (`"explore@1"`). The route table mapping public selectors to handler ids
//! is persisted, so the owner can re-point or retire a selector with
//! `facet_cut` without redeploying.

mod handlers;
mod routes;

pub(crate) use handlers::{DEFAULT_ROUTES, handler_ids, lookup_handler};
pub(crate) use routes::DispatchStorage;

use near_sdk::near;
use serde_json::Value;

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct ExecuteRequest {
    pub method: String,
    pub args: Option<Value>,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct FacetRoute {
    pub selector: String,
    pub handler: String,
}
