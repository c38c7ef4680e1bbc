mod api;
mod registry;
mod types;

pub(crate) use registry::EquipmentRegistry;
pub(crate) use types::EquipmentStorage;
pub use types::{EquipmentMetadata, EquipmentView};
