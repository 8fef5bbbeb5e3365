//! Catalog loading and station classification

pub mod classifier;
pub mod menu;

pub use classifier::{ClassifierConfig, StationSets, flatten_category};
pub use menu::default_menu;

use shared::models::Catalog;

/// Load a catalog from its JSON representation (loaded once at startup;
/// there is no hot-reload contract)
pub fn catalog_from_json(json: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(json)
}
