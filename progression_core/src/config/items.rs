//! Item configuration loading

use super::ConfigError;
use crate::equipment::{ItemCatalog, ItemDefinition};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for item configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsConfig {
    pub items: Vec<ItemDefinition>,
}

fn build(config: ItemsConfig) -> Result<ItemCatalog, ConfigError> {
    let mut catalog = ItemCatalog::new();
    for item in config.items {
        let id = item.id.clone();
        if catalog.register(item).is_some() {
            return Err(ConfigError::ValidationError(format!("duplicate item id '{}'", id)));
        }
    }
    Ok(catalog)
}

/// Load item definitions from a TOML file
pub fn load_item_catalog(path: &Path) -> Result<ItemCatalog, ConfigError> {
    build(super::load_toml(path)?)
}

/// Load item definitions from a TOML string
pub fn parse_item_catalog(content: &str) -> Result<ItemCatalog, ConfigError> {
    build(super::parse_toml(content)?)
}

/// Get the bundled item definitions
pub fn default_items() -> ItemCatalog {
    let toml = include_str!("../../config/items.toml");
    parse_item_catalog(toml).unwrap_or_else(|e| {
        log::warn!("bundled items failed to load: {}", e);
        ItemCatalog::new()
    })
}
