// src/core/item_manager.rs

use super::config::Config;
use super::identifier::Identifier;
use super::item::Item;
use super::items::compass::BiomeCompassItem;
use super::items::compass::item::ITEM_NAME as BIOME_COMPASS;
use tracing::{info, warn};

// The set of custom items, passed around explicitly instead of living in
// a global registry.
pub struct ItemRegistry {
    items: Vec<Box<dyn Item>>,
}

impl ItemRegistry {
    // Registers all enabled items in the order specified by the config.
    pub fn load(config: &Config) -> Self {
        let mut items: Vec<Box<dyn Item>> = Vec::new();

        for name in &config.items {
            match name.as_str() {
                BIOME_COMPASS => {
                    items.push(Box::new(BiomeCompassItem::new(&config.compass)));
                }
                other => {
                    warn!(item = %other, "Unknown item in config, skipping");
                }
            }
        }

        info!(num_items = items.len(), "Registered items");
        ItemRegistry { items }
    }

    pub fn items(&self) -> &[Box<dyn Item>] {
        &self.items
    }

    pub fn get(&self, id: &Identifier) -> Option<&dyn Item> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .map(|item| item.as_ref())
    }
}
