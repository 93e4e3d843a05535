// src/core/items/compass/keys.rs
//
// Tag keys. These strings are part of the on-disk contract with the host
// and must not change.

use crate::core::identifier::Identifier;
use once_cell::sync::Lazy;

pub const NAMESPACE: &str = "biomecompass";

fn id(path: &str) -> String {
    Identifier::new_unchecked(NAMESPACE, path).to_string()
}

// Location record, under the mod's own namespace
pub static BIOME_NAME_KEY: Lazy<String> = Lazy::new(|| id("biome_name"));
pub static BIOME_DIMENSION_KEY: Lazy<String> = Lazy::new(|| id("biome_dimension"));
pub static BIOME_POS_KEY: Lazy<String> = Lazy::new(|| id("biome_pos"));
pub static BIOME_TRACKED_KEY: Lazy<String> = Lazy::new(|| id("biome_tracked"));

// Host lodestone keys read by the vanilla compass needle
pub const LODESTONE_POS_KEY: &str = "LodestonePos";
pub const LODESTONE_DIMENSION_KEY: &str = "LodestoneDimension";
pub const LODESTONE_TRACKED_KEY: &str = "LodestoneTracked";

// Host display keys
pub const DISPLAY_KEY: &str = "display";
pub const LORE_KEY: &str = "Lore";
pub const ENCHANTMENTS_KEY: &str = "Enchantments";
pub const ENCHANTMENT_ID_KEY: &str = "id";
pub const ENCHANTMENT_LEVEL_KEY: &str = "lvl";
pub const CUSTOM_MODEL_DATA_KEY: &str = "CustomModelData";

// Translation keys
pub const TOOLTIP_BIOME_NAME: &str = "item.biomecompass.biome_compass.tooltip.biome_name";
pub const TOOLTIP_BIOME_POS: &str = "item.biomecompass.biome_compass.tooltip.biome_pos";
pub const TOOLTIP_CREATIVE_TIP: &str = "item.biomecompass.biome_compass.tooltip.creative_tip";
