// src/core/items/compass/tooltip.rs

use super::keys::{TOOLTIP_BIOME_NAME, TOOLTIP_BIOME_POS};
use super::location::LocationCodec;
use crate::core::stack::ItemStack;
use crate::core::text::{Color, Text};

// Adds the biome and position lines to a tracked compass' tooltip.
pub struct TooltipBuilder {
    codec: LocationCodec,
}

impl TooltipBuilder {
    pub fn new(codec: LocationCodec) -> Self {
        Self { codec }
    }

    pub fn append(&self, stack: &ItemStack, tooltip: &mut Vec<Text>) {
        let Some(location) = stack.tag().and_then(|t| self.codec.decode(t)) else {
            return;
        };

        tooltip.push(Text::translatable(
            TOOLTIP_BIOME_NAME,
            vec![Text::literal(location.biome_name).color(Color::Green)],
        ));
        tooltip.push(Text::translatable(
            TOOLTIP_BIOME_POS,
            vec![Text::literal(location.pos.to_string()).color(Color::Gray)],
        ));
    }
}
