// src/core/items/compass/appearance.rs
//
// The disguised stack sent to clients that don't have the mod: a vanilla
// item with a glint when tracking, plus a usage hint for creative players.

use super::keys::{
    CUSTOM_MODEL_DATA_KEY, DISPLAY_KEY, ENCHANTMENT_ID_KEY, ENCHANTMENT_LEVEL_KEY,
    ENCHANTMENTS_KEY, LORE_KEY, TOOLTIP_CREATIVE_TIP,
};
use super::location::LocationCodec;
use crate::core::identifier::Identifier;
use crate::core::nbt::{Compound, Tag};
use crate::core::stack::ItemStack;
use crate::core::text::{Color, Text};
use anyhow::{Context, Result};

// Supplies the base disguise. The core only decorates what it returns.
pub trait AppearanceSource {
    fn project_view(&self, source: &ItemStack, custom_model_data: i32) -> Result<ItemStack>;
}

// Default disguise: same count as a vanilla item, keeping the source's
// display block and enchantments and carrying the model variant id.
pub struct CompassDisguise {
    item: Identifier,
}

impl CompassDisguise {
    pub fn new(item: Identifier) -> Self {
        Self { item }
    }
}

impl AppearanceSource for CompassDisguise {
    fn project_view(&self, source: &ItemStack, custom_model_data: i32) -> Result<ItemStack> {
        let mut tag = Compound::new();
        if let Some(source_tag) = source.tag() {
            for key in [DISPLAY_KEY, ENCHANTMENTS_KEY] {
                if let Some(value) = source_tag.get(key) {
                    tag.put(key, value.clone());
                }
            }
        }
        tag.put(CUSTOM_MODEL_DATA_KEY, custom_model_data);
        Ok(ItemStack::new(self.item.clone(), source.count).with_tag(tag))
    }
}

pub struct AppearanceProjector {
    source: Box<dyn AppearanceSource>,
    marker: Identifier,
    custom_model_data: i32,
}

impl AppearanceProjector {
    pub fn new(source: Box<dyn AppearanceSource>, marker: Identifier, custom_model_data: i32) -> Self {
        Self {
            source,
            marker,
            custom_model_data,
        }
    }

    /// Builds the disguised view of `stack` without touching it.
    ///
    /// Every call starts from a fresh base view, so projecting the same
    /// stack twice gives identical results.
    pub fn project(&self, stack: &ItemStack, viewer_is_privileged: bool) -> Result<ItemStack> {
        let mut view = self
            .source
            .project_view(stack, self.custom_model_data)
            .with_context(|| format!("Building disguised view of {}", stack.item))?;

        if !stack.tag().is_some_and(LocationCodec::has_location) {
            return Ok(view);
        }

        let mut tag = view.tag.take().unwrap_or_default();
        add_marker(&mut tag, &self.marker);

        if viewer_is_privileged {
            let tip = Text::translatable(TOOLTIP_CREATIVE_TIP, Vec::new())
                .color(Color::Gray)
                .italic()
                .to_json()?;
            append_lore(&mut tag, tip);
        }

        view.tag = Some(tag);
        Ok(view)
    }
}

// Level-0 enchantment entry: glint only, no effect
fn add_marker(tag: &mut Compound, marker: &Identifier) {
    let mut list = match tag.remove(ENCHANTMENTS_KEY) {
        Some(Tag::List(items)) => items,
        _ => Vec::new(),
    };
    let mut entry = Compound::new();
    entry.put(ENCHANTMENT_ID_KEY, marker.to_string());
    entry.put(ENCHANTMENT_LEVEL_KEY, 0i16);
    list.push(Tag::Compound(entry));
    tag.put(ENCHANTMENTS_KEY, list);
}

// Lore must be a list of strings; anything else is replaced.
fn append_lore(tag: &mut Compound, line: String) {
    let mut display = match tag.remove(DISPLAY_KEY) {
        Some(Tag::Compound(display)) => display,
        _ => Compound::new(),
    };
    let mut lore = match display.remove(LORE_KEY) {
        Some(Tag::List(lines)) if lines.iter().all(|l| l.as_str().is_some()) => lines,
        _ => Vec::new(),
    };
    lore.push(Tag::String(line));
    display.put(LORE_KEY, lore);
    tag.put(DISPLAY_KEY, display);
}
