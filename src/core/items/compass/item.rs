// src/core/items/compass/item.rs

use super::appearance::{AppearanceProjector, AppearanceSource, CompassDisguise};
use super::keys::NAMESPACE;
use super::location::{LocationCodec, StoredLocation};
use super::tooltip::TooltipBuilder;
use super::tracking::Tracker;
use crate::core::config::CompassConfig;
use crate::core::host::{Player, SelectionUi};
use crate::core::identifier::Identifier;
use crate::core::item::{Item, UseOutcome};
use crate::core::stack::{Hand, ItemStack};
use crate::core::text::Text;
use anyhow::Result;
use tracing::info;

pub const ITEM_NAME: &str = "biome_compass";

#[derive(Debug, Clone, PartialEq)]
pub enum CompassState {
    Untracked,
    Tracked(StoredLocation),
}

// The biome compass: ties the tag codec, tracker, tooltip and disguise
// together behind the generic `Item` interface.
pub struct BiomeCompassItem {
    id: Identifier,
    codec: LocationCodec,
    tracker: Tracker,
    tooltip: TooltipBuilder,
    appearance: AppearanceProjector,
    teleport_altitude: i32,
}

impl BiomeCompassItem {
    pub fn new(cfg: &CompassConfig) -> Self {
        Self::with_parts(
            cfg,
            LocationCodec::default(),
            Box::new(CompassDisguise::new(cfg.disguise_item.clone())),
        )
    }

    pub fn with_parts(
        cfg: &CompassConfig,
        codec: LocationCodec,
        disguise: Box<dyn AppearanceSource>,
    ) -> Self {
        Self {
            id: Identifier::new_unchecked(NAMESPACE, ITEM_NAME),
            tracker: Tracker::new(codec.clone(), cfg.lock_sound.clone()),
            tooltip: TooltipBuilder::new(codec.clone()),
            appearance: AppearanceProjector::new(
                disguise,
                cfg.marker_enchantment.clone(),
                cfg.custom_model_data,
            ),
            codec,
            teleport_altitude: cfg.teleport_altitude,
        }
    }

    // Handed to the selection menu so it can commit a choice
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn default_stack(&self) -> ItemStack {
        ItemStack::new(self.id.clone(), 1)
    }

    // Tracked needs both the name and a readable position; a name alone
    // (foreign or damaged data) counts as untracked.
    pub fn state(&self, stack: &ItemStack) -> CompassState {
        match stack.tag().and_then(|t| self.codec.decode(t)) {
            Some(location) => CompassState::Tracked(location),
            None => CompassState::Untracked,
        }
    }
}

impl Item for BiomeCompassItem {
    fn name(&self) -> &str {
        ITEM_NAME
    }

    fn id(&self) -> &Identifier {
        &self.id
    }

    fn append_tooltip(&self, stack: &ItemStack, tooltip: &mut Vec<Text>) {
        self.tooltip.append(stack, tooltip);
    }

    fn use_item(
        &self,
        player: &mut dyn Player,
        hand: Hand,
        ui: &mut dyn SelectionUi,
    ) -> UseOutcome {
        if player.is_creative() && player.is_sneaking() {
            if let CompassState::Tracked(location) = self.state(player.stack_in_hand(hand)) {
                // TODO: look up the top block at the target column instead of a fixed altitude
                let pos = location.pos;
                info!(%pos, altitude = self.teleport_altitude, "Teleporting to tracked biome");
                player.request_teleport(
                    f64::from(pos.x),
                    f64::from(self.teleport_altitude),
                    f64::from(pos.z),
                );
                return UseOutcome::Teleported;
            }
        }

        ui.open(0, hand);
        UseOutcome::OpenedSelection
    }

    fn disguised_view(&self, stack: &ItemStack, viewer_is_privileged: bool) -> Result<ItemStack> {
        self.appearance.project(stack, viewer_is_privileged)
    }
}
