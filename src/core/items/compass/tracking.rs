// src/core/items/compass/tracking.rs

use super::location::{Location, LocationCodec};
use crate::core::host::{Player, SoundEvent, World};
use crate::core::identifier::DimensionKey;
use crate::core::nbt::BlockPos;
use crate::core::stack::{Hand, ItemStack};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    // The held stack was a single compass and now carries the location
    UpdatedInPlace,
    // One compass was split off and went into the inventory
    SplitInserted,
    // One compass was split off but the inventory was full
    SplitDropped,
    // The hand was empty by the time the choice was committed
    NothingHeld,
}

// Locks a compass onto a location chosen in the selection menu.
pub struct Tracker {
    codec: LocationCodec,
    lock_sound: SoundEvent,
}

impl Tracker {
    pub fn new(codec: LocationCodec, lock_sound: SoundEvent) -> Self {
        Self { codec, lock_sound }
    }

    pub fn track(
        &self,
        world: &mut dyn World,
        player: &mut dyn Player,
        hand: Hand,
        pos: BlockPos,
        biome_name: Option<&str>,
    ) -> TrackOutcome {
        if player.stack_in_hand(hand).is_empty() {
            debug!(?hand, "No compass in hand, nothing to track");
            return TrackOutcome::NothingHeld;
        }

        world.play_sound(player.block_pos(), &self.lock_sound);

        let dimension = world.registry_key();
        let split = self.apply(&dimension, pos, player.stack_in_hand(hand), biome_name);

        let outcome = match split {
            None => TrackOutcome::UpdatedInPlace,
            Some(compass) => match player.insert_stack(compass) {
                Ok(()) => TrackOutcome::SplitInserted,
                Err(rejected) => {
                    debug!("Inventory full, dropping tracked compass");
                    player.drop_item(rejected, false);
                    TrackOutcome::SplitDropped
                }
            },
        };

        info!(
            biome = ?biome_name,
            %pos,
            %dimension,
            ?outcome,
            "Compass tracking location"
        );
        outcome
    }

    /// Writes the location onto `stack`, or onto a compass split off it.
    ///
    /// A single compass is updated in place and `None` is returned. From a
    /// larger stack one compass is taken: the rest keep their tag untouched,
    /// and the returned stack starts from a copy of that tag before the
    /// location is written. An empty stack is left alone.
    pub fn apply(
        &self,
        dimension: &DimensionKey,
        pos: BlockPos,
        stack: &mut ItemStack,
        biome_name: Option<&str>,
    ) -> Option<ItemStack> {
        if stack.is_empty() {
            return None;
        }

        let location = Location {
            dimension: dimension.clone(),
            pos,
            biome_name: biome_name.map(str::to_owned),
        };

        if stack.count == 1 {
            let tag = stack.tag.take().unwrap_or_default();
            stack.tag = Some(self.codec.encode(&location, tag));
            return None;
        }

        stack.decrement(1);
        let base = stack.tag.clone().unwrap_or_default();
        Some(
            stack
                .split_kind(1)
                .with_tag(self.codec.encode(&location, base)),
        )
    }
}
