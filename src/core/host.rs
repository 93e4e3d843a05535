// src/core/host.rs
//
// Interfaces the core calls into. The host game implements these; tests
// use hand-written fakes.

use super::identifier::{DimensionKey, Identifier};
use super::nbt::BlockPos;
use super::stack::{Hand, ItemStack};

pub type SoundEvent = Identifier;

pub trait World {
    // Dimension this world belongs to
    fn registry_key(&self) -> DimensionKey;

    // Fire-and-forget feedback
    fn play_sound(&mut self, at: BlockPos, sound: &SoundEvent);
}

pub trait Player {
    fn block_pos(&self) -> BlockPos;

    // Operator/creative capability
    fn is_creative(&self) -> bool;

    fn is_sneaking(&self) -> bool;

    fn stack_in_hand(&mut self, hand: Hand) -> &mut ItemStack;

    // Offer a stack to the inventory. `Err` hands the stack back when there
    // is no room for it.
    fn insert_stack(&mut self, stack: ItemStack) -> Result<(), ItemStack>;

    fn drop_item(&mut self, stack: ItemStack, retain_ownership: bool);

    fn request_teleport(&mut self, x: f64, y: f64, z: f64);
}

// The biome selection menu. It may eventually call back into
// `Tracker::track`, or never (the player closes it).
pub trait SelectionUi {
    fn open(&mut self, initial_index: usize, hand: Hand);
}
