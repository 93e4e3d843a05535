// src/core/item.rs

use anyhow::Result;

use super::host::{Player, SelectionUi};
use super::identifier::Identifier;
use super::stack::{Hand, ItemStack};
use super::text::Text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseOutcome {
    Pass,
    Teleported,
    OpenedSelection,
}

// Core trait for a custom item.
//
// Each item must:
// 1. provide a unique `name()` and registry `id()`;
// 2. build the disguised stack shown to vanilla clients;
// 3. optionally extend tooltips and react to being used.
pub trait Item {
    // A short, unique identifier for the item
    fn name(&self) -> &str;

    fn id(&self) -> &Identifier;

    // Extra tooltip lines. Pure read of the stack.
    fn append_tooltip(&self, _stack: &ItemStack, _tooltip: &mut Vec<Text>) {}

    // Right-click with the item in `hand`
    fn use_item(
        &self,
        _player: &mut dyn Player,
        _hand: Hand,
        _ui: &mut dyn SelectionUi,
    ) -> UseOutcome {
        UseOutcome::Pass
    }

    // The stack actually sent to clients. Must not modify `stack`.
    fn disguised_view(&self, stack: &ItemStack, viewer_is_privileged: bool) -> Result<ItemStack>;
}
