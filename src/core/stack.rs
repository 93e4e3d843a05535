// src/core/stack.rs

use super::identifier::Identifier;
use super::nbt::Compound;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    MainHand,
    OffHand,
}

// One quantity-bearing stack of identical items sharing a single tag tree.
// The stack owns its tag; cloning the stack clones the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Identifier,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Compound>,
}

impl ItemStack {
    pub fn new(item: Identifier, count: u32) -> Self {
        Self {
            item,
            count,
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: Compound) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn tag(&self) -> Option<&Compound> {
        self.tag.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn decrement(&mut self, amount: u32) {
        self.count = self.count.saturating_sub(amount);
    }

    // Same item kind, fresh count, no tag
    pub fn split_kind(&self, count: u32) -> Self {
        Self::new(self.item.clone(), count)
    }
}
