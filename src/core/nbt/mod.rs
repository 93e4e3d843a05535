// src/core/nbt/mod.rs
//! Owned model of the host's structured tag format.
//!
//! Tags are plain values: cloning a `Compound` deep-copies it, so two item
//! stacks can never end up editing the same tree.

pub mod block_pos;
pub mod compound;

pub use block_pos::BlockPos;
pub use compound::{Compound, Tag};
