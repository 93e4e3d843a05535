// src/core/mod.rs

pub mod config;
pub mod config_loader;
pub mod host;
pub mod identifier;
pub mod item;
pub mod item_manager;
pub mod items;
pub mod nbt;
pub mod stack;
pub mod text;
