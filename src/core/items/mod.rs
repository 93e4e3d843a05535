// src/core/items/mod.rs
//! Custom item implementations.

pub mod compass;
