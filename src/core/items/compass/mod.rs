// src/core/items/compass/mod.rs

//! Biome compass: location tag codec, tracking, tooltip and disguise

pub mod appearance;
pub mod dimension_codec;
pub mod item;
pub mod keys;
pub mod location;
pub mod tooltip;
pub mod tracking;

pub use appearance::{AppearanceProjector, AppearanceSource, CompassDisguise};
pub use dimension_codec::{DimensionCodec, IdentifierCodec};
pub use item::{BiomeCompassItem, CompassState};
pub use location::{Location, LocationCodec, StoredLocation};
pub use tooltip::TooltipBuilder;
pub use tracking::{TrackOutcome, Tracker};
