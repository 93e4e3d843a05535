// src/core/items/compass/location.rs
//
// Reading and writing the tracked location on a compass tag, plus the
// lodestone mirror that lets the host's own needle logic point at it.

use super::dimension_codec::{DimensionCodec, IdentifierCodec};
use super::keys::{
    BIOME_DIMENSION_KEY, BIOME_NAME_KEY, BIOME_POS_KEY, BIOME_TRACKED_KEY,
    LODESTONE_DIMENSION_KEY, LODESTONE_POS_KEY, LODESTONE_TRACKED_KEY,
};
use crate::core::identifier::DimensionKey;
use crate::core::nbt::{BlockPos, Compound};
use std::sync::Arc;
use tracing::{debug, error};

// What a track request writes
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub dimension: DimensionKey,
    pub pos: BlockPos,
    // `None` updates the position without relabelling
    pub biome_name: Option<String>,
}

// What a tag holds once read back. The dimension may be missing when it
// failed to encode or came from foreign data.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredLocation {
    pub biome_name: String,
    pub pos: BlockPos,
    pub dimension: Option<DimensionKey>,
    pub tracked: bool,
}

#[derive(Clone)]
pub struct LocationCodec {
    dimensions: Arc<dyn DimensionCodec>,
}

impl Default for LocationCodec {
    fn default() -> Self {
        Self::new(Arc::new(IdentifierCodec))
    }
}

impl LocationCodec {
    pub fn new(dimensions: Arc<dyn DimensionCodec>) -> Self {
        Self { dimensions }
    }

    // Presence of the name key is the only check, same as the host's
    // own lax reading.
    pub fn has_location(tag: &Compound) -> bool {
        tag.contains(&BIOME_NAME_KEY)
    }

    pub fn decode_dimension(&self, tag: &Compound) -> Option<DimensionKey> {
        tag.get(&BIOME_DIMENSION_KEY)
            .and_then(|t| self.dimensions.decode(t))
    }

    /// Full read used by the tooltip and interaction paths.
    ///
    /// Requires the name and a readable position; anything less is treated
    /// as untracked.
    pub fn decode(&self, tag: &Compound) -> Option<StoredLocation> {
        let biome_name = tag.get_str(&BIOME_NAME_KEY)?.to_owned();
        let pos = tag
            .get_compound(&BIOME_POS_KEY)
            .and_then(BlockPos::from_compound)?;
        Some(StoredLocation {
            biome_name,
            pos,
            dimension: self.decode_dimension(tag),
            tracked: tag.get_bool(&BIOME_TRACKED_KEY),
        })
    }

    // Writes the location group onto `tag` and re-derives the mirror.
    pub fn encode(&self, location: &Location, mut tag: Compound) -> Compound {
        if let Some(name) = &location.biome_name {
            tag.put(BIOME_NAME_KEY.as_str(), name.as_str());
        }
        tag.put(BIOME_POS_KEY.as_str(), location.pos.to_compound());

        match self.dimensions.encode(&location.dimension) {
            Ok(dim) => {
                tag.put(BIOME_DIMENSION_KEY.as_str(), dim);
            }
            Err(e) => {
                // Pointing still works in-session from the raw position
                error!(
                    dimension = %location.dimension,
                    error = %e,
                    "Failed to encode tracked dimension"
                );
            }
        }
        tag.put(BIOME_TRACKED_KEY.as_str(), true);

        debug!(
            biome = ?location.biome_name,
            pos = %location.pos,
            dimension = %location.dimension,
            "Encoded compass location"
        );
        Self::derive_mirror(tag)
    }

    // Copy position, dimension and tracked flag into the lodestone keys,
    // replacing whatever mirror was there.
    pub fn derive_mirror(mut tag: Compound) -> Compound {
        mirror_field(&mut tag, &BIOME_POS_KEY, LODESTONE_POS_KEY);
        mirror_field(&mut tag, &BIOME_DIMENSION_KEY, LODESTONE_DIMENSION_KEY);
        let tracked = tag.get_bool(&BIOME_TRACKED_KEY);
        tag.put(LODESTONE_TRACKED_KEY, tracked);
        tag
    }
}

fn mirror_field(tag: &mut Compound, from: &str, to: &str) {
    match tag.get(from).cloned() {
        Some(value) => {
            tag.put(to, value);
        }
        None => {
            tag.remove(to);
        }
    }
}
