// src/core/items/compass/dimension_codec.rs

use crate::core::identifier::{DimensionKey, Identifier};
use crate::core::nbt::Tag;
use anyhow::Result;
use tracing::debug;

// Converts a world key to and from its tag form. Decoding never fails
// loudly: unreadable data is simply absent.
pub trait DimensionCodec {
    fn encode(&self, dimension: &DimensionKey) -> Result<Tag>;

    fn decode(&self, tag: &Tag) -> Option<DimensionKey>;
}

// Stores the identifier as a plain string tag, the way the host does.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentifierCodec;

impl DimensionCodec for IdentifierCodec {
    fn encode(&self, dimension: &DimensionKey) -> Result<Tag> {
        Ok(Tag::String(dimension.to_string()))
    }

    fn decode(&self, tag: &Tag) -> Option<DimensionKey> {
        let raw = tag.as_str()?;
        match Identifier::parse(raw) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!(value = %raw, error = %e, "Unreadable dimension identifier");
                None
            }
        }
    }
}
