// src/core/nbt/block_pos.rs

use super::compound::Compound;
use serde::{Deserialize, Serialize};
use std::fmt;

const X_KEY: &str = "X";
const Y_KEY: &str = "Y";
const Z_KEY: &str = "Z";

// Integer block coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    // Encode as `{X, Y, Z}`, the layout the host persists positions in
    pub fn to_compound(self) -> Compound {
        let mut c = Compound::new();
        c.put(X_KEY, self.x);
        c.put(Y_KEY, self.y);
        c.put(Z_KEY, self.z);
        c
    }

    // All three axes must be present ints, otherwise the position is unreadable
    pub fn from_compound(c: &Compound) -> Option<Self> {
        Some(Self {
            x: c.get_int(X_KEY)?,
            y: c.get_int(Y_KEY)?,
            z: c.get_int(Z_KEY)?,
        })
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}
