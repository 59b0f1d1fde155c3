//! Metadata blocks carried by version 3 containers.
//!
//! A block is a `(fourCC, key, payload)` triple. Blocks whose fourCC equals
//! the container identifier itself belong to the format's own key namespace;
//! anything else is application data and passes through opaquely.

use crate::header::V3_MAGIC;

/// FourCC of metadata blocks defined by the container format itself.
pub const CONTAINER_FOUR_CC: u32 = V3_MAGIC;

/// Keys defined under [`CONTAINER_FOUR_CC`].
pub mod keys {
    /// Texture atlas sub-rectangle coordinates.
    pub const ATLAS_COORDS: u32 = 0;
    /// Bump map scale and channel order, see [`BumpMap`](super::BumpMap).
    pub const BUMP_MAP: u32 = 1;
    /// Cube map face order string.
    pub const CUBE_MAP_ORDER: u32 = 2;
    /// Per-axis storage direction, see [`Orientation`](super::Orientation).
    pub const ORIENTATION: u32 = 3;
    /// Border sizes around the meaningful texel region.
    pub const BORDER: u32 = 4;
    /// Arbitrary padding.
    pub const PADDING: u32 = 5;
}

/// One metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBlock {
    /// Namespace tag of the block.
    pub four_cc: u32,
    /// Key within the namespace.
    pub key: u32,
    /// Raw block payload; may be empty.
    pub data: Vec<u8>,
}

impl MetadataBlock {
    /// Byte size of the per-block prefix (fourCC, key and payload length).
    pub const PREFIX_SIZE: u32 = 12;

    /// Bytes this block occupies in a serialized metadata section.
    #[must_use]
    pub fn stored_size(&self) -> u32 {
        Self::PREFIX_SIZE + self.data.len() as u32
    }
}

/// Bump map descriptor stored under [`keys::BUMP_MAP`].
#[derive(Debug, Clone, PartialEq)]
pub struct BumpMap {
    /// Height scale applied when interpreting the map.
    pub scale: f32,
    /// Channel order string of up to four characters from `xyzh`.
    pub order: String,
}

impl BumpMap {
    /// Serialize into a metadata block: a little-endian scale followed by
    /// four order bytes, zero padded.
    #[must_use]
    pub fn to_block(&self) -> MetadataBlock {
        let mut data = vec![0u8; 8];
        data[..4].copy_from_slice(&self.scale.to_le_bytes());
        for (slot, byte) in data[4..].iter_mut().zip(self.order.bytes()) {
            *slot = byte;
        }
        MetadataBlock {
            four_cc: CONTAINER_FOUR_CC,
            key: keys::BUMP_MAP,
            data,
        }
    }

    /// Parse a bump map descriptor out of a block, if it has the expected
    /// shape.
    #[must_use]
    pub fn from_block(block: &MetadataBlock) -> Option<Self> {
        if block.four_cc != CONTAINER_FOUR_CC || block.key != keys::BUMP_MAP {
            return None;
        }
        let scale_bytes: [u8; 4] = block.data.get(..4)?.try_into().ok()?;
        let order = block
            .data
            .get(4..8)?
            .iter()
            .take_while(|&&byte| byte != 0)
            .map(|&byte| byte as char)
            .collect();
        Some(Self {
            scale: f32::from_le_bytes(scale_bytes),
            order,
        })
    }
}

// Per-axis direction flag values. A zero byte is the opposite direction.
const AXIS_FLAG_LEFT: u8 = 1;
const AXIS_FLAG_UP: u8 = 2;
const AXIS_FLAG_OUT: u8 = 4;

/// Storage direction of the image data, stored under [`keys::ORIENTATION`]
/// as one byte per axis.
///
/// The default (all false) is right, down and in, which is how payload rows
/// are stored when no orientation block is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation {
    /// X axis increases leftwards.
    pub left: bool,
    /// Y axis increases upwards. Set for vertically flipped images.
    pub up: bool,
    /// Z axis increases outwards.
    pub out: bool,
}

impl Orientation {
    /// Serialize into a metadata block of three axis bytes.
    #[must_use]
    pub fn to_block(self) -> MetadataBlock {
        let data = vec![
            if self.left { AXIS_FLAG_LEFT } else { 0 },
            if self.up { AXIS_FLAG_UP } else { 0 },
            if self.out { AXIS_FLAG_OUT } else { 0 },
        ];
        MetadataBlock {
            four_cc: CONTAINER_FOUR_CC,
            key: keys::ORIENTATION,
            data,
        }
    }

    /// Parse an orientation out of a block, if it has the expected shape.
    #[must_use]
    pub fn from_block(block: &MetadataBlock) -> Option<Self> {
        if block.four_cc != CONTAINER_FOUR_CC || block.key != keys::ORIENTATION {
            return None;
        }
        let data = block.data.get(..3)?;
        Some(Self {
            left: data[0] & AXIS_FLAG_LEFT != 0,
            up: data[1] & AXIS_FLAG_UP != 0,
            out: data[2] & AXIS_FLAG_OUT != 0,
        })
    }
}
