//! The normalized texture header shared by every container generation.

use crate::pixel_format::{ColorSpace, CompressedFormat, PixelFormat, VariableType};

/// Identifier word at the start of a version 3 container.
pub const V3_MAGIC: u32 = 0x0352_5650;

/// Size in bytes of the fixed part of a version 3 header, including the
/// identifier word.
pub const V3_HEADER_SIZE: u32 = 52;

/// The canonical description of a decoded texture.
///
/// Version 3 headers deserialize into this directly. Legacy headers are
/// translated into it, so downstream consumers never see the container
/// generation a texture came from.
///
/// All extents and counts are at least 1 for a well-formed texture, and
/// `num_faces` is 1 or 6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureHeader {
    /// Format flags. Only [`Self::FLAG_PREMULTIPLIED`] is defined.
    pub flags: u32,
    /// Pixel layout of the payload.
    pub pixel_format: PixelFormat,
    /// Color space of the stored values.
    pub color_space: ColorSpace,
    /// Arithmetic interpretation of each channel.
    pub channel_type: VariableType,
    /// Width of the base mip level in texels.
    pub width: u32,
    /// Height of the base mip level in texels.
    pub height: u32,
    /// Depth of the base mip level in texels; 1 for non-volumetric textures.
    pub depth: u32,
    /// Number of array surfaces, not counting cube faces.
    pub num_surfaces: u32,
    /// Number of cube map faces; 1 for non-cube textures.
    pub num_faces: u32,
    /// Number of mip levels, including the base level.
    pub num_mip_maps: u32,
    /// Declared byte length of the metadata section. Only meaningful while
    /// decoding; 0 once the texture is in memory.
    pub meta_data_size: u32,
}

impl TextureHeader {
    /// Color channels were scaled by alpha when the texture was authored.
    pub const FLAG_PREMULTIPLIED: u32 = 1 << 1;

    /// Whether the premultiplied alpha flag is set.
    #[must_use]
    pub const fn is_premultiplied(&self) -> bool {
        self.flags & Self::FLAG_PREMULTIPLIED != 0
    }

    /// Width of the given mip level, clamped to at least one texel.
    #[must_use]
    pub const fn mip_width(&self, level: u32) -> u32 {
        halved(self.width, level)
    }

    /// Height of the given mip level, clamped to at least one texel.
    #[must_use]
    pub const fn mip_height(&self, level: u32) -> u32 {
        halved(self.height, level)
    }

    /// Depth of the given mip level, clamped to at least one texel.
    #[must_use]
    pub const fn mip_depth(&self, level: u32) -> u32 {
        halved(self.depth, level)
    }

    /// Storage rate of the pixel format. Unknown compressed identifiers
    /// report zero.
    #[must_use]
    pub fn bits_per_pixel(&self) -> u32 {
        if self.pixel_format.is_compressed() {
            self.pixel_format
                .compressed_format()
                .map_or(0, CompressedFormat::bits_per_pixel)
        } else {
            self.pixel_format.packed_bits_per_pixel()
        }
    }

    /// Smallest block of texels the pixel format can address.
    #[must_use]
    pub fn min_block_dimensions(&self) -> (u32, u32, u32) {
        self.pixel_format
            .compressed_format()
            .map_or((1, 1, 1), CompressedFormat::min_block_dimensions)
    }

    /// Byte size of one face of one surface at the given mip level,
    /// including all of its depth slices.
    #[must_use]
    pub fn face_data_size(&self, level: u32) -> usize {
        (self.face_data_bits(level) / 8) as usize
    }

    /// Byte size of one surface at the given mip level, across all faces.
    #[must_use]
    pub fn surface_data_size(&self, level: u32) -> usize {
        self.face_data_size(level) * self.num_faces as usize
    }

    /// Byte size of the given mip level across all surfaces and faces.
    #[must_use]
    pub fn level_data_size(&self, level: u32) -> usize {
        self.surface_data_size(level) * self.num_surfaces as usize
    }

    /// Total byte size of the texel payload described by this header.
    #[must_use]
    pub fn data_size(&self) -> usize {
        (0..self.num_mip_maps)
            .map(|level| self.level_data_size(level))
            .sum()
    }

    /// Byte offset of a subresource's first depth slice within the payload.
    ///
    /// The payload is organized by mip level, then surface, then face, with
    /// depth slices contiguous at the returned offset.
    #[must_use]
    pub fn data_offset(&self, mip: u32, surface: u32, face: u32) -> usize {
        let level_start: usize = (0..mip).map(|level| self.level_data_size(level)).sum();
        level_start
            + surface as usize * self.surface_data_size(mip)
            + face as usize * self.face_data_size(mip)
    }

    /// Bit count of one face of one surface at a mip level. Compressed
    /// formats pad the extents up to whole blocks first.
    fn face_data_bits(&self, level: u32) -> u64 {
        let (min_width, min_height, min_depth) = self.min_block_dimensions();
        let width = self.mip_width(level).div_ceil(min_width) * min_width;
        let height = self.mip_height(level).div_ceil(min_height) * min_height;
        let depth = self.mip_depth(level).div_ceil(min_depth) * min_depth;
        u64::from(self.bits_per_pixel()) * u64::from(width) * u64::from(height) * u64::from(depth)
    }
}

/// Halve an extent `level` times, clamping to at least one texel. Levels
/// past the extent's bit width saturate rather than overflowing the shift.
const fn halved(extent: u32, level: u32) -> u32 {
    let shifted = if level < u32::BITS { extent >> level } else { 0 };
    if shifted == 0 { 1 } else { shifted }
}
