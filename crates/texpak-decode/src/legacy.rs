//! Legacy fixed-layout headers and the legacy pixel format mapping.
//!
//! The first two container generations describe pixel layouts with a single
//! 8-bit identifier drawn from several historical vendor namespaces. The
//! mapping table in this module translates each identifier into the
//! orthogonal description used by [`TextureHeader`]: pixel layout, color
//! space, channel type and the premultiplied alpha flag.

use crate::error::{DecodeError, DecodeResult};
use crate::header::TextureHeader;
use crate::metadata::{BumpMap, MetadataBlock, Orientation};
use crate::pixel_format::{ColorSpace, CompressedFormat, PixelFormat, VariableType};

/// Version word of a version 1 container, which doubles as its header size.
pub const HEADER_SIZE_V1: u32 = 44;

/// Version word of a version 2 container, which doubles as its header size.
pub const HEADER_SIZE_V2: u32 = 52;

/// Identifier stored in the trailing magic field of a version 2 header.
pub const LEGACY_MAGIC: u32 = 0x2152_5650;

// Flag bits of the packed pixel-format-and-flags word. The low byte holds
// the format identifier.
const FORMAT_MASK: u32 = 0xFF;
const FLAG_BUMP_MAP: u32 = 1 << 10;
const FLAG_CUBE_MAP: u32 = 1 << 12;
const FLAG_VOLUME: u32 = 1 << 14;
const FLAG_VERTICAL_FLIP: u32 = 1 << 16;

/// A version 1 or 2 header as laid out on disk.
///
/// Version 1 headers stop after `alpha_mask`; the reader fills `magic` and
/// `num_surfaces` with their implied values. This type never outlives header
/// decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyHeader {
    pub header_size: u32,
    pub height: u32,
    pub width: u32,
    /// Count of mip levels beyond the base level, so 0 means no mip chain.
    pub mip_map_count: u32,
    pub pixel_format_and_flags: u32,
    pub data_size: u32,
    pub bit_count: u32,
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
    pub magic: u32,
    /// Raw surface count. Counts faces and depth slices too; see
    /// [`LegacyHeader::to_texture_header`] for how it is reinterpreted.
    pub num_surfaces: u32,
}

/// The packed flags word of a legacy header, decoded once into named fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyFlags {
    /// Legacy pixel format identifier from the low byte.
    pub format_id: u8,
    /// The texture is a normal map.
    pub bump_map: bool,
    /// The surfaces are the six faces of a cube map.
    pub cube_map: bool,
    /// The surfaces are depth slices of a volume texture.
    pub volume: bool,
    /// Rows are stored bottom-up.
    pub vertical_flip: bool,
}

impl LegacyFlags {
    /// Split the packed word into its named parts.
    #[must_use]
    pub fn decode(word: u32) -> Self {
        Self {
            format_id: (word & FORMAT_MASK) as u8,
            bump_map: word & FLAG_BUMP_MAP != 0,
            cube_map: word & FLAG_CUBE_MAP != 0,
            volume: word & FLAG_VOLUME != 0,
            vertical_flip: word & FLAG_VERTICAL_FLIP != 0,
        }
    }
}

/// Result of mapping one legacy format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedFormat {
    pub pixel_format: PixelFormat,
    pub color_space: ColorSpace,
    pub channel_type: VariableType,
    pub premultiplied: bool,
}

impl LegacyHeader {
    /// Reinterpret this header as a normalized [`TextureHeader`], along with
    /// any metadata blocks synthesized from the legacy flags.
    ///
    /// The raw surface count is reinterpreted by the cube map and volume
    /// flags: cube maps count each face as a surface, and volume textures
    /// store depth slices as surfaces. Some legacy encoders emitted a
    /// surface count of zero, so a computed count of zero is clamped to one;
    /// a zero depth is normalized the same way.
    pub fn to_texture_header(&self) -> DecodeResult<(TextureHeader, Vec<MetadataBlock>)> {
        let flags = LegacyFlags::decode(self.pixel_format_and_flags);
        let mapped = map_legacy_format(flags.format_id)?;

        let faces: u32 = if flags.cube_map { 6 } else { 1 };
        let (depth, num_surfaces) = if flags.volume {
            ((self.num_surfaces / faces).max(1), 1)
        } else {
            (1, (self.num_surfaces / faces).max(1))
        };

        let header = TextureHeader {
            flags: if mapped.premultiplied {
                TextureHeader::FLAG_PREMULTIPLIED
            } else {
                0
            },
            pixel_format: mapped.pixel_format,
            color_space: mapped.color_space,
            channel_type: mapped.channel_type,
            width: self.width,
            height: self.height,
            depth,
            num_surfaces,
            num_faces: faces,
            // Legacy mip counts exclude the base level.
            num_mip_maps: self.mip_map_count + 1,
            meta_data_size: 0,
        };

        let mut blocks = Vec::new();
        if flags.bump_map {
            blocks.push(
                BumpMap {
                    scale: 1.0,
                    order: "xyz".to_string(),
                }
                .to_block(),
            );
        }
        if flags.vertical_flip {
            blocks.push(
                Orientation {
                    up: true,
                    ..Orientation::default()
                }
                .to_block(),
            );
        }

        Ok((header, blocks))
    }
}

/// Map a legacy pixel format identifier to its normalized description.
///
/// The table is pure data: every identifier the legacy namespaces define has
/// exactly one entry, including the historical quirks of the format (a few
/// identifiers resolve to layouts that do not match their names). Anything
/// outside the table is an error; no default format is ever substituted,
/// since a wrong layout would corrupt every later offset computation.
#[allow(clippy::too_many_lines)]
#[rustfmt::skip]
pub fn map_legacy_format(id: u8) -> DecodeResult<MappedFormat> {
    use ColorSpace::{Linear, Srgb};
    use CompressedFormat as C;
    use PixelFormat as P;
    use VariableType::{
        SignedByte, SignedByteNorm, SignedFloat, SignedInteger, SignedIntegerNorm, SignedShort,
        SignedShortNorm, UnsignedByte, UnsignedByteNorm, UnsignedInteger, UnsignedIntegerNorm,
        UnsignedShort, UnsignedShortNorm,
    };

    let (pixel_format, color_space, channel_type, premultiplied) = match id {
        // Fixed-function console namespace.
        0x00 => (P::packed4(b'a', b'r', b'g', b'b', 4, 4, 4, 4), Linear, UnsignedShortNorm, false),
        0x01 => (P::packed4(b'a', b'r', b'g', b'b', 1, 5, 5, 5), Linear, UnsignedShortNorm, false),
        0x02 => (P::packed3(b'r', b'g', b'b', 5, 6, 5), Linear, UnsignedShortNorm, false),
        0x03 => (P::packed4(b'x', b'r', b'g', b'b', 1, 5, 5, 5), Linear, UnsignedShortNorm, false),
        0x04 => (P::packed3(b'r', b'g', b'b', 8, 8, 8), Linear, UnsignedIntegerNorm, false),
        0x05 => (P::packed4(b'a', b'r', b'g', b'b', 8, 8, 8, 8), Linear, UnsignedIntegerNorm, false),
        0x06 => (P::packed4(b'a', b'r', b'g', b'b', 8, 3, 3, 2), Linear, UnsignedShortNorm, false),
        0x07 => (P::packed1(b'i', 8), Linear, UnsignedByteNorm, false),
        0x08 => (P::packed2(b'a', b'i', 8, 8), Linear, UnsignedShortNorm, false),
        0x09 => (P::compressed(C::Bw1bpp), Linear, UnsignedByteNorm, false),
        0x0A => (P::compressed(C::Yuy2), Linear, UnsignedByteNorm, false),
        0x0B => (P::compressed(C::Uyvy), Linear, UnsignedByteNorm, false),
        0x0C => (P::compressed(C::Pvrtc2bppRgba), Linear, UnsignedByteNorm, false),
        0x0D => (P::compressed(C::Pvrtc4bppRgba), Linear, UnsignedByteNorm, false),

        // GL namespace.
        0x10 => (P::packed4(b'r', b'g', b'b', b'a', 4, 4, 4, 4), Linear, UnsignedShortNorm, false),
        0x11 => (P::packed4(b'r', b'g', b'b', b'a', 5, 5, 5, 1), Linear, UnsignedShortNorm, false),
        0x12 => (P::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0x13 => (P::packed3(b'r', b'g', b'b', 5, 6, 5), Linear, UnsignedShortNorm, false),
        0x14 => (P::packed4(b'r', b'g', b'b', b'x', 5, 5, 5, 1), Linear, UnsignedShortNorm, false),
        0x15 => (P::packed3(b'r', b'g', b'b', 8, 8, 8), Linear, UnsignedByteNorm, false),
        // The GL intensity formats were stored as luminance.
        0x16 => (P::packed1(b'l', 8), Linear, UnsignedByteNorm, false),
        0x17 => (P::packed2(b'l', b'a', 8, 8), Linear, UnsignedByteNorm, false),
        0x18 => (P::compressed(C::Pvrtc2bppRgba), Linear, UnsignedByteNorm, false),
        0x19 => (P::compressed(C::Pvrtc4bppRgba), Linear, UnsignedByteNorm, false),
        0x1A => (P::packed4(b'b', b'g', b'r', b'a', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0x1B => (P::packed1(b'a', 8), Linear, UnsignedByteNorm, false),
        0x1C => (P::compressed(C::PvrtcIi4bpp), Linear, UnsignedByteNorm, false),
        0x1D => (P::compressed(C::PvrtcIi2bpp), Linear, UnsignedByteNorm, false),

        // Direct3D 9 namespace. DXT2 and DXT4 are the premultiplied
        // variants of DXT3 and DXT5.
        0x20 => (P::compressed(C::Dxt1), Linear, UnsignedByteNorm, false),
        0x21 => (P::compressed(C::Dxt2), Linear, UnsignedByteNorm, true),
        0x22 => (P::compressed(C::Dxt3), Linear, UnsignedByteNorm, false),
        0x23 => (P::compressed(C::Dxt4), Linear, UnsignedByteNorm, true),
        0x24 => (P::compressed(C::Dxt5), Linear, UnsignedByteNorm, false),
        0x25 => (P::packed3(b'r', b'g', b'b', 3, 3, 2), Linear, UnsignedIntegerNorm, false),
        0x26 => (P::packed2(b'a', b'l', 4, 4), Linear, UnsignedIntegerNorm, false),
        0x27 => (P::packed3(b'l', b'g', b'r', 6, 5, 5), Linear, SignedIntegerNorm, false),
        0x28 => (P::packed4(b'x', b'l', b'g', b'r', 8, 8, 8, 8), Linear, SignedIntegerNorm, false),
        0x29 => (P::packed4(b'a', b'b', b'g', b'r', 8, 8, 8, 8), Linear, SignedIntegerNorm, false),
        0x2A => (P::packed4(b'a', b'b', b'g', b'r', 2, 10, 10, 10), Linear, UnsignedIntegerNorm, false),
        0x2B => (P::packed4(b'a', b'r', b'g', b'b', 2, 10, 10, 10), Linear, UnsignedIntegerNorm, false),
        0x2C => (P::packed4(b'a', b'r', b'g', b'b', 2, 10, 10, 10), Linear, UnsignedIntegerNorm, false),
        0x2D => (P::packed2(b'g', b'r', 16, 16), Linear, UnsignedIntegerNorm, false),
        0x2E => (P::packed2(b'g', b'r', 16, 16), Linear, SignedIntegerNorm, false),
        0x2F => (P::packed4(b'a', b'b', b'g', b'r', 16, 16, 16, 16), Linear, UnsignedIntegerNorm, false),
        0x30 => (P::packed1(b'r', 16), Linear, SignedFloat, false),
        0x31 => (P::packed2(b'g', b'r', 16, 16), Linear, SignedFloat, false),
        0x32 => (P::packed4(b'a', b'b', b'g', b'r', 16, 16, 16, 16), Linear, SignedFloat, false),
        0x33 => (P::packed1(b'r', 32), Linear, SignedFloat, false),
        0x34 => (P::packed2(b'g', b'r', 32, 32), Linear, SignedFloat, false),
        0x35 => (P::packed4(b'a', b'b', b'g', b'r', 32, 32, 32, 32), Linear, SignedFloat, false),
        0x36 => (P::compressed(C::Etc1), Linear, UnsignedByteNorm, false),

        // Direct3D 9 extension block.
        0x40 => (P::packed1(b'a', 8), Linear, UnsignedIntegerNorm, false),
        0x41 => (P::packed2(b'g', b'r', 8, 8), Linear, SignedIntegerNorm, false),
        0x42 => (P::packed1(b'l', 16), Linear, UnsignedIntegerNorm, false),
        0x43 => (P::packed1(b'l', 8), Linear, UnsignedIntegerNorm, false),
        0x44 => (P::packed2(b'a', b'l', 8, 8), Linear, UnsignedIntegerNorm, false),
        0x45 => (P::compressed(C::Uyvy), Linear, UnsignedByteNorm, false),
        0x46 => (P::compressed(C::Yuy2), Linear, UnsignedByteNorm, false),

        // DXGI namespace.
        0x50 => (P::packed4(b'r', b'g', b'b', b'a', 32, 32, 32, 32), Linear, SignedFloat, false),
        0x51 => (P::packed4(b'r', b'g', b'b', b'a', 32, 32, 32, 32), Linear, UnsignedInteger, false),
        0x52 => (P::packed4(b'r', b'g', b'b', b'a', 32, 32, 32, 32), Linear, SignedInteger, false),
        0x53 => (P::packed3(b'r', b'g', b'b', 32, 32, 32), Linear, SignedFloat, false),
        0x54 => (P::packed3(b'r', b'g', b'b', 32, 32, 32), Linear, UnsignedInteger, false),
        0x55 => (P::packed3(b'r', b'g', b'b', 32, 32, 32), Linear, SignedInteger, false),
        0x56 => (P::packed4(b'r', b'g', b'b', b'a', 16, 16, 16, 16), Linear, SignedFloat, false),
        0x57 => (P::packed4(b'r', b'g', b'b', b'a', 16, 16, 16, 16), Linear, UnsignedShortNorm, false),
        0x58 => (P::packed4(b'r', b'g', b'b', b'a', 16, 16, 16, 16), Linear, UnsignedShort, false),
        0x59 => (P::packed4(b'r', b'g', b'b', b'a', 16, 16, 16, 16), Linear, SignedShortNorm, false),
        0x5A => (P::packed4(b'r', b'g', b'b', b'a', 16, 16, 16, 16), Linear, SignedShort, false),
        0x5B => (P::packed2(b'r', b'g', 32, 32), Linear, SignedFloat, false),
        0x5C => (P::packed2(b'r', b'g', 32, 32), Linear, UnsignedInteger, false),
        0x5D => (P::packed2(b'r', b'g', 32, 32), Linear, SignedInteger, false),
        0x5E => (P::packed4(b'r', b'g', b'b', b'a', 10, 10, 10, 2), Linear, UnsignedIntegerNorm, false),
        0x5F => (P::packed4(b'r', b'g', b'b', b'a', 10, 10, 10, 2), Linear, UnsignedInteger, false),
        0x60 => (P::packed3(b'r', b'g', b'b', 11, 11, 10), Linear, SignedFloat, false),
        0x61 => (P::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0x62 => (P::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8), Srgb, UnsignedByteNorm, false),
        0x63 => (P::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8), Linear, UnsignedByte, false),
        0x64 => (P::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8), Linear, SignedByteNorm, false),
        0x65 => (P::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8), Linear, SignedByte, false),
        0x66 => (P::packed2(b'r', b'g', 16, 16), Linear, SignedFloat, false),
        0x67 => (P::packed2(b'r', b'g', 16, 16), Linear, UnsignedShortNorm, false),
        0x68 => (P::packed2(b'r', b'g', 16, 16), Linear, UnsignedShort, false),
        0x69 => (P::packed2(b'r', b'g', 16, 16), Linear, SignedShortNorm, false),
        0x6A => (P::packed2(b'r', b'g', 16, 16), Linear, SignedShort, false),
        0x6B => (P::packed1(b'r', 32), Linear, SignedFloat, false),
        0x6C => (P::packed1(b'r', 32), Linear, UnsignedInteger, false),
        0x6D => (P::packed1(b'r', 32), Linear, SignedInteger, false),
        0x6E => (P::packed2(b'r', b'g', 8, 8), Linear, UnsignedByteNorm, false),
        0x6F => (P::packed2(b'r', b'g', 8, 8), Linear, UnsignedByte, false),
        0x70 => (P::packed2(b'r', b'g', 8, 8), Linear, SignedByteNorm, false),
        0x71 => (P::packed2(b'r', b'g', 8, 8), Linear, SignedByte, false),
        0x72 => (P::packed1(b'r', 16), Linear, SignedFloat, false),
        0x73 => (P::packed1(b'r', 16), Linear, UnsignedShortNorm, false),
        0x74 => (P::packed1(b'r', 16), Linear, UnsignedShort, false),
        0x75 => (P::packed1(b'r', 16), Linear, SignedShortNorm, false),
        0x76 => (P::packed1(b'r', 16), Linear, SignedShort, false),
        0x77 => (P::packed1(b'r', 8), Linear, UnsignedByteNorm, false),
        0x78 => (P::packed1(b'r', 8), Linear, UnsignedByte, false),
        0x79 => (P::packed1(b'r', 8), Linear, SignedByteNorm, false),
        0x7A => (P::packed1(b'r', 8), Linear, SignedByte, false),
        // Alpha-only stores as a single red channel.
        0x7B => (P::packed1(b'r', 8), Linear, UnsignedByteNorm, false),
        0x7C => (P::compressed(C::Bw1bpp), Linear, UnsignedByteNorm, false),
        0x7D => (P::compressed(C::SharedExponentR9g9b9e5), Linear, SignedFloat, false),
        0x7E => (P::compressed(C::Rgbg8888), Linear, UnsignedByteNorm, false),
        0x7F => (P::compressed(C::Grgb8888), Linear, UnsignedByteNorm, false),

        // DXGI block-compressed namespace. The sRGB BC2 and BC3 variants
        // resolve to DXT1, and BC4 unsigned resolves to sRGB; these quirks
        // are part of the format.
        0x80 => (P::compressed(C::Dxt1), Linear, UnsignedIntegerNorm, false),
        0x81 => (P::compressed(C::Dxt1), Srgb, UnsignedIntegerNorm, false),
        0x82 => (P::compressed(C::Dxt3), Linear, UnsignedIntegerNorm, false),
        0x83 => (P::compressed(C::Dxt1), Srgb, UnsignedIntegerNorm, false),
        0x84 => (P::compressed(C::Dxt5), Linear, UnsignedIntegerNorm, false),
        0x85 => (P::compressed(C::Dxt1), Srgb, UnsignedIntegerNorm, false),
        0x86 => (P::compressed(C::Bc4), Srgb, UnsignedIntegerNorm, false),
        0x87 => (P::compressed(C::Bc4), Linear, SignedIntegerNorm, false),
        0x88 => (P::compressed(C::Bc5), Linear, UnsignedIntegerNorm, false),
        0x89 => (P::compressed(C::Bc5), Linear, SignedIntegerNorm, false),

        // Vector graphics namespace, RGB{A,X} ordering.
        0x90 => (P::packed4(b'r', b'g', b'b', b'x', 8, 8, 8, 8), Srgb, UnsignedByteNorm, false),
        0x91 => (P::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8), Srgb, UnsignedByteNorm, false),
        0x92 => (P::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8), Srgb, UnsignedByteNorm, true),
        0x93 => (P::packed3(b'r', b'g', b'b', 5, 6, 5), Srgb, UnsignedShortNorm, false),
        0x94 => (P::packed4(b'r', b'g', b'b', b'a', 5, 5, 5, 1), Srgb, UnsignedShortNorm, false),
        0x95 => (P::packed4(b'r', b'g', b'b', b'a', 4, 4, 4, 4), Srgb, UnsignedShortNorm, false),
        0x96 => (P::packed1(b'l', 8), Srgb, UnsignedByteNorm, false),
        0x97 => (P::packed4(b'r', b'g', b'b', b'x', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0x98 => (P::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0x99 => (P::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8), Linear, UnsignedByteNorm, true),
        0x9A => (P::packed1(b'l', 8), Linear, UnsignedByteNorm, false),
        0x9B => (P::packed1(b'a', 8), Linear, UnsignedByteNorm, false),
        0x9C => (P::compressed(C::Bw1bpp), Linear, UnsignedByteNorm, false),

        // Vector graphics namespace, {A,X}RGB ordering.
        0xA0 => (P::packed4(b'x', b'r', b'g', b'b', 8, 8, 8, 8), Srgb, UnsignedByteNorm, false),
        0xA1 => (P::packed4(b'a', b'r', b'g', b'b', 8, 8, 8, 8), Srgb, UnsignedByteNorm, false),
        0xA2 => (P::packed4(b'a', b'r', b'g', b'b', 8, 8, 8, 8), Srgb, UnsignedByteNorm, true),
        0xA3 => (P::packed4(b'a', b'r', b'g', b'b', 1, 5, 5, 5), Srgb, UnsignedShortNorm, false),
        0xA4 => (P::packed4(b'a', b'r', b'g', b'b', 4, 4, 4, 4), Srgb, UnsignedShortNorm, false),
        0xA5 => (P::packed4(b'x', b'r', b'g', b'b', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0xA6 => (P::packed4(b'a', b'r', b'g', b'b', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0xA7 => (P::packed4(b'a', b'r', b'g', b'b', 8, 8, 8, 8), Linear, UnsignedByteNorm, true),

        // Vector graphics namespace, BGR{A,X} ordering. The 4:4:4:4 variant
        // maps its alpha channel as 'x'.
        0xB0 => (P::packed4(b'b', b'g', b'r', b'x', 8, 8, 8, 8), Srgb, UnsignedByteNorm, false),
        0xB1 => (P::packed4(b'b', b'g', b'r', b'a', 8, 8, 8, 8), Srgb, UnsignedByteNorm, false),
        0xB2 => (P::packed4(b'b', b'g', b'r', b'a', 8, 8, 8, 8), Srgb, UnsignedByteNorm, true),
        0xB3 => (P::packed3(b'b', b'g', b'r', 5, 6, 5), Srgb, UnsignedShortNorm, false),
        0xB4 => (P::packed4(b'b', b'g', b'r', b'a', 5, 5, 5, 1), Srgb, UnsignedShortNorm, false),
        0xB5 => (P::packed4(b'b', b'g', b'r', b'x', 4, 4, 4, 4), Srgb, UnsignedShortNorm, false),
        0xB6 => (P::packed4(b'b', b'g', b'r', b'x', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0xB7 => (P::packed4(b'b', b'g', b'r', b'a', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0xB8 => (P::packed4(b'b', b'g', b'r', b'a', 8, 8, 8, 8), Linear, UnsignedByteNorm, true),

        // Vector graphics namespace, {A,X}BGR ordering. The 4:4:4:4 variant
        // maps its alpha channel as 'x'.
        0xC0 => (P::packed4(b'x', b'b', b'g', b'r', 8, 8, 8, 8), Srgb, UnsignedByteNorm, false),
        0xC1 => (P::packed4(b'a', b'b', b'g', b'r', 8, 8, 8, 8), Srgb, UnsignedByteNorm, false),
        0xC2 => (P::packed4(b'a', b'b', b'g', b'r', 8, 8, 8, 8), Srgb, UnsignedByteNorm, true),
        0xC3 => (P::packed4(b'a', b'b', b'g', b'r', 1, 5, 5, 5), Srgb, UnsignedShortNorm, false),
        0xC4 => (P::packed4(b'x', b'b', b'g', b'r', 4, 4, 4, 4), Srgb, UnsignedShortNorm, false),
        0xC5 => (P::packed4(b'x', b'b', b'g', b'r', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0xC6 => (P::packed4(b'a', b'b', b'g', b'r', 8, 8, 8, 8), Linear, UnsignedByteNorm, false),
        0xC7 => (P::packed4(b'a', b'b', b'g', b'r', 8, 8, 8, 8), Linear, UnsignedByteNorm, true),

        _ => return Err(DecodeError::UnsupportedLegacyFormat { id }),
    };

    Ok(MappedFormat {
        pixel_format,
        color_space,
        channel_type,
        premultiplied,
    })
}
