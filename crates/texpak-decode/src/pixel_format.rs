//! Pixel format description.
//!
//! A pixel format is a 64-bit identifier. When the high 32 bits are zero the
//! low bits select a named block-compressed layout; otherwise the low four
//! bytes hold up to four channel-name characters and the high four bytes the
//! matching per-channel bit widths. The same identifiers appear verbatim in
//! version 3 container headers.

use crate::error::{DecodeError, DecodeResult};

/// Named block-compressed and packed-special layouts.
///
/// The discriminants are the on-disk identifier values and must not change.
/// These layouts are classified but never decompressed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum CompressedFormat {
    Pvrtc2bppRgb = 0,
    Pvrtc2bppRgba = 1,
    Pvrtc4bppRgb = 2,
    Pvrtc4bppRgba = 3,
    PvrtcIi2bpp = 4,
    PvrtcIi4bpp = 5,
    Etc1 = 6,
    Dxt1 = 7,
    Dxt2 = 8,
    Dxt3 = 9,
    Dxt4 = 10,
    Dxt5 = 11,
    Bc4 = 12,
    Bc5 = 13,
    Bc6 = 14,
    Bc7 = 15,
    Uyvy = 16,
    Yuy2 = 17,
    Bw1bpp = 18,
    SharedExponentR9g9b9e5 = 19,
    Rgbg8888 = 20,
    Grgb8888 = 21,
    Etc2Rgb = 22,
    Etc2Rgba = 23,
    Etc2RgbA1 = 24,
    EacR11 = 25,
    EacRg11 = 26,
}

impl CompressedFormat {
    /// BC1 through BC3 share identifiers with the equivalent DXT layouts.
    pub const BC1: Self = Self::Dxt1;
    pub const BC2: Self = Self::Dxt3;
    pub const BC3: Self = Self::Dxt5;

    /// Look up a layout by its on-disk identifier.
    #[must_use]
    pub fn from_u32(value: u32) -> Option<Self> {
        Some(match value {
            0 => Self::Pvrtc2bppRgb,
            1 => Self::Pvrtc2bppRgba,
            2 => Self::Pvrtc4bppRgb,
            3 => Self::Pvrtc4bppRgba,
            4 => Self::PvrtcIi2bpp,
            5 => Self::PvrtcIi4bpp,
            6 => Self::Etc1,
            7 => Self::Dxt1,
            8 => Self::Dxt2,
            9 => Self::Dxt3,
            10 => Self::Dxt4,
            11 => Self::Dxt5,
            12 => Self::Bc4,
            13 => Self::Bc5,
            14 => Self::Bc6,
            15 => Self::Bc7,
            16 => Self::Uyvy,
            17 => Self::Yuy2,
            18 => Self::Bw1bpp,
            19 => Self::SharedExponentR9g9b9e5,
            20 => Self::Rgbg8888,
            21 => Self::Grgb8888,
            22 => Self::Etc2Rgb,
            23 => Self::Etc2Rgba,
            24 => Self::Etc2RgbA1,
            25 => Self::EacR11,
            26 => Self::EacRg11,
            _ => return None,
        })
    }

    /// Storage rate of the layout. BC6 and BC7 are classified but carry no
    /// size information, so they report zero.
    #[must_use]
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Bw1bpp => 1,
            Self::Pvrtc2bppRgb | Self::Pvrtc2bppRgba | Self::PvrtcIi2bpp => 2,
            Self::Pvrtc4bppRgb
            | Self::Pvrtc4bppRgba
            | Self::PvrtcIi4bpp
            | Self::Etc1
            | Self::EacR11
            | Self::Etc2Rgb
            | Self::Etc2RgbA1
            | Self::Dxt1
            | Self::Bc4 => 4,
            Self::Dxt2
            | Self::Dxt3
            | Self::Dxt4
            | Self::Dxt5
            | Self::Bc5
            | Self::EacRg11
            | Self::Etc2Rgba => 8,
            Self::Uyvy | Self::Yuy2 | Self::Rgbg8888 | Self::Grgb8888 => 16,
            Self::SharedExponentR9g9b9e5 => 32,
            Self::Bc6 | Self::Bc7 => 0,
        }
    }

    /// Smallest addressable block of the layout, in texels.
    ///
    /// Mip level extents are padded up to a multiple of these before byte
    /// sizes are computed.
    #[must_use]
    pub const fn min_block_dimensions(self) -> (u32, u32, u32) {
        match self {
            Self::Dxt1
            | Self::Dxt2
            | Self::Dxt3
            | Self::Dxt4
            | Self::Dxt5
            | Self::Bc4
            | Self::Bc5
            | Self::Etc1
            | Self::Etc2Rgb
            | Self::Etc2Rgba
            | Self::Etc2RgbA1
            | Self::EacR11
            | Self::EacRg11
            | Self::PvrtcIi4bpp => (4, 4, 1),
            Self::Pvrtc4bppRgb | Self::Pvrtc4bppRgba => (8, 8, 1),
            Self::Pvrtc2bppRgb | Self::Pvrtc2bppRgba => (16, 8, 1),
            Self::PvrtcIi2bpp => (8, 4, 1),
            Self::Uyvy | Self::Yuy2 | Self::Rgbg8888 | Self::Grgb8888 => (2, 1, 1),
            Self::Bw1bpp => (8, 1, 1),
            Self::Bc6 | Self::Bc7 | Self::SharedExponentR9g9b9e5 => (1, 1, 1),
        }
    }
}

/// Color space of the stored channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ColorSpace {
    /// Linear RGB.
    Linear = 0,
    /// Nonlinear sRGB encoding.
    Srgb = 1,
}

impl ColorSpace {
    /// Decode the on-disk color space field.
    pub fn from_u32(value: u32) -> DecodeResult<Self> {
        match value {
            0 => Ok(Self::Linear),
            1 => Ok(Self::Srgb),
            _ => Err(DecodeError::InvalidField {
                field: "color_space",
                value,
            }),
        }
    }
}

/// Arithmetic interpretation of each stored channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum VariableType {
    UnsignedByteNorm = 0,
    SignedByteNorm = 1,
    UnsignedByte = 2,
    SignedByte = 3,
    UnsignedShortNorm = 4,
    SignedShortNorm = 5,
    UnsignedShort = 6,
    SignedShort = 7,
    UnsignedIntegerNorm = 8,
    SignedIntegerNorm = 9,
    UnsignedInteger = 10,
    SignedInteger = 11,
    SignedFloat = 12,
    UnsignedFloat = 13,
}

impl VariableType {
    /// Decode the on-disk channel type field.
    pub fn from_u32(value: u32) -> DecodeResult<Self> {
        Ok(match value {
            0 => Self::UnsignedByteNorm,
            1 => Self::SignedByteNorm,
            2 => Self::UnsignedByte,
            3 => Self::SignedByte,
            4 => Self::UnsignedShortNorm,
            5 => Self::SignedShortNorm,
            6 => Self::UnsignedShort,
            7 => Self::SignedShort,
            8 => Self::UnsignedIntegerNorm,
            9 => Self::SignedIntegerNorm,
            10 => Self::UnsignedInteger,
            11 => Self::SignedInteger,
            12 => Self::SignedFloat,
            13 => Self::UnsignedFloat,
            _ => {
                return Err(DecodeError::InvalidField {
                    field: "channel_type",
                    value,
                });
            }
        })
    }

    /// Whether values are signed.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        (self as u32) < 12 && (self as u32) & 1 != 0 || matches!(self, Self::SignedFloat)
    }

    /// Whether integer values are normalized to the unit range.
    #[must_use]
    pub const fn is_normalized(self) -> bool {
        (self as u32) < 10 && (self as u32) & 2 == 0
    }
}

/// A 64-bit pixel format identifier.
///
/// See the module docs for the encoding. Equality is plain identifier
/// equality, so `r8g8b8a8` and `b8g8r8a8` are distinct formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormat(u64);

impl PixelFormat {
    /// Wrap a raw 64-bit identifier, for example one read from a header.
    #[must_use]
    pub const fn from_id(id: u64) -> Self {
        Self(id)
    }

    /// A named block-compressed layout.
    #[must_use]
    pub const fn compressed(format: CompressedFormat) -> Self {
        Self(format as u64)
    }

    /// A one-channel packed layout, e.g. `packed1(b'r', 8)`.
    #[must_use]
    pub const fn packed1(c1: u8, b1: u8) -> Self {
        Self::packed4(c1, 0, 0, 0, b1, 0, 0, 0)
    }

    /// A two-channel packed layout.
    #[must_use]
    pub const fn packed2(c1: u8, c2: u8, b1: u8, b2: u8) -> Self {
        Self::packed4(c1, c2, 0, 0, b1, b2, 0, 0)
    }

    /// A three-channel packed layout.
    #[must_use]
    pub const fn packed3(c1: u8, c2: u8, c3: u8, b1: u8, b2: u8, b3: u8) -> Self {
        Self::packed4(c1, c2, c3, 0, b1, b2, b3, 0)
    }

    /// A four-channel packed layout, e.g. `packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8)`.
    #[must_use]
    pub const fn packed4(c1: u8, c2: u8, c3: u8, c4: u8, b1: u8, b2: u8, b3: u8, b4: u8) -> Self {
        Self(
            c1 as u64
                | (c2 as u64) << 8
                | (c3 as u64) << 16
                | (c4 as u64) << 24
                | (b1 as u64) << 32
                | (b2 as u64) << 40
                | (b3 as u64) << 48
                | (b4 as u64) << 56,
        )
    }

    /// The raw 64-bit identifier as stored on disk.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Whether the identifier selects a named compressed layout rather than
    /// a packed channel description.
    #[must_use]
    pub const fn is_compressed(self) -> bool {
        self.0 >> 32 == 0
    }

    /// The compressed layout this identifier selects, if it is a known one.
    #[must_use]
    pub fn compressed_format(self) -> Option<CompressedFormat> {
        if self.is_compressed() {
            CompressedFormat::from_u32(self.0 as u32)
        } else {
            None
        }
    }

    /// The name character of a channel (`b'r'`, `b'g'`, ...), or 0 when the
    /// channel is unused. Only meaningful for packed layouts.
    #[must_use]
    pub const fn channel_content(self, channel: usize) -> u8 {
        if channel >= 4 {
            return 0;
        }
        (self.0 >> (8 * channel)) as u8
    }

    /// The bit width of a channel, or 0 when the channel is unused.
    #[must_use]
    pub const fn channel_bits(self, channel: usize) -> u8 {
        if channel >= 4 {
            return 0;
        }
        (self.0 >> (32 + 8 * channel)) as u8
    }

    /// Number of channels in a packed layout.
    #[must_use]
    pub const fn channel_count(self) -> u8 {
        if self.channel_bits(3) != 0 {
            4
        } else if self.channel_bits(2) != 0 {
            3
        } else if self.channel_bits(1) != 0 {
            2
        } else if self.channel_bits(0) != 0 {
            1
        } else {
            0
        }
    }

    /// Total bit width of a packed layout (sum of the channel widths).
    #[must_use]
    pub const fn packed_bits_per_pixel(self) -> u32 {
        self.channel_bits(0) as u32
            + self.channel_bits(1) as u32
            + self.channel_bits(2) as u32
            + self.channel_bits(3) as u32
    }
}

impl From<CompressedFormat> for PixelFormat {
    fn from(format: CompressedFormat) -> Self {
        Self::compressed(format)
    }
}
