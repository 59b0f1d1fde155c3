//! Data model and pure decoding logic for the texpak texture container.
//!
//! The container format spans three header generations. Versions 1 and 2 are
//! fixed-layout headers that describe pixel layouts with a single legacy
//! identifier; version 3 is self-describing, with orthogonal pixel layout,
//! color space and channel type fields plus an arbitrary metadata section.
//!
//! This crate holds everything that can be computed without touching a byte
//! stream: the pixel format model, the normalized header with its subresource
//! size and offset arithmetic, metadata block types, and the mapping from
//! legacy format identifiers to the normalized description. Stream handling
//! lives in the `texpak` crate.

pub mod error;
pub mod header;
pub mod legacy;
pub mod metadata;
pub mod pixel_format;

pub use error::{DecodeError, DecodeResult};
pub use header::{TextureHeader, V3_HEADER_SIZE, V3_MAGIC};
pub use legacy::{
    HEADER_SIZE_V1, HEADER_SIZE_V2, LEGACY_MAGIC, LegacyFlags, LegacyHeader, MappedFormat,
    map_legacy_format,
};
pub use metadata::{BumpMap, CONTAINER_FOUR_CC, MetadataBlock, Orientation};
pub use pixel_format::{ColorSpace, CompressedFormat, PixelFormat, VariableType};
