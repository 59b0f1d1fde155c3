//! Reader for the texpak multi-generation texture container format.
//!
//! The container exists in three on-disk generations: two legacy
//! fixed-layout headers (versions 1 and 2) and a modern self-describing
//! header (version 3) carrying an arbitrary metadata section. This crate
//! sniffs the generation from the byte stream, decodes the header, streams
//! the metadata and places the texel payload, producing one normalized
//! [`Texture`] regardless of which generation was read.
//!
//! # Design principles
//!
//! - **Version transparent**: callers never state the generation up front
//! - **All-or-nothing**: any read or validation failure aborts the decode;
//!   no partial texture and no guessed default ever escapes
//! - **Stream agnostic**: anything implementing [`Stream`] can feed the
//!   decoder; it needs only blocking reads, never seeks
//!
//! # Example
//!
//! ```
//! use texpak::{MemoryStream, read_texture};
//!
//! # fn load(container_bytes: Vec<u8>) -> texpak::Result<()> {
//! let mut stream = MemoryStream::new(container_bytes);
//! let texture = read_texture(&mut stream)?;
//!
//! // Address any subresource uniformly, whatever the source generation.
//! let base_level = texture.subresource(0, 0, 0);
//! # Ok(())
//! # }
//! ```

mod error;
mod reader;
pub mod stream;
mod texture;

pub use error::{Error, Result};
pub use reader::{Version, read_texture, sniff_version};
pub use stream::{MemoryStream, ReaderStream, Stream};
pub use texture::Texture;

// Re-export decode types for convenience.
pub use texpak_decode::{
    BumpMap, ColorSpace, CompressedFormat, DecodeError, MetadataBlock, Orientation, PixelFormat,
    TextureHeader, VariableType,
};
