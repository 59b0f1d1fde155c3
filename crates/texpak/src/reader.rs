//! Container decoding: version sniffing, header deserialization, metadata
//! streaming and payload placement.
//!
//! Decoding is a single pass of blocking reads. The stream is never rewound,
//! buffered or retried; any failed read aborts the whole decode.

use std::io;

use tracing::{debug, trace, warn};

use texpak_decode::{
    ColorSpace, DecodeError, HEADER_SIZE_V1, HEADER_SIZE_V2, LEGACY_MAGIC, LegacyFlags,
    LegacyHeader, MetadataBlock, PixelFormat, TextureHeader, V3_MAGIC, VariableType,
};

use crate::error::{Error, Result};
use crate::stream::Stream;
use crate::texture::Texture;

/// Container generations distinguishable from the leading version word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V1,
    V2,
    V3,
}

/// Read the 4-byte version word and classify the container generation.
///
/// Legacy containers lead with their header size, version 3 with a magic
/// value. The stream is left positioned just past the word; callers that
/// only want to peek must supply a rewindable stream. An unknown word is a
/// hard error, never a guess.
pub fn sniff_version(stream: &mut impl Stream) -> Result<Version> {
    let value = header_field(read_u32(stream), "version")?;
    match value {
        V3_MAGIC => Ok(Version::V3),
        HEADER_SIZE_V1 => Ok(Version::V1),
        HEADER_SIZE_V2 => Ok(Version::V2),
        _ => Err(DecodeError::UnrecognizedVersion { value }.into()),
    }
}

/// Decode one texture container from the stream.
///
/// All three container generations are handled transparently; the returned
/// [`Texture`] always uses the normalized in-memory layout. Decoding is
/// all-or-nothing, so any error means no texture.
pub fn read_texture(stream: &mut impl Stream) -> Result<Texture> {
    if !stream.is_readable() {
        return Err(Error::UnreadableSource);
    }

    let version = sniff_version(stream)?;
    debug!(?version, "reading texture container");

    let texture = match version {
        Version::V3 => read_v3(stream),
        Version::V1 | Version::V2 => read_legacy(stream, version),
    }?;

    debug!(
        width = texture.header().width,
        height = texture.header().height,
        mips = texture.header().num_mip_maps,
        payload_bytes = texture.data().len(),
        "texture decoded"
    );
    Ok(texture)
}

/// Read the version 3 header fields, metadata section and payload.
fn read_v3(stream: &mut impl Stream) -> Result<Texture> {
    let flags = header_field(read_u32(stream), "flags")?;
    let pixel_format = PixelFormat::from_id(header_field(read_u64(stream), "pixel format")?);
    let color_space = ColorSpace::from_u32(header_field(read_u32(stream), "color space")?)?;
    let channel_type = VariableType::from_u32(header_field(read_u32(stream), "channel type")?)?;
    let height = header_field(read_u32(stream), "height")?;
    let width = header_field(read_u32(stream), "width")?;
    let depth = header_field(read_u32(stream), "depth")?;
    let num_surfaces = header_field(read_u32(stream), "surface count")?;
    let num_faces = header_field(read_u32(stream), "face count")?;
    let num_mip_maps = header_field(read_u32(stream), "mip map count")?;
    // Only drives the metadata loop below; the in-memory header stores zero.
    let meta_data_size = header_field(read_u32(stream), "metadata size")?;

    let header = TextureHeader {
        flags,
        pixel_format,
        color_space,
        channel_type,
        width,
        height,
        depth,
        num_surfaces,
        num_faces,
        num_mip_maps,
        meta_data_size: 0,
    };
    let mut texture = Texture::from_header(header);

    if meta_data_size > 0 {
        for block in read_metadata(stream, meta_data_size)? {
            texture.add_metadata(block);
        }
    }

    let expected = texture.data().len();
    payload_read(stream.read_exact(texture.data_mut()), expected)?;
    Ok(texture)
}

/// Read metadata blocks until `declared` bytes are consumed.
///
/// A block consumes 12 prefix bytes plus its payload. Consuming past the
/// declared size means the section is corrupt; it is never truncated or
/// accepted silently.
fn read_metadata(stream: &mut impl Stream, declared: u32) -> Result<Vec<MetadataBlock>> {
    if declared == 0 {
        return Err(DecodeError::CorruptMetadata {
            declared: 0,
            consumed: 0,
        }
        .into());
    }

    let mut blocks = Vec::new();
    let mut consumed: u64 = 0;
    while consumed < u64::from(declared) {
        let four_cc = metadata_field(read_u32(stream), "block fourCC")?;
        let key = metadata_field(read_u32(stream), "block key")?;
        let data_size = metadata_field(read_u32(stream), "block size")?;
        let mut data = vec![0; data_size as usize];
        metadata_field(stream.read_exact(&mut data), "block payload")?;

        trace!(four_cc, key, size = data_size, "metadata block");
        consumed += u64::from(MetadataBlock::PREFIX_SIZE) + u64::from(data_size);
        blocks.push(MetadataBlock { four_cc, key, data });
    }

    if consumed > u64::from(declared) {
        return Err(DecodeError::CorruptMetadata {
            declared,
            consumed: u32::try_from(consumed).unwrap_or(u32::MAX),
        }
        .into());
    }
    Ok(blocks)
}

/// Read a version 1 or 2 header and payload.
fn read_legacy(stream: &mut impl Stream, version: Version) -> Result<Texture> {
    let mut legacy = LegacyHeader {
        header_size: match version {
            Version::V1 => HEADER_SIZE_V1,
            _ => HEADER_SIZE_V2,
        },
        height: header_field(read_u32(stream), "height")?,
        width: header_field(read_u32(stream), "width")?,
        mip_map_count: header_field(read_u32(stream), "mip map count")?,
        pixel_format_and_flags: header_field(read_u32(stream), "pixel format and flags")?,
        data_size: header_field(read_u32(stream), "data size")?,
        bit_count: header_field(read_u32(stream), "bit count")?,
        red_mask: header_field(read_u32(stream), "red mask")?,
        green_mask: header_field(read_u32(stream), "green mask")?,
        blue_mask: header_field(read_u32(stream), "blue mask")?,
        alpha_mask: header_field(read_u32(stream), "alpha mask")?,
        magic: LEGACY_MAGIC,
        num_surfaces: 1,
    };
    if version == Version::V2 {
        legacy.magic = header_field(read_u32(stream), "magic")?;
        legacy.num_surfaces = header_field(read_u32(stream), "surface count")?;
    }

    let flags = LegacyFlags::decode(legacy.pixel_format_and_flags);
    let faces = if flags.cube_map { 6 } else { 1 };
    if legacy.num_surfaces / faces == 0 {
        // Some legacy encoders emitted a zero surface count; the conversion
        // repairs it to one.
        warn!(
            raw_surfaces = legacy.num_surfaces,
            cube_map = flags.cube_map,
            "legacy surface count computes to zero, assuming one"
        );
    }

    let (header, synthesized) = legacy.to_texture_header()?;
    let mut texture = Texture::from_header(header);
    for block in synthesized {
        texture.add_metadata(block);
    }

    fill_legacy_payload(stream, &mut texture)?;
    Ok(texture)
}

/// Scatter a legacy payload into the normalized in-memory layout.
///
/// Legacy containers store the payload depth-major across the whole image:
/// for each surface and depth slice, a full set of faces and mip levels.
/// The in-memory layout is mip-major, so each read lands at the matching
/// subresource offset plus its depth slice. The result is byte-identical to
/// decoding an equivalent version 3 container.
fn fill_legacy_payload(stream: &mut impl Stream, texture: &mut Texture) -> Result<()> {
    let header = texture.header().clone();
    let data = texture.data_mut();

    for surface in 0..header.num_surfaces {
        for slice in 0..header.depth {
            for face in 0..header.num_faces {
                for mip in 0..header.num_mip_maps {
                    let slice_size = header.face_data_size(mip) / header.depth as usize;
                    let offset =
                        header.data_offset(mip, surface, face) + slice as usize * slice_size;
                    payload_read(
                        stream.read_exact(&mut data[offset..offset + slice_size]),
                        slice_size,
                    )?;
                }
            }
        }
    }
    Ok(())
}

fn read_u32(stream: &mut impl Stream) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    stream.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64(stream: &mut impl Stream) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    stream.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

fn header_field<T>(result: io::Result<T>, context: &'static str) -> Result<T> {
    result.map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::TruncatedHeader { context },
        _ => Error::Io(e),
    })
}

fn metadata_field<T>(result: io::Result<T>, context: &'static str) -> Result<T> {
    result.map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::TruncatedMetadata { context },
        _ => Error::Io(e),
    })
}

fn payload_read<T>(result: io::Result<T>, expected: usize) -> Result<T> {
    result.map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::TruncatedPayload { expected },
        _ => Error::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::MemoryStream;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn rgba8_header(width: u32, height: u32) -> TextureHeader {
        TextureHeader {
            flags: 0,
            pixel_format: PixelFormat::packed4(b'r', b'g', b'b', b'a', 8, 8, 8, 8),
            color_space: ColorSpace::Linear,
            channel_type: VariableType::UnsignedByteNorm,
            width,
            height,
            depth: 1,
            num_surfaces: 1,
            num_faces: 1,
            num_mip_maps: 1,
            meta_data_size: 0,
        }
    }

    /// Serialize a version 3 container from its parts.
    fn encode_v3(
        header: &TextureHeader,
        meta_data_size: u32,
        metadata: &[u8],
        payload: &[u8],
    ) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&V3_MAGIC.to_le_bytes());
        bytes.extend_from_slice(&header.flags.to_le_bytes());
        bytes.extend_from_slice(&header.pixel_format.id().to_le_bytes());
        bytes.extend_from_slice(&(header.color_space as u32).to_le_bytes());
        bytes.extend_from_slice(&(header.channel_type as u32).to_le_bytes());
        bytes.extend_from_slice(&header.height.to_le_bytes());
        bytes.extend_from_slice(&header.width.to_le_bytes());
        bytes.extend_from_slice(&header.depth.to_le_bytes());
        bytes.extend_from_slice(&header.num_surfaces.to_le_bytes());
        bytes.extend_from_slice(&header.num_faces.to_le_bytes());
        bytes.extend_from_slice(&header.num_mip_maps.to_le_bytes());
        bytes.extend_from_slice(&meta_data_size.to_le_bytes());
        bytes.extend_from_slice(metadata);
        bytes.extend_from_slice(payload);
        bytes
    }

    fn encode_metadata_block(four_cc: u32, key: u32, data: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&four_cc.to_le_bytes());
        bytes.extend_from_slice(&key.to_le_bytes());
        bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(data);
        bytes
    }

    /// Serialize a legacy container. `num_surfaces` is ignored for V1.
    fn encode_legacy(
        version: Version,
        width: u32,
        height: u32,
        mip_map_count: u32,
        pixel_format_and_flags: u32,
        num_surfaces: u32,
        payload: &[u8],
    ) -> Vec<u8> {
        let header_size: u32 = match version {
            Version::V1 => HEADER_SIZE_V1,
            _ => HEADER_SIZE_V2,
        };
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&header_size.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&mip_map_count.to_le_bytes());
        bytes.extend_from_slice(&pixel_format_and_flags.to_le_bytes());
        bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&32u32.to_le_bytes());
        for _ in 0..4 {
            bytes.extend_from_slice(&0u32.to_le_bytes());
        }
        if matches!(version, Version::V2) {
            bytes.extend_from_slice(&LEGACY_MAGIC.to_le_bytes());
            bytes.extend_from_slice(&num_surfaces.to_le_bytes());
        }
        bytes.extend_from_slice(payload);
        bytes
    }

    // Legacy format id 0x12 is linear r8g8b8a8, unsigned byte normalized.
    const LEGACY_RGBA8: u32 = 0x12;
    const LEGACY_FLAG_BUMP: u32 = 1 << 10;
    const LEGACY_FLAG_CUBE: u32 = 1 << 12;
    const LEGACY_FLAG_VOLUME: u32 = 1 << 14;
    const LEGACY_FLAG_FLIP: u32 = 1 << 16;

    #[test]
    fn test_sniff_all_versions() {
        let v3 = encode_v3(&rgba8_header(1, 1), 0, &[], &[0; 4]);
        let mut stream = MemoryStream::new(v3);
        assert_eq!(sniff_version(&mut stream).unwrap(), Version::V3);

        let mut stream = MemoryStream::new(HEADER_SIZE_V1.to_le_bytes().to_vec());
        assert_eq!(sniff_version(&mut stream).unwrap(), Version::V1);

        let mut stream = MemoryStream::new(HEADER_SIZE_V2.to_le_bytes().to_vec());
        assert_eq!(sniff_version(&mut stream).unwrap(), Version::V2);
    }

    #[test]
    fn test_sniff_rejects_unknown_version() {
        let mut stream = MemoryStream::new(0xDEAD_BEEFu32.to_le_bytes().to_vec());
        assert!(matches!(
            sniff_version(&mut stream),
            Err(Error::Decode(DecodeError::UnrecognizedVersion {
                value: 0xDEAD_BEEF
            }))
        ));
    }

    #[test]
    fn test_v3_smallest_texture() {
        init_tracing();
        // A 4x4 r8g8b8a8 texture with no metadata and a 64 byte payload.
        let payload: Vec<u8> = (0..64).collect();
        let bytes = encode_v3(&rgba8_header(4, 4), 0, &[], &payload);
        assert_eq!(bytes.len(), 52 + 64);

        let texture = read_texture(&mut MemoryStream::new(bytes)).unwrap();
        assert_eq!(texture.header(), &rgba8_header(4, 4));
        assert_eq!(texture.data_offset(0, 0, 0), 0);
        assert_eq!(texture.data().len(), 64);
        assert_eq!(texture.data(), payload.as_slice());
    }

    #[test]
    fn test_v3_round_trip() {
        let header = TextureHeader {
            num_surfaces: 2,
            num_mip_maps: 3,
            ..rgba8_header(4, 4)
        };
        let payload: Vec<u8> = (0..header.data_size()).map(|i| (i % 251) as u8).collect();
        let bytes = encode_v3(&header, 0, &[], &payload);

        let first = read_texture(&mut MemoryStream::new(bytes)).unwrap();
        let reencoded = encode_v3(first.header(), 0, &[], first.data());
        let second = read_texture(&mut MemoryStream::new(reencoded)).unwrap();

        assert_eq!(first.header(), second.header());
        assert_eq!(first.data(), second.data());
        assert_eq!(second.data(), payload.as_slice());
    }

    #[test]
    fn test_decode_is_idempotent() {
        let bytes = encode_v3(&rgba8_header(2, 2), 0, &[], &[7; 16]);

        let first = read_texture(&mut MemoryStream::new(bytes.clone())).unwrap();
        let second = read_texture(&mut MemoryStream::new(bytes)).unwrap();
        assert_eq!(first.header(), second.header());
        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn test_v3_metadata_blocks() {
        let mut metadata = encode_metadata_block(0x4142_4344, 9, &[1, 2, 3, 4]);
        // Zero length block payloads are valid.
        metadata.extend_from_slice(&encode_metadata_block(0x4142_4344, 10, &[]));
        let declared = metadata.len() as u32;

        let bytes = encode_v3(&rgba8_header(1, 1), declared, &metadata, &[0; 4]);
        let texture = read_texture(&mut MemoryStream::new(bytes)).unwrap();

        assert_eq!(texture.metadata(0x4142_4344, 9).unwrap().data, vec![1, 2, 3, 4]);
        assert!(texture.metadata(0x4142_4344, 10).unwrap().data.is_empty());
        assert_eq!(texture.metadata_blocks().count(), 2);
        // The declared size is not retained once the texture is in memory.
        assert_eq!(texture.header().meta_data_size, 0);
    }

    #[test]
    fn test_v3_metadata_overrun_is_corrupt() {
        // One 24 byte block against a declared size of 20.
        let metadata = encode_metadata_block(0x4142_4344, 9, &[0; 12]);
        assert_eq!(metadata.len(), 24);

        let bytes = encode_v3(&rgba8_header(1, 1), 20, &metadata, &[0; 4]);
        assert!(matches!(
            read_texture(&mut MemoryStream::new(bytes)),
            Err(Error::Decode(DecodeError::CorruptMetadata {
                declared: 20,
                consumed: 24
            }))
        ));
    }

    #[test]
    fn test_v3_truncated_metadata() {
        // Declared size promises a block the stream does not contain.
        let bytes = encode_v3(&rgba8_header(1, 1), 16, &[], &[]);
        assert!(matches!(
            read_texture(&mut MemoryStream::new(bytes)),
            Err(Error::TruncatedMetadata { .. })
        ));
    }

    #[test]
    fn test_v3_truncated_payload() {
        let bytes = encode_v3(&rgba8_header(4, 4), 0, &[], &[0; 10]);
        assert!(matches!(
            read_texture(&mut MemoryStream::new(bytes)),
            Err(Error::TruncatedPayload { expected: 64 })
        ));
    }

    #[test]
    fn test_v3_truncated_header() {
        let mut bytes = encode_v3(&rgba8_header(4, 4), 0, &[], &[0; 64]);
        bytes.truncate(20);
        assert!(matches!(
            read_texture(&mut MemoryStream::new(bytes)),
            Err(Error::TruncatedHeader { .. })
        ));
    }

    #[test]
    fn test_v3_invalid_color_space() {
        let mut bytes = encode_v3(&rgba8_header(1, 1), 0, &[], &[0; 4]);
        // The color space field sits after magic, flags and pixel format.
        bytes[16..20].copy_from_slice(&7u32.to_le_bytes());
        assert!(matches!(
            read_texture(&mut MemoryStream::new(bytes)),
            Err(Error::Decode(DecodeError::InvalidField {
                field: "color space",
                value: 7
            }))
        ));
    }

    #[test]
    fn test_unreadable_source() {
        struct ClosedStream;
        impl Stream for ClosedStream {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Ok(0)
            }
            fn is_readable(&self) -> bool {
                false
            }
        }

        assert!(matches!(
            read_texture(&mut ClosedStream),
            Err(Error::UnreadableSource)
        ));
    }

    #[test]
    fn test_v1_decodes_with_implied_surface() {
        init_tracing();
        // Mip map count 0 means just the base level.
        let payload = vec![3u8; 16];
        let bytes = encode_legacy(Version::V1, 2, 2, 0, LEGACY_RGBA8, 0, &payload);
        assert_eq!(bytes.len(), 44 + 16);

        let texture = read_texture(&mut MemoryStream::new(bytes)).unwrap();
        assert_eq!(texture.header().num_surfaces, 1);
        assert_eq!(texture.header().num_faces, 1);
        assert_eq!(texture.header().num_mip_maps, 1);
        assert_eq!(texture.data(), payload.as_slice());
    }

    #[test]
    fn test_v1_unmapped_format_fails() {
        let bytes = encode_legacy(Version::V1, 4, 4, 0, 0xFF, 0, &[0; 64]);
        assert!(matches!(
            read_texture(&mut MemoryStream::new(bytes)),
            Err(Error::Decode(DecodeError::UnsupportedLegacyFormat { id: 0xFF }))
        ));
    }

    #[test]
    fn test_v2_cube_map_surfaces_become_faces() {
        let payload = vec![0u8; 6 * 16];
        let bytes = encode_legacy(
            Version::V2,
            2,
            2,
            0,
            LEGACY_RGBA8 | LEGACY_FLAG_CUBE,
            6,
            &payload,
        );

        let texture = read_texture(&mut MemoryStream::new(bytes)).unwrap();
        assert_eq!(texture.header().num_faces, 6);
        assert_eq!(texture.header().num_surfaces, 1);
    }

    #[test]
    fn test_legacy_payload_reordered_to_match_v3() {
        // A cube map with a mip chain: the legacy payload interleaves mips
        // within each face, while the normalized layout is mip-major.
        let header = TextureHeader {
            num_faces: 6,
            num_mip_maps: 2,
            ..rgba8_header(2, 2)
        };

        let mut legacy_payload = Vec::new();
        for face in 0..6u32 {
            for mip in 0..2u32 {
                let fill = (10 * face + mip) as u8;
                legacy_payload.extend(std::iter::repeat_n(fill, header.face_data_size(mip)));
            }
        }
        let bytes = encode_legacy(
            Version::V2,
            2,
            2,
            1,
            LEGACY_RGBA8 | LEGACY_FLAG_CUBE,
            6,
            &legacy_payload,
        );
        let texture = read_texture(&mut MemoryStream::new(bytes)).unwrap();

        for face in 0..6u32 {
            for mip in 0..2u32 {
                let fill = (10 * face + mip) as u8;
                let subresource = texture.subresource(mip, 0, face).unwrap();
                assert!(
                    subresource.iter().all(|&byte| byte == fill),
                    "face {face} mip {mip} landed in the wrong place"
                );
            }
        }

        // The same texels encoded as version 3 decode to identical bytes.
        let mut v3_payload = Vec::new();
        for mip in 0..2u32 {
            for face in 0..6u32 {
                let fill = (10 * face + mip) as u8;
                v3_payload.extend(std::iter::repeat_n(fill, header.face_data_size(mip)));
            }
        }
        let v3_bytes = encode_v3(&header, 0, &[], &v3_payload);
        let v3_texture = read_texture(&mut MemoryStream::new(v3_bytes)).unwrap();
        assert_eq!(texture.data(), v3_texture.data());
        assert_eq!(texture.header(), v3_texture.header());
    }

    #[test]
    fn test_v2_volume_depth_slices_stay_contiguous() {
        // Two depth slices of a 2x2 volume, stored slice after slice.
        let mut payload = vec![1u8; 16];
        payload.extend_from_slice(&[2u8; 16]);
        let bytes = encode_legacy(
            Version::V2,
            2,
            2,
            0,
            LEGACY_RGBA8 | LEGACY_FLAG_VOLUME,
            2,
            &payload,
        );

        let texture = read_texture(&mut MemoryStream::new(bytes)).unwrap();
        assert_eq!(texture.header().depth, 2);
        assert_eq!(texture.header().num_surfaces, 1);
        assert_eq!(texture.data(), payload.as_slice());
    }

    #[test]
    fn test_legacy_bump_and_flip_synthesize_metadata() {
        let bytes = encode_legacy(
            Version::V2,
            2,
            2,
            0,
            LEGACY_RGBA8 | LEGACY_FLAG_BUMP | LEGACY_FLAG_FLIP,
            1,
            &[0; 16],
        );
        let texture = read_texture(&mut MemoryStream::new(bytes)).unwrap();

        let bump = texture.bump_map().unwrap();
        assert_eq!(bump.scale, 1.0);
        assert_eq!(bump.order, "xyz");
        assert!(texture.orientation().unwrap().up);
    }

    #[test]
    fn test_legacy_truncated_payload() {
        let bytes = encode_legacy(Version::V2, 4, 4, 0, LEGACY_RGBA8, 1, &[0; 10]);
        assert!(matches!(
            read_texture(&mut MemoryStream::new(bytes)),
            Err(Error::TruncatedPayload { .. })
        ));
    }

    #[test]
    fn test_legacy_premultiplied_sets_flag() {
        // Format 0x21 is the premultiplied DXT variant; 4x4 is one block.
        let bytes = encode_legacy(Version::V2, 4, 4, 0, 0x21, 1, &[0; 16]);
        let texture = read_texture(&mut MemoryStream::new(bytes)).unwrap();
        assert!(texture.header().is_premultiplied());
    }
}
