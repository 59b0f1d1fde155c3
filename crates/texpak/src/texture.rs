//! The in-memory texture asset produced by decoding.

use std::collections::HashMap;

use texpak_decode::{BumpMap, MetadataBlock, Orientation, TextureHeader, metadata};

/// A fully decoded texture: normalized header, metadata and texel payload.
///
/// The payload is one contiguous buffer organized by mip level, then
/// surface, then face, with depth slices contiguous within each subresource.
/// Every container generation decodes to this same layout, so consumers can
/// address any texture by `(mip, surface, face)` without knowing which
/// on-disk version produced it.
///
/// A `Texture` is only ever handed out fully populated; decoding is
/// all-or-nothing.
#[derive(Debug, Clone)]
pub struct Texture {
    header: TextureHeader,
    metadata: HashMap<(u32, u32), MetadataBlock>,
    data: Vec<u8>,
}

impl Texture {
    /// Allocate an empty texture sized by the header.
    pub(crate) fn from_header(header: TextureHeader) -> Self {
        let data = vec![0; header.data_size()];
        Self {
            header,
            metadata: HashMap::new(),
            data,
        }
    }

    /// The normalized header.
    #[must_use]
    pub fn header(&self) -> &TextureHeader {
        &self.header
    }

    /// The whole texel payload.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte offset of a subresource's first depth slice within the payload.
    #[must_use]
    pub fn data_offset(&self, mip: u32, surface: u32, face: u32) -> usize {
        self.header.data_offset(mip, surface, face)
    }

    /// The bytes of one subresource, covering all of its depth slices.
    ///
    /// Returns `None` when any index is out of range for this texture.
    #[must_use]
    pub fn subresource(&self, mip: u32, surface: u32, face: u32) -> Option<&[u8]> {
        if mip >= self.header.num_mip_maps
            || surface >= self.header.num_surfaces
            || face >= self.header.num_faces
        {
            return None;
        }
        let offset = self.header.data_offset(mip, surface, face);
        Some(&self.data[offset..offset + self.header.face_data_size(mip)])
    }

    /// Insert a metadata block, replacing any previous block with the same
    /// `(fourCC, key)` pair.
    pub(crate) fn add_metadata(&mut self, block: MetadataBlock) {
        self.metadata.insert((block.four_cc, block.key), block);
    }

    /// Look up a metadata block by its `(fourCC, key)` pair.
    #[must_use]
    pub fn metadata(&self, four_cc: u32, key: u32) -> Option<&MetadataBlock> {
        self.metadata.get(&(four_cc, key))
    }

    /// Iterate over all metadata blocks, in no particular order.
    pub fn metadata_blocks(&self) -> impl Iterator<Item = &MetadataBlock> {
        self.metadata.values()
    }

    /// The bump map descriptor, when one is present.
    #[must_use]
    pub fn bump_map(&self) -> Option<BumpMap> {
        self.metadata(metadata::CONTAINER_FOUR_CC, metadata::keys::BUMP_MAP)
            .and_then(BumpMap::from_block)
    }

    /// The storage orientation, when one is present. An absent block means
    /// the default orientation.
    #[must_use]
    pub fn orientation(&self) -> Option<Orientation> {
        self.metadata(metadata::CONTAINER_FOUR_CC, metadata::keys::ORIENTATION)
            .and_then(Orientation::from_block)
    }
}
