//! Attribute layout packing into one contiguous binary buffer
//!
//! Streams are written back to back in a fixed order (positions, normals,
//! texture coordinates, indices) with no padding between them. Floats are
//! stored as little-endian f32, indices as little-endian u16.

use crate::mesh::Mesh;

/// One logical attribute stream of a mesh
///
/// The discriminant doubles as the accessor and buffer view index in the
/// scene template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeStream {
    Positions = 0,
    Normals = 1,
    TexCoords = 2,
    Indices = 3,
}

impl AttributeStream {
    /// All streams, in buffer order
    pub const ALL: [AttributeStream; 4] = [
        AttributeStream::Positions,
        AttributeStream::Normals,
        AttributeStream::TexCoords,
        AttributeStream::Indices,
    ];

    /// Accessor / buffer view index of this stream
    pub fn index(self) -> usize {
        self as usize
    }

    /// Components per element
    pub fn components(self) -> usize {
        match self {
            AttributeStream::Positions | AttributeStream::Normals => 3,
            AttributeStream::TexCoords => 2,
            AttributeStream::Indices => 1,
        }
    }

    /// Bytes per component (f32 attributes, u16 indices)
    pub fn component_size(self) -> usize {
        match self {
            AttributeStream::Indices => size_of::<u16>(),
            _ => size_of::<f32>(),
        }
    }

    /// Bytes occupied by `count` elements
    pub fn byte_length(self, count: usize) -> usize {
        count * self.components() * self.component_size()
    }
}

/// Placement of one stream inside the packed buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferRegion {
    pub byte_offset: usize,
    pub byte_length: usize,
}

impl BufferRegion {
    /// First byte past the region
    pub fn end(&self) -> usize {
        self.byte_offset + self.byte_length
    }
}

/// Packed mesh bytes plus the region table for each stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    data: Vec<u8>,
    regions: [BufferRegion; 4],
}

impl PackedBuffer {
    /// Region of a stream
    pub fn region(&self, stream: AttributeStream) -> BufferRegion {
        self.regions[stream.index()]
    }

    /// Regions in buffer order
    pub fn regions(&self) -> &[BufferRegion; 4] {
        &self.regions
    }

    /// Bytes of a single stream
    pub fn stream_bytes(&self, stream: AttributeStream) -> &[u8] {
        let region = self.region(stream);
        &self.data[region.byte_offset..region.end()]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn byte_length(&self) -> usize {
        self.data.len()
    }
}

/// Appends streams to a byte buffer, recording where each one landed
struct BufferPacker {
    buffer: Vec<u8>,
}

impl BufferPacker {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Pack Vec3 data (positions, normals)
    fn pack_vec3(&mut self, data: &[[f32; 3]]) -> BufferRegion {
        let offset = self.buffer.len();
        self.extend_f32(bytemuck::cast_slice(data));
        self.region_from(offset)
    }

    /// Pack Vec2 data (UVs)
    fn pack_vec2(&mut self, data: &[[f32; 2]]) -> BufferRegion {
        let offset = self.buffer.len();
        self.extend_f32(bytemuck::cast_slice(data));
        self.region_from(offset)
    }

    /// Pack u16 indices
    fn pack_indices_u16(&mut self, indices: &[u16]) -> BufferRegion {
        let offset = self.buffer.len();
        if cfg!(target_endian = "little") {
            self.buffer.extend_from_slice(bytemuck::cast_slice(indices));
        } else {
            for idx in indices {
                self.buffer.extend_from_slice(&idx.to_le_bytes());
            }
        }
        self.region_from(offset)
    }

    fn extend_f32(&mut self, floats: &[f32]) {
        if cfg!(target_endian = "little") {
            self.buffer.extend_from_slice(bytemuck::cast_slice(floats));
        } else {
            for f in floats {
                self.buffer.extend_from_slice(&f.to_le_bytes());
            }
        }
    }

    fn region_from(&self, offset: usize) -> BufferRegion {
        BufferRegion {
            byte_offset: offset,
            byte_length: self.buffer.len() - offset,
        }
    }
}

/// Serialize a mesh into one contiguous little-endian buffer
///
/// Region `i + 1` always starts where region `i` ends, and the last region
/// ends at the buffer length.
pub fn pack(mesh: &Mesh) -> PackedBuffer {
    let count = mesh.attribute_count();
    let capacity = AttributeStream::Positions.byte_length(count)
        + AttributeStream::Normals.byte_length(count)
        + AttributeStream::TexCoords.byte_length(count)
        + AttributeStream::Indices.byte_length(mesh.index_count());

    let mut packer = BufferPacker::with_capacity(capacity);
    let regions = [
        packer.pack_vec3(&mesh.positions),
        packer.pack_vec3(&mesh.normals),
        packer.pack_vec2(&mesh.tex_coords),
        packer.pack_indices_u16(&mesh.indices),
    ];

    tracing::trace!(
        bytes = packer.buffer.len(),
        vertices = count,
        indices = mesh.index_count(),
        "packed mesh buffer"
    );

    PackedBuffer {
        data: packer.buffer,
        regions,
    }
}
