//! Unpacked mesh streams produced by the generators

use glam::{Vec2, Vec3};

use crate::error::PrimitiveError;

/// Full-precision mesh data (one entry per vertex in each attribute stream)
///
/// Positions, normals, and texture coordinates always have the same length.
/// Indices form a triangle list into those streams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals as [x, y, z]
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates as [u, v]
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle indices (u16 for GPU compatibility)
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Create empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty mesh with room for the given vertex and index counts
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            tex_coords: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Add a vertex with position, normal, and UV, returning its index
    pub fn add_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u16 {
        let index = self.positions.len() as u16;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.tex_coords.push(uv.to_array());
        index
    }

    /// Add a triangle (3 vertex indices)
    pub fn add_triangle(&mut self, i0: u16, i1: u16, i2: u16) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Number of vertices (shared length of the attribute streams)
    pub fn attribute_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check stream lengths and index ranges
    ///
    /// # Errors
    ///
    /// Returns [`PrimitiveError::InvalidMesh`] if the attribute streams
    /// differ in length, the index count is not a multiple of 3, or an
    /// index points past the last vertex.
    pub fn validate(&self) -> Result<(), PrimitiveError> {
        let count = self.attribute_count();
        if self.normals.len() != count || self.tex_coords.len() != count {
            return Err(PrimitiveError::InvalidMesh(format!(
                "stream lengths differ (positions {}, normals {}, tex coords {})",
                count,
                self.normals.len(),
                self.tex_coords.len()
            )));
        }

        if self.indices.len() % 3 != 0 {
            return Err(PrimitiveError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= count) {
            return Err(PrimitiveError::InvalidMesh(format!(
                "index {bad} out of range for {count} vertices"
            )));
        }

        Ok(())
    }
}
