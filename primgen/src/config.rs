//! Resolution constants for the round primitives
//!
//! Defaults are 64 slices for the sphere and a 64 × 64 grid for
//! the torus. Counts are always derived from these values so the mesh
//! invariants hold for any validated resolution.

use crate::error::PrimitiveError;

/// Largest vertex count addressable by u16 indices
pub const MAX_VERTICES: u32 = u16::MAX as u32 + 1;

/// Default slice count for both round primitives
pub const DEFAULT_SLICES: u32 = 64;

/// Immutable tessellation settings passed into the generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    sphere_slices: u32,
    torus_slices: u32,
    torus_stacks: u32,
}

impl Resolution {
    /// Build a validated resolution
    ///
    /// # Errors
    ///
    /// Returns [`PrimitiveError::InvalidResolution`] if:
    /// - `sphere_slices` is odd or below 4
    /// - `torus_slices` or `torus_stacks` is below 3
    /// - a derived vertex count does not fit u16 indices
    pub fn new(
        sphere_slices: u32,
        torus_slices: u32,
        torus_stacks: u32,
    ) -> Result<Self, PrimitiveError> {
        if sphere_slices < 4 || sphere_slices % 2 != 0 {
            return Err(PrimitiveError::InvalidResolution(format!(
                "sphere slices must be even and >= 4, got {sphere_slices}"
            )));
        }
        if torus_slices < 3 || torus_stacks < 3 {
            return Err(PrimitiveError::InvalidResolution(format!(
                "torus grid must be at least 3 x 3, got {torus_slices} x {torus_stacks}"
            )));
        }

        let resolution = Self {
            sphere_slices,
            torus_slices,
            torus_stacks,
        };

        // Checked in u64 so huge inputs are rejected instead of wrapping
        let sphere_vertices = grid_vertices(resolution.sphere_parallels(), sphere_slices);
        let torus_vertices = grid_vertices(torus_slices, torus_stacks);
        if sphere_vertices > MAX_VERTICES as u64 || torus_vertices > MAX_VERTICES as u64 {
            return Err(PrimitiveError::InvalidResolution(format!(
                "vertex count exceeds u16 index range \
                 (sphere {sphere_vertices}, torus {torus_vertices}, max {MAX_VERTICES})"
            )));
        }

        Ok(resolution)
    }

    pub fn sphere_slices(&self) -> u32 {
        self.sphere_slices
    }

    /// Latitude bands of the sphere (half the slice count)
    pub fn sphere_parallels(&self) -> u32 {
        self.sphere_slices / 2
    }

    pub fn torus_slices(&self) -> u32 {
        self.torus_slices
    }

    pub fn torus_stacks(&self) -> u32 {
        self.torus_stacks
    }

    /// `(parallels + 1) * (slices + 1)`, seam and pole rows included
    pub fn sphere_attribute_count(&self) -> usize {
        (self.sphere_parallels() as usize + 1) * (self.sphere_slices as usize + 1)
    }

    pub fn sphere_index_count(&self) -> usize {
        self.sphere_parallels() as usize * self.sphere_slices as usize * 6
    }

    /// `(slices + 1) * (stacks + 1)`, seam rows included
    pub fn torus_attribute_count(&self) -> usize {
        (self.torus_slices as usize + 1) * (self.torus_stacks as usize + 1)
    }

    pub fn torus_index_count(&self) -> usize {
        self.torus_slices as usize * self.torus_stacks as usize * 6
    }
}

/// Vertex count of a `rows x cols` grid with the seam row and column duplicated
fn grid_vertices(rows: u32, cols: u32) -> u64 {
    (u64::from(rows) + 1) * (u64::from(cols) + 1)
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            sphere_slices: DEFAULT_SLICES,
            torus_slices: DEFAULT_SLICES,
            torus_stacks: DEFAULT_SLICES,
        }
    }
}
