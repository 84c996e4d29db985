//! Uniform scale transform and axis-aligned bounds

use glam::Vec3;

use crate::error::PrimitiveError;
use crate::kind::PrimitiveKind;
use crate::mesh::Mesh;

/// Axis-aligned bounding box of a mesh's positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl BoundingBox {
    /// Box containing a single point
    pub fn from_point(point: [f32; 3]) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow the box to contain `point`
    pub fn include(&mut self, point: [f32; 3]) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(point[axis]);
            self.max[axis] = self.max[axis].max(point[axis]);
        }
    }

    /// Size along each axis
    pub fn extent(&self) -> Vec3 {
        Vec3::from(self.max) - Vec3::from(self.min)
    }

    pub fn center(&self) -> Vec3 {
        (Vec3::from(self.min) + Vec3::from(self.max)) * 0.5
    }
}

/// Multiply every position by `scale` in place and return the new bounds
///
/// Normals and texture coordinates are left untouched, so a negative scale
/// mirrors the geometry without flipping its normals.
///
/// # Errors
///
/// Returns [`PrimitiveError::EmptyMesh`] if the mesh has no positions.
pub fn apply_scale(
    mesh: &mut Mesh,
    kind: PrimitiveKind,
    scale: f32,
) -> Result<BoundingBox, PrimitiveError> {
    let mut positions = mesh.positions.iter_mut();
    let first = positions.next().ok_or(PrimitiveError::EmptyMesh(kind))?;
    *first = (Vec3::from(*first) * scale).to_array();

    let mut bounds = BoundingBox::from_point(*first);
    for position in positions {
        *position = (Vec3::from(*position) * scale).to_array();
        bounds.include(*position);
    }

    Ok(bounds)
}

/// Compute bounds of the positions as they are
///
/// # Errors
///
/// Returns [`PrimitiveError::EmptyMesh`] if the mesh has no positions.
pub fn compute_bounds(mesh: &Mesh, kind: PrimitiveKind) -> Result<BoundingBox, PrimitiveError> {
    let (first, rest) = mesh
        .positions
        .split_first()
        .ok_or(PrimitiveError::EmptyMesh(kind))?;

    let mut bounds = BoundingBox::from_point(*first);
    for position in rest {
        bounds.include(*position);
    }

    Ok(bounds)
}
