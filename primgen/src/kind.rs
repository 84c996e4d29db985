//! Primitive kind tag and generator dispatch

use std::fmt;
use std::str::FromStr;

use crate::config::Resolution;
use crate::error::PrimitiveError;
use crate::mesh::Mesh;
use crate::procedural;

/// The closed set of shapes the generator knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Cube,
    Plane,
    Sphere,
    Torus,
}

impl PrimitiveKind {
    /// Every kind, in generation order
    pub const ALL: [PrimitiveKind; 4] = [
        PrimitiveKind::Cube,
        PrimitiveKind::Plane,
        PrimitiveKind::Sphere,
        PrimitiveKind::Torus,
    ];

    /// Lowercase name used on the command line and in output file names
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Cube => "cube",
            PrimitiveKind::Plane => "plane",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Torus => "torus",
        }
    }

    /// Whether the generator consumes the scale directly as its radius
    ///
    /// Cube and plane are generated at unit size and scaled afterwards;
    /// sphere and torus already come out at the requested size.
    pub fn bakes_scale(self) -> bool {
        matches!(self, PrimitiveKind::Sphere | PrimitiveKind::Torus)
    }

    /// Whether the material should be rendered without back-face culling
    pub fn is_double_sided(self) -> bool {
        matches!(self, PrimitiveKind::Plane)
    }

    /// Run the generator for this kind
    ///
    /// `scale` is only read by kinds that bake it (see [`Self::bakes_scale`]).
    pub fn generate(self, scale: f32, resolution: &Resolution) -> Mesh {
        match self {
            PrimitiveKind::Cube => procedural::generate_cube(),
            PrimitiveKind::Plane => procedural::generate_plane(),
            PrimitiveKind::Sphere => {
                procedural::generate_sphere(scale, resolution.sphere_slices())
            }
            PrimitiveKind::Torus => procedural::generate_torus(
                scale,
                resolution.torus_slices(),
                resolution.torus_stacks(),
            ),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PrimitiveError::UnknownPrimitive(s.to_string()))
    }
}
