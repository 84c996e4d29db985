//! End-to-end generation: generator, scale and bounds, packing

use crate::bounds::{BoundingBox, apply_scale, compute_bounds};
use crate::config::Resolution;
use crate::error::PrimitiveError;
use crate::kind::PrimitiveKind;
use crate::mesh::Mesh;
use crate::packing::{PackedBuffer, pack};
use crate::projection::OutputNames;

/// Everything produced for one primitive request
#[derive(Debug, Clone)]
pub struct GeneratedPrimitive {
    pub kind: PrimitiveKind,
    pub scale: f32,
    pub names: OutputNames,
    /// Mesh at final scale
    pub mesh: Mesh,
    /// Bounds of the scaled positions
    pub bounds: BoundingBox,
    pub buffer: PackedBuffer,
}

/// Generate, scale, bound, and pack one primitive
///
/// Sphere and torus take `scale` as their radius, so their positions are
/// only bounded here; cube and plane are generated at unit size and scaled
/// in place.
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is NaN or infinite
/// - the generator produced no vertices
/// - the generated streams break the triangle-list invariants
pub fn generate_primitive(
    kind: PrimitiveKind,
    scale: f32,
    resolution: &Resolution,
) -> Result<GeneratedPrimitive, PrimitiveError> {
    if !scale.is_finite() {
        return Err(PrimitiveError::InvalidScale(scale));
    }
    if scale <= 0.0 {
        tracing::warn!(
            %kind,
            scale,
            "non-positive scale: geometry is mirrored or collapsed, normals are not flipped"
        );
    }

    let mut mesh = kind.generate(scale, resolution);
    tracing::debug!(
        %kind,
        vertices = mesh.attribute_count(),
        indices = mesh.index_count(),
        "generated mesh"
    );

    let bounds = if kind.bakes_scale() {
        compute_bounds(&mesh, kind)?
    } else {
        apply_scale(&mut mesh, kind, scale)?
    };
    mesh.validate()?;
    tracing::debug!(%kind, min = ?bounds.min, max = ?bounds.max, "computed bounds");

    let buffer = pack(&mesh);

    Ok(GeneratedPrimitive {
        kind,
        scale,
        names: OutputNames::new(kind, scale),
        mesh,
        bounds,
        buffer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::AttributeStream;

    const EPSILON: f32 = 1e-5;

    fn generate(kind: PrimitiveKind, scale: f32) -> GeneratedPrimitive {
        generate_primitive(kind, scale, &Resolution::default()).unwrap()
    }

    #[test]
    fn test_cube_scenario() {
        let cube = generate(PrimitiveKind::Cube, 1.0);
        assert_eq!(cube.mesh.attribute_count(), 24);
        assert_eq!(cube.mesh.index_count(), 36);
        assert_eq!(cube.bounds.min, [-1.0, -1.0, -1.0]);
        assert_eq!(cube.bounds.max, [1.0, 1.0, 1.0]);
        assert_eq!(cube.buffer.byte_length(), 24 * 12 * 2 + 24 * 8 + 36 * 2);
        assert_eq!(cube.names.name, "cube_s1");
    }

    #[test]
    fn test_cube_scale_two() {
        let cube = generate(PrimitiveKind::Cube, 2.0);
        assert_eq!(cube.bounds.min, [-2.0, -2.0, -2.0]);
        assert_eq!(cube.bounds.max, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_sphere_scenario() {
        let sphere = generate(PrimitiveKind::Sphere, 1.0);
        assert_eq!(sphere.mesh.attribute_count(), 2145);
        assert_eq!(sphere.mesh.index_count(), 12288);
        for n in &sphere.mesh.normals {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_round_kinds_are_not_scaled_twice() {
        let sphere = generate(PrimitiveKind::Sphere, 2.0);
        assert!((sphere.bounds.max[1] - 2.0).abs() < EPSILON);
        assert!((sphere.bounds.min[1] + 2.0).abs() < EPSILON);

        let torus = generate(PrimitiveKind::Torus, 2.0);
        assert!((torus.bounds.max[0] - 2.0).abs() < 1e-4);
        assert!((torus.bounds.max[1] - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_positions_segment_matches_mesh() {
        for kind in PrimitiveKind::ALL {
            let prim = generate(kind, 1.5);
            let bytes = prim.buffer.stream_bytes(AttributeStream::Positions);
            assert_eq!(bytes.len(), prim.mesh.attribute_count() * 3 * 4);

            let decoded: Vec<f32> = bytes
                .chunks_exact(4)
                .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                .collect();
            let expected: Vec<f32> = prim.mesh.positions.iter().flatten().copied().collect();
            assert_eq!(decoded, expected, "{kind}");
        }
    }

    #[test]
    fn test_rejects_non_finite_scale() {
        let res = Resolution::default();
        assert!(matches!(
            generate_primitive(PrimitiveKind::Cube, f32::NAN, &res),
            Err(PrimitiveError::InvalidScale(_))
        ));
        assert_eq!(
            generate_primitive(PrimitiveKind::Torus, f32::INFINITY, &res).unwrap_err(),
            PrimitiveError::InvalidScale(f32::INFINITY)
        );
    }

    #[test]
    fn test_custom_resolution() {
        let res = Resolution::new(16, 8, 6).unwrap();
        let sphere = generate_primitive(PrimitiveKind::Sphere, 1.0, &res).unwrap();
        assert_eq!(sphere.mesh.attribute_count(), res.sphere_attribute_count());
        let torus = generate_primitive(PrimitiveKind::Torus, 1.0, &res).unwrap();
        assert_eq!(torus.mesh.index_count(), 8 * 6 * 6);
    }
}
