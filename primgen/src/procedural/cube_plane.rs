//! Flat-shaded primitives (cube, plane)
//!
//! Both are generated at unit half-extent; the pipeline scales them afterwards.

use glam::{Vec2, Vec3};

use crate::mesh::Mesh;

/// Face definition: (normal, corners with positions and UVs)
type FaceDefinition = ([f32; 3], [([f32; 3], [f32; 2]); 4]);

/// Cube faces, corners ordered so the (0, 2, 1), (0, 3, 2) split faces outward
const CUBE_FACES: [FaceDefinition; 6] = [
    // Bottom (-Y)
    (
        [0.0, -1.0, 0.0],
        [
            ([-1.0, -1.0, -1.0], [0.0, 0.0]),
            ([-1.0, -1.0, 1.0], [0.0, 1.0]),
            ([1.0, -1.0, 1.0], [1.0, 1.0]),
            ([1.0, -1.0, -1.0], [1.0, 0.0]),
        ],
    ),
    // Top (+Y)
    (
        [0.0, 1.0, 0.0],
        [
            ([-1.0, 1.0, -1.0], [0.0, 1.0]),
            ([1.0, 1.0, -1.0], [1.0, 1.0]),
            ([1.0, 1.0, 1.0], [1.0, 0.0]),
            ([-1.0, 1.0, 1.0], [0.0, 0.0]),
        ],
    ),
    // Back (-Z)
    (
        [0.0, 0.0, -1.0],
        [
            ([-1.0, -1.0, -1.0], [1.0, 0.0]),
            ([1.0, -1.0, -1.0], [0.0, 0.0]),
            ([1.0, 1.0, -1.0], [0.0, 1.0]),
            ([-1.0, 1.0, -1.0], [1.0, 1.0]),
        ],
    ),
    // Front (+Z)
    (
        [0.0, 0.0, 1.0],
        [
            ([-1.0, -1.0, 1.0], [0.0, 0.0]),
            ([-1.0, 1.0, 1.0], [0.0, 1.0]),
            ([1.0, 1.0, 1.0], [1.0, 1.0]),
            ([1.0, -1.0, 1.0], [1.0, 0.0]),
        ],
    ),
    // Left (-X)
    (
        [-1.0, 0.0, 0.0],
        [
            ([-1.0, -1.0, -1.0], [0.0, 0.0]),
            ([-1.0, 1.0, -1.0], [0.0, 1.0]),
            ([-1.0, 1.0, 1.0], [1.0, 1.0]),
            ([-1.0, -1.0, 1.0], [1.0, 0.0]),
        ],
    ),
    // Right (+X)
    (
        [1.0, 0.0, 0.0],
        [
            ([1.0, -1.0, -1.0], [1.0, 0.0]),
            ([1.0, -1.0, 1.0], [0.0, 0.0]),
            ([1.0, 1.0, 1.0], [0.0, 1.0]),
            ([1.0, 1.0, -1.0], [1.0, 1.0]),
        ],
    ),
];

/// Generate a cube spanning [-1, 1] on every axis
///
/// # Returns
/// Mesh with 24 vertices (4 per face, unshared so each face keeps a flat
/// normal and its own UV square) and 36 indices (6 faces × 2 triangles × 3)
pub fn generate_cube() -> Mesh {
    let mut mesh = Mesh::with_capacity(CUBE_FACES.len() * 4, CUBE_FACES.len() * 6);

    for (normal, corners) in &CUBE_FACES {
        let normal = Vec3::from(*normal);
        let [i0, i1, i2, i3] = corners.map(|(position, uv)| {
            mesh.add_vertex(Vec3::from(position), normal, Vec2::from(uv))
        });

        mesh.add_triangle(i0, i2, i1);
        mesh.add_triangle(i0, i3, i2);
    }

    mesh
}

/// Generate a single quad on the XZ plane (Y = 0) spanning [-1, 1]
///
/// # Returns
/// Mesh with 4 vertices facing +Y and 6 indices. The quad is meant to be
/// rendered double-sided.
pub fn generate_plane() -> Mesh {
    let mut mesh = Mesh::with_capacity(4, 6);

    let corners = [
        (Vec3::new(-1.0, 0.0, 1.0), Vec2::new(0.0, 0.0)),
        (Vec3::new(1.0, 0.0, 1.0), Vec2::new(1.0, 0.0)),
        (Vec3::new(-1.0, 0.0, -1.0), Vec2::new(0.0, 1.0)),
        (Vec3::new(1.0, 0.0, -1.0), Vec2::new(1.0, 1.0)),
    ];
    let [i0, i1, i2, i3] = corners.map(|(position, uv)| mesh.add_vertex(position, Vec3::Y, uv));

    mesh.add_triangle(i0, i1, i2);
    mesh.add_triangle(i3, i2, i1);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let mesh = generate_cube();
        assert_eq!(mesh.attribute_count(), 24);
        assert_eq!(mesh.index_count(), 36);
    }

    #[test]
    fn test_cube_quad_split() {
        let mesh = generate_cube();
        for (face, tris) in mesh.indices.chunks_exact(6).enumerate() {
            let base = (face * 4) as u16;
            assert_eq!(tris, [base, base + 2, base + 1, base, base + 3, base + 2]);
        }
    }

    #[test]
    fn test_cube_normals_are_flat_per_face() {
        let mesh = generate_cube();
        for face in mesh.normals.chunks_exact(4) {
            assert!(face.iter().all(|n| *n == face[0]));
        }
        // Every face position lies on the plane its normal points at
        for (pos, normal) in mesh.positions.iter().zip(&mesh.normals) {
            let p = Vec3::from(*pos);
            let n = Vec3::from(*normal);
            assert_eq!(p.dot(n), 1.0);
        }
    }

    #[test]
    fn test_cube_uvs_cover_unit_square() {
        let mesh = generate_cube();
        for face in mesh.tex_coords.chunks_exact(4) {
            let mut sorted = face.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_eq!(sorted, vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);
        }
    }

    #[test]
    fn test_plane() {
        let mesh = generate_plane();
        assert_eq!(mesh.attribute_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 2, 1]);
        assert!(mesh.normals.iter().all(|n| *n == [0.0, 1.0, 0.0]));
        assert!(mesh.positions.iter().all(|p| p[1] == 0.0));
    }
}
