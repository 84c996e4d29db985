//! Smooth primitives with wrapped UVs (sphere, torus)
//!
//! Both generators take the requested scale as their size, so their output
//! is already at final scale. Grids include duplicate seam vertices so UVs
//! reach 1.0 without wrapping.

use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

use crate::mesh::Mesh;

/// Generate a UV sphere on a latitude/longitude grid
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `slices` - Longitudinal divisions; the sphere uses `slices / 2` parallels
///
/// # Returns
/// Mesh with `(parallels + 1) × (slices + 1)` vertices and
/// `parallels × slices × 6` indices. Row `i` runs from the +Y pole (`i = 0`)
/// to the -Y pole (`i = parallels`).
pub fn generate_sphere(radius: f32, slices: u32) -> Mesh {
    let parallels = slices / 2;
    let angle_step = TAU / slices as f32;
    let stride = slices + 1;

    let mut mesh = Mesh::with_capacity(
        ((parallels + 1) * stride) as usize,
        (parallels * slices * 6) as usize,
    );

    for i in 0..=parallels {
        let (sin_i, cos_i) = (angle_step * i as f32).sin_cos();

        for j in 0..=slices {
            let (sin_j, cos_j) = (angle_step * j as f32).sin_cos();

            // Outward normal of a sphere is its unit-radius position
            let normal = Vec3::new(sin_i * sin_j, cos_i, sin_i * cos_j);
            let uv = Vec2::new(
                j as f32 / slices as f32,
                1.0 - i as f32 / parallels as f32,
            );

            mesh.add_vertex(normal * radius, normal, uv);
        }
    }

    for i in 0..parallels {
        for j in 0..slices {
            let i0 = (i * stride + j) as u16;
            let i1 = ((i + 1) * stride + j) as u16;
            let i2 = ((i + 1) * stride + j + 1) as u16;
            let i3 = (i * stride + j + 1) as u16;

            mesh.add_triangle(i0, i1, i2);
            mesh.add_triangle(i0, i2, i3);
        }
    }

    mesh
}

/// Generate a torus lying in the XZ plane
///
/// # Arguments
/// * `outer_radius` - Distance from the center to the outermost edge
/// * `slices` - Segments around the major circle
/// * `stacks` - Segments around the tube
///
/// The inner radius is a quarter of the outer one; the tube spans the gap
/// between them.
///
/// # Returns
/// Mesh with `(slices + 1) × (stacks + 1)` vertices and
/// `slices × stacks × 6` indices. UV is the normalized grid parameter `(s, t)`.
pub fn generate_torus(outer_radius: f32, slices: u32, stacks: u32) -> Mesh {
    let inner_radius = outer_radius / 4.0;
    let tube_radius = (outer_radius - inner_radius) / 2.0;
    let center_radius = outer_radius - tube_radius;
    let stride = stacks + 1;

    let mut mesh = Mesh::with_capacity(
        ((slices + 1) * stride) as usize,
        (slices * stacks * 6) as usize,
    );

    for side in 0..=slices {
        let s = side as f32 / slices as f32;
        let (sin_s, cos_s) = (TAU * s).sin_cos();

        for face in 0..=stacks {
            let t = face as f32 / stacks as f32;
            let (sin_t, cos_t) = (TAU * t).sin_cos();

            let ring = center_radius + tube_radius * cos_t;
            let position = Vec3::new(ring * sin_s, tube_radius * sin_t, ring * cos_s);
            let normal = Vec3::new(sin_s * cos_t, sin_t, cos_s * cos_t);

            mesh.add_vertex(position, normal, Vec2::new(s, t));
        }
    }

    for side in 0..slices {
        for face in 0..stacks {
            let v0 = (side * stride + face) as u16;
            let v1 = ((side + 1) * stride + face) as u16;
            let v2 = ((side + 1) * stride + face + 1) as u16;
            let v3 = (side * stride + face + 1) as u16;

            mesh.add_triangle(v0, v1, v2);
            mesh.add_triangle(v0, v2, v3);
        }
    }

    mesh
}
