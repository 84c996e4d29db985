//! Procedural primitive generators
//!
//! Each generator is an independent pure function returning a [`Mesh`] with
//! positions, normals, texture coordinates, and a triangle list. Windings are
//! counter-clockwise when viewed from outside the surface.
//!
//! [`Mesh`]: crate::mesh::Mesh

mod cube_plane;
mod sphere_torus;

pub use cube_plane::{generate_cube, generate_plane};
pub use sphere_torus::{generate_sphere, generate_torus};
