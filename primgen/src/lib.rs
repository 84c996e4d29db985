//! Procedural primitive meshes packed for glTF buffers
//!
//! Generates cube, plane, sphere, and torus meshes, applies a uniform scale,
//! computes bounds, and packs the attribute streams into one binary buffer
//! whose layout is projected into a scene description template.
//!
//! # Example
//!
//! ```
//! use primgen::{PrimitiveKind, Resolution, generate_primitive};
//!
//! let cube = generate_primitive(PrimitiveKind::Cube, 2.0, &Resolution::default()).unwrap();
//! assert_eq!(cube.mesh.attribute_count(), 24);
//! assert_eq!(cube.bounds.max, [2.0, 2.0, 2.0]);
//! assert_eq!(cube.buffer.byte_length(), 840);
//! assert_eq!(cube.names.binary, "cube_s2.bin");
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod kind;
pub mod mesh;
pub mod packing;
pub mod pipeline;
pub mod procedural;
pub mod projection;

pub use bounds::{BoundingBox, apply_scale, compute_bounds};
pub use config::Resolution;
pub use error::PrimitiveError;
pub use kind::PrimitiveKind;
pub use mesh::Mesh;
pub use packing::{AttributeStream, BufferRegion, PackedBuffer, pack};
pub use pipeline::{GeneratedPrimitive, generate_primitive};
pub use projection::{OutputNames, SceneDocument, derive_name, project};
