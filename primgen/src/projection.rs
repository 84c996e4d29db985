//! Metadata projection onto a scene description document
//!
//! The core never sees the document's full schema. It writes through the
//! narrow [`SceneDocument`] interface, which the template collaborator
//! implements for its concrete tree.

use crate::bounds::BoundingBox;
use crate::error::PrimitiveError;
use crate::kind::PrimitiveKind;
use crate::packing::{AttributeStream, BufferRegion};
use crate::pipeline::GeneratedPrimitive;

/// Write access to the placeholder fields of a scene template
///
/// Implementations overwrite existing entries only. A missing entry is
/// reported as [`PrimitiveError::MalformedTemplate`].
pub trait SceneDocument {
    /// Set the element count of an accessor
    fn set_accessor_count(&mut self, accessor: usize, count: usize) -> Result<(), PrimitiveError>;

    /// Set the min/max bounds of an accessor
    fn set_accessor_bounds(
        &mut self,
        accessor: usize,
        bounds: &BoundingBox,
    ) -> Result<(), PrimitiveError>;

    /// Set byte offset and length of a buffer view
    fn set_buffer_view_region(
        &mut self,
        view: usize,
        region: BufferRegion,
    ) -> Result<(), PrimitiveError>;

    /// Set total byte length and external file reference of the buffer
    fn set_buffer_info(&mut self, byte_length: usize, uri: &str) -> Result<(), PrimitiveError>;

    fn set_material_name(&mut self, name: &str) -> Result<(), PrimitiveError>;

    fn set_material_double_sided(&mut self, double_sided: bool) -> Result<(), PrimitiveError>;

    fn set_mesh_name(&mut self, name: &str) -> Result<(), PrimitiveError>;
}

/// Display name for a primitive: `<kind>_s<scale>`
///
/// The scale uses the shortest representation that parses back to the same
/// float, so `1.0` gives `cube_s1` and `0.25` gives `cube_s0.25`.
pub fn derive_name(kind: PrimitiveKind, scale: f32) -> String {
    format!("{kind}_s{scale}")
}

/// Names of everything written for one primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    /// Material and mesh display name
    pub name: String,
    /// Binary buffer file name (`<name>.bin`)
    pub binary: String,
    /// Scene document file name (`<name>.gltf`)
    pub document: String,
}

impl OutputNames {
    pub fn new(kind: PrimitiveKind, scale: f32) -> Self {
        let name = derive_name(kind, scale);
        Self {
            binary: format!("{name}.bin"),
            document: format!("{name}.gltf"),
            name,
        }
    }
}

/// Write counts, regions, bounds, and names of `primitive` into `document`
///
/// Writes go to a staged copy that replaces `document` only when every
/// field was written, so a malformed template is left untouched.
///
/// # Errors
///
/// Returns [`PrimitiveError::MalformedTemplate`] if the document is missing
/// any placeholder entry.
pub fn project<D>(document: &mut D, primitive: &GeneratedPrimitive) -> Result<(), PrimitiveError>
where
    D: SceneDocument + Clone,
{
    let mut staged = document.clone();
    write_fields(&mut staged, primitive)?;
    *document = staged;

    tracing::debug!(name = %primitive.names.name, "projected metadata into document");
    Ok(())
}

fn write_fields<D: SceneDocument>(
    document: &mut D,
    primitive: &GeneratedPrimitive,
) -> Result<(), PrimitiveError> {
    let mesh = &primitive.mesh;

    for stream in AttributeStream::ALL {
        let count = match stream {
            AttributeStream::Indices => mesh.index_count(),
            _ => mesh.attribute_count(),
        };
        document.set_accessor_count(stream.index(), count)?;
    }
    document.set_accessor_bounds(AttributeStream::Positions.index(), &primitive.bounds)?;

    for stream in AttributeStream::ALL {
        document.set_buffer_view_region(stream.index(), primitive.buffer.region(stream))?;
    }
    document.set_buffer_info(primitive.buffer.byte_length(), &primitive.names.binary)?;

    document.set_material_name(&primitive.names.name)?;
    document.set_material_double_sided(primitive.kind.is_double_sided())?;
    document.set_mesh_name(&primitive.names.name)?;

    Ok(())
}
