//! glTF template document
//!
//! Loads a scene description template and exposes its placeholder fields
//! through [`SceneDocument`]. The template supplies every structural entry
//! (accessors, buffer views, buffer, material, mesh); projection only fills
//! in values.

use anyhow::{Context, Result};
use primgen::{BoundingBox, BufferRegion, PrimitiveError, SceneDocument};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Template shipped with the tool, used when no template path is given
pub const BUILTIN_TEMPLATE: &str = include_str!("../assets/template.gltf");

/// Indentation of written documents
const INDENT: &[u8] = b"   ";

/// A parsed glTF document used as the base for generated output
#[derive(Debug, Clone, PartialEq)]
pub struct GltfTemplate {
    root: Value,
}

impl GltfTemplate {
    /// Load and parse a template file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not load template glTF file {:?}", path))?;
        Self::parse(&text).with_context(|| format!("Failed to parse template {:?}", path))
    }

    /// Parse a template from JSON text
    pub fn parse(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text).context("Template is not valid JSON")?;
        anyhow::ensure!(root.is_object(), "Template root must be a JSON object");
        Ok(Self { root })
    }

    /// The embedded default template
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_TEMPLATE).context("Builtin template is invalid")
    }

    /// Load `path` if given, otherwise use the builtin template
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Underlying JSON tree
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Serialize with three-space indentation
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.root
            .serialize(&mut serializer)
            .context("Failed to serialize glTF document")?;
        Ok(String::from_utf8(out)?)
    }

    /// Entry `index` of the top-level array `array`, which must be an object
    fn entry_mut(
        &mut self,
        array: &str,
        index: usize,
    ) -> Result<&mut Map<String, Value>, PrimitiveError> {
        self.root
            .get_mut(array)
            .and_then(|entries| entries.get_mut(index))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| PrimitiveError::MalformedTemplate(format!("{array}[{index}]")))
    }
}

fn vec3_value(v: [f32; 3]) -> Value {
    Value::Array(v.into_iter().map(Value::from).collect())
}

impl SceneDocument for GltfTemplate {
    fn set_accessor_count(&mut self, accessor: usize, count: usize) -> Result<(), PrimitiveError> {
        self.entry_mut("accessors", accessor)?.insert("count".into(), count.into());
        Ok(())
    }

    fn set_accessor_bounds(
        &mut self,
        accessor: usize,
        bounds: &BoundingBox,
    ) -> Result<(), PrimitiveError> {
        let entry = self.entry_mut("accessors", accessor)?;
        entry.insert("min".into(), vec3_value(bounds.min));
        entry.insert("max".into(), vec3_value(bounds.max));
        Ok(())
    }

    fn set_buffer_view_region(
        &mut self,
        view: usize,
        region: BufferRegion,
    ) -> Result<(), PrimitiveError> {
        let entry = self.entry_mut("bufferViews", view)?;
        entry.insert("byteLength".into(), region.byte_length.into());
        entry.insert("byteOffset".into(), region.byte_offset.into());
        Ok(())
    }

    fn set_buffer_info(&mut self, byte_length: usize, uri: &str) -> Result<(), PrimitiveError> {
        let entry = self.entry_mut("buffers", 0)?;
        entry.insert("byteLength".into(), byte_length.into());
        entry.insert("uri".into(), uri.into());
        Ok(())
    }

    fn set_material_name(&mut self, name: &str) -> Result<(), PrimitiveError> {
        self.entry_mut("materials", 0)?.insert("name".into(), name.into());
        Ok(())
    }

    fn set_material_double_sided(&mut self, double_sided: bool) -> Result<(), PrimitiveError> {
        let material = self.entry_mut("materials", 0)?;
        // glTF defaults to single-sided, so false clears any template value
        if double_sided {
            material.insert("doubleSided".into(), true.into());
        } else {
            material.remove("doubleSided");
        }
        Ok(())
    }

    fn set_mesh_name(&mut self, name: &str) -> Result<(), PrimitiveError> {
        self.entry_mut("meshes", 0)?.insert("name".into(), name.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primgen::{PrimitiveKind, Resolution, generate_primitive, project};

    fn project_kind(kind: PrimitiveKind, scale: f32) -> GltfTemplate {
        let prim = generate_primitive(kind, scale, &Resolution::default()).unwrap();
        let mut doc = GltfTemplate::builtin().unwrap();
        project(&mut doc, &prim).unwrap();
        doc
    }

    #[test]
    fn test_builtin_template_parses() {
        let parsed = GltfTemplate::parse(BUILTIN_TEMPLATE).unwrap();
        assert_eq!(parsed, GltfTemplate::builtin().unwrap());
        assert_eq!(parsed.root()["accessors"].as_array().map(Vec::len), Some(4));
        assert_eq!(parsed.root()["bufferViews"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(GltfTemplate::parse("[1, 2, 3]").is_err());
        assert!(GltfTemplate::parse("{ not json").is_err());
    }

    #[test]
    fn test_projects_cube_fields() {
        let doc = project_kind(PrimitiveKind::Cube, 1.0);
        let root = doc.root();

        assert_eq!(root["buffers"][0]["uri"], "cube_s1.bin");
        assert_eq!(root["buffers"][0]["byteLength"], 840);
        assert_eq!(root["accessors"][0]["count"], 24);
        assert_eq!(root["accessors"][3]["count"], 36);
        assert_eq!(root["accessors"][0]["min"], serde_json::json!([-1.0, -1.0, -1.0]));
        assert_eq!(root["accessors"][0]["max"], serde_json::json!([1.0, 1.0, 1.0]));
        assert_eq!(root["bufferViews"][2]["byteOffset"], 576);
        assert_eq!(root["bufferViews"][3]["byteLength"], 72);
        assert_eq!(root["materials"][0]["name"], "cube_s1");
        assert_eq!(root["meshes"][0]["name"], "cube_s1");
        assert!(root["materials"][0].get("doubleSided").is_none());
    }

    #[test]
    fn test_projects_plane_double_sided() {
        let doc = project_kind(PrimitiveKind::Plane, 0.5);
        assert_eq!(doc.root()["materials"][0]["doubleSided"], true);
        assert_eq!(doc.root()["meshes"][0]["name"], "plane_s0.5");
    }

    #[test]
    fn test_double_sided_template_is_cleared_for_closed_shapes() {
        let mut root: Value = serde_json::from_str(BUILTIN_TEMPLATE).unwrap();
        root["materials"][0]["doubleSided"] = true.into();
        let template = GltfTemplate::parse(&root.to_string()).unwrap();

        for kind in PrimitiveKind::ALL {
            let prim = generate_primitive(kind, 1.0, &Resolution::default()).unwrap();
            let mut doc = template.clone();
            project(&mut doc, &prim).unwrap();

            let material = &doc.root()["materials"][0];
            if kind == PrimitiveKind::Plane {
                assert_eq!(material["doubleSided"], true);
            } else {
                assert!(material.get("doubleSided").is_none(), "{kind} kept doubleSided");
            }
        }
    }

    #[test]
    fn test_missing_placeholder_is_malformed() {
        let text = r#"{ "accessors": [{}, {}, {}, {}], "bufferViews": [] }"#;
        let mut doc = GltfTemplate::parse(text).unwrap();
        let before = doc.clone();
        let prim = generate_primitive(PrimitiveKind::Cube, 1.0, &Resolution::default()).unwrap();

        let err = project(&mut doc, &prim).unwrap_err();
        assert_eq!(err, PrimitiveError::MalformedTemplate("bufferViews[0]".into()));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_pretty_output_uses_three_spaces() {
        let text = GltfTemplate::parse(r#"{"asset":{"version":"2.0"}}"#)
            .unwrap()
            .to_pretty_string()
            .unwrap();
        assert_eq!(text, "{\n   \"asset\": {\n      \"version\": \"2.0\"\n   }\n}");
    }
}
