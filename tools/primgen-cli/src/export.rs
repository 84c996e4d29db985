//! Writing generated primitives to disk
//!
//! Each primitive becomes `<name>.bin` (the packed buffer) and
//! `<name>.gltf` (the projected template referencing it).

use anyhow::{Context, Result, bail};
use primgen::{PrimitiveKind, Resolution, derive_name, generate_primitive, project};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::template::GltfTemplate;

/// One primitive request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportJob {
    pub kind: PrimitiveKind,
    pub scale: f32,
}

impl ExportJob {
    pub fn new(kind: PrimitiveKind, scale: f32) -> Self {
        Self { kind, scale }
    }

    /// Derived output name (`<kind>_s<scale>`)
    pub fn name(&self) -> String {
        derive_name(self.kind, self.scale)
    }
}

/// Summary of one written primitive
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub name: String,
    pub binary_path: PathBuf,
    pub document_path: PathBuf,
    pub attribute_count: usize,
    pub index_count: usize,
    pub byte_length: usize,
}

/// Generate one primitive and write its buffer and document into `out_dir`
///
/// The template is cloned, so callers can reuse it across jobs.
pub fn export_primitive(
    job: &ExportJob,
    template: &GltfTemplate,
    out_dir: &Path,
    resolution: &Resolution,
) -> Result<ExportReport> {
    let primitive = generate_primitive(job.kind, job.scale, resolution)
        .with_context(|| format!("Failed to generate {} (scale {})", job.kind, job.scale))?;

    let mut document = template.clone();
    project(&mut document, &primitive)
        .with_context(|| format!("Failed to fill template for {}", primitive.names.name))?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {:?}", out_dir))?;

    let binary_path = out_dir.join(&primitive.names.binary);
    fs::write(&binary_path, primitive.buffer.as_bytes())
        .with_context(|| format!("Could not save generated binary file {:?}", binary_path))?;

    let document_path = out_dir.join(&primitive.names.document);
    fs::write(&document_path, document.to_pretty_string()?)
        .with_context(|| format!("Could not save generated glTF file {:?}", document_path))?;

    tracing::info!(
        "Wrote {} ({} vertices, {} indices, {} bytes)",
        primitive.names.name,
        primitive.mesh.attribute_count(),
        primitive.mesh.index_count(),
        primitive.buffer.byte_length()
    );

    Ok(ExportReport {
        name: primitive.names.name.clone(),
        binary_path,
        document_path,
        attribute_count: primitive.mesh.attribute_count(),
        index_count: primitive.mesh.index_count(),
        byte_length: primitive.buffer.byte_length(),
    })
}

/// Export several primitives in parallel
///
/// Every job gets its own copy of the template. Reports come back in job
/// order.
pub fn export_all(
    jobs: &[ExportJob],
    template: &GltfTemplate,
    out_dir: &Path,
    resolution: &Resolution,
) -> Result<Vec<ExportReport>> {
    check_unique_names(jobs)?;

    jobs.par_iter()
        .map(|job| export_primitive(job, template, out_dir, resolution))
        .collect()
}

/// Reject jobs that would write the same output files
pub fn check_unique_names(jobs: &[ExportJob]) -> Result<()> {
    let mut seen = HashSet::new();
    for job in jobs {
        let name = job.name();
        if !seen.insert(name.clone()) {
            bail!("Duplicate primitive '{}' (same kind and scale listed twice)", name);
        }
    }
    Ok(())
}
