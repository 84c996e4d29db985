//! Batch manifest parsing
//!
//! Parses primgen.toml:
//!
//! ```toml
//! [output]
//! dir = "generated/"
//! template = "template.gltf"
//!
//! [[primitive]]
//! kind = "sphere"
//! scale = 2.0
//! ```
//!
//! Relative paths are resolved against the manifest's directory.

use anyhow::{Context, Result, bail};
use primgen::PrimitiveKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::export::{ExportJob, check_unique_names};

/// Root manifest structure
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "primitive")]
    pub primitives: Vec<PrimitiveEntry>,
    /// Directory containing the manifest file
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    /// Template glTF; the builtin template is used when absent
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            template: None,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated/")
}

#[derive(Debug, Deserialize)]
pub struct PrimitiveEntry {
    pub kind: String,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl Manifest {
    /// Parse manifest text; relative paths resolve against `base_dir`
    pub fn parse(text: &str, base_dir: &Path) -> Result<Self> {
        let mut manifest: Manifest = toml::from_str(text).context("Failed to parse manifest")?;
        manifest.base_dir = base_dir.to_path_buf();
        Ok(manifest)
    }

    /// Output directory resolved against the manifest location
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.output.dir)
    }

    /// Template path resolved against the manifest location
    pub fn template_path(&self) -> Option<PathBuf> {
        self.output.template.as_ref().map(|t| self.base_dir.join(t))
    }

    /// Convert entries into export jobs
    pub fn jobs(&self) -> Result<Vec<ExportJob>> {
        self.primitives
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let kind: PrimitiveKind = entry
                    .kind
                    .parse()
                    .with_context(|| format!("primitive #{}", i + 1))?;
                Ok(ExportJob::new(kind, entry.scale))
            })
            .collect()
    }
}

/// Load manifest from file
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {:?}", path))?;
    let base_dir = path.parent().unwrap_or(Path::new("."));
    Manifest::parse(&content, base_dir)
}

/// Validate manifest without generating anything
pub fn validate(manifest: &Manifest) -> Result<()> {
    if manifest.primitives.is_empty() {
        bail!("Manifest lists no primitives (add a [[primitive]] table)");
    }

    let jobs = manifest.jobs()?;
    for (i, job) in jobs.iter().enumerate() {
        if !job.scale.is_finite() {
            bail!("primitive #{}: scale {} is not finite", i + 1, job.scale);
        }
    }
    check_unique_names(&jobs)?;

    if let Some(template) = manifest.template_path() {
        if !template.exists() {
            bail!("Template not found: {:?}", template);
        }
    }

    tracing::debug!("Manifest lists {} primitive(s)", jobs.len());
    Ok(())
}
