//! primgen - procedural primitive glTF generator
//!
//! Generates cube, plane, sphere, and torus meshes and writes them as a
//! `<name>.gltf` document plus a `<name>.bin` buffer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use primgen::{PrimitiveKind, Resolution};
use std::path::PathBuf;

use primgen_cli::manifest::{load_manifest, validate};
use primgen_cli::{ExportJob, GltfTemplate, export_all};

#[derive(Parser)]
#[command(name = "primgen")]
#[command(about = "Procedural primitive glTF generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single primitive (or all of them)
    Generate {
        /// Primitive kind: cube, plane, sphere, torus
        #[arg(short, long, default_value = "cube", conflicts_with = "all")]
        primitive: PrimitiveKind,

        /// Uniform scale factor
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        scale: f32,

        /// Generate every primitive kind at the given scale
        #[arg(long)]
        all: bool,

        /// Template glTF file (builtin template when omitted)
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Generate every primitive listed in a manifest
    Build {
        /// Path to primgen.toml manifest
        #[arg(default_value = "primgen.toml")]
        manifest: PathBuf,
    },

    /// Validate manifest without generating
    Check {
        /// Path to primgen.toml manifest
        #[arg(default_value = "primgen.toml")]
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let resolution = Resolution::default();

    match cli.command {
        Commands::Generate {
            primitive,
            scale,
            all,
            template,
            output,
        } => {
            let template = GltfTemplate::load_or_builtin(template.as_deref())?;
            let kinds = if all {
                PrimitiveKind::ALL.to_vec()
            } else {
                vec![primitive]
            };
            let jobs: Vec<ExportJob> = kinds
                .into_iter()
                .map(|kind| ExportJob::new(kind, scale))
                .collect();

            let reports = export_all(&jobs, &template, &output, &resolution)?;
            for report in &reports {
                tracing::info!("{:?} -> {:?}", report.document_path, report.binary_path);
            }
        }

        Commands::Build { manifest } => {
            tracing::info!("Building primitives from {:?}", manifest);
            let config = load_manifest(&manifest)?;
            validate(&config)?;

            let template = GltfTemplate::load_or_builtin(config.template_path().as_deref())?;
            let reports = export_all(&config.jobs()?, &template, &config.output_dir(), &resolution)?;
            tracing::info!("Build complete! {} primitive(s) written", reports.len());
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let config = load_manifest(&manifest)?;
            validate(&config)?;
            tracing::info!("Manifest is valid!");
        }
    }

    Ok(())
}
