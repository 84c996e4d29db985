//! primgen-cli library
//!
//! The collaborators around the primgen core: template loading, the glTF
//! document adapter, batch manifests, and file output.

pub mod export;
pub mod manifest;
pub mod template;

pub use export::{ExportJob, ExportReport, export_all, export_primitive};
pub use manifest::{Manifest, load_manifest};
pub use template::GltfTemplate;
