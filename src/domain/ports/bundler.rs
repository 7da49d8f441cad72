//! Bundler port - the external asset-bundle builder
//!
//! How bundles are encoded is the collaborator's business; the pipeline only
//! says what to build and records what came out.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::BuildTarget;

/// Bundler errors. Every one of them aborts the build.
#[derive(Debug, Error)]
pub enum BundlerError {
    /// The bundler ran and reported failure
    #[error("bundler failed: {0}")]
    Failed(String),
    /// The bundler could not be started or its output could not be read
    #[error("bundler I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One bundle build for one platform
#[derive(Debug, Clone, Copy)]
pub struct BundleRequest<'a> {
    pub target: BuildTarget,
    /// File name of the bundle, e.g. `MyMod_Windows.assetbundle`
    pub bundle_name: &'a str,
    /// Directory the bundle files go into
    pub output_dir: &'a Path,
    /// Absolute paths of the assets to pack
    pub assets: &'a [PathBuf],
}

/// External asset-bundle builder
pub trait Bundler {
    /// Build one bundle and return the absolute paths of every file produced
    fn build_bundles(&self, request: &BundleRequest<'_>) -> Result<Vec<PathBuf>, BundlerError>;
}
