//! Build Result
//!
//! Summary of one successful pipeline run.

use std::path::PathBuf;

use crate::domain::services::CacheDecision;

/// Result of a build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Whether cached bundles were reused
    pub decision: CacheDecision,
    /// Directory the mod was installed into
    pub install_dir: PathBuf,
    /// Path of the written manifest document
    pub manifest_path: PathBuf,
    /// Files routed per category
    pub config_count: usize,
    pub localization_count: usize,
    pub script_count: usize,
    pub library_count: usize,
    /// Bundle files listed in the manifest (built or reused)
    pub bundle_count: usize,
    /// Assets dropped because they live under Editor/CodeGen
    pub excluded_count: usize,
    /// Preprocessors that ran
    pub preprocessors: Vec<String>,
}

impl BuildReport {
    pub fn new(decision: CacheDecision, install_dir: PathBuf, manifest_path: PathBuf) -> Self {
        Self {
            decision,
            install_dir,
            manifest_path,
            config_count: 0,
            localization_count: 0,
            script_count: 0,
            library_count: 0,
            bundle_count: 0,
            excluded_count: 0,
            preprocessors: Vec::new(),
        }
    }

    /// True when the bundler was skipped in favour of the previous output
    pub fn reused_bundles(&self) -> bool {
        !self.decision.is_stale()
    }

    /// Total files listed in the manifest
    pub fn file_count(&self) -> usize {
        self.config_count
            + self.localization_count
            + self.script_count
            + self.library_count
            + self.bundle_count
    }
}
