//! BuildSettings entity - everything one build call needs from its caller
//!
//! Passed by mutable reference into the pipeline: the pipeline repopulates
//! `metadata.files` and, on success only, replaces `state`.

use std::path::PathBuf;

use crate::domain::entities::{BuildState, ModMetadata};
use crate::domain::value_objects::BuildTarget;

/// Default locations of transient code-generation output, relative to the project root
pub const DEFAULT_GENERATED_CODE_DIRS: [&str; 2] = ["Temp/GeneratedCode", "Temp/NetCodeGenerated"];

#[derive(Debug, Clone)]
pub struct BuildSettings {
    /// Root of the mod's source tree
    pub mod_path: PathBuf,
    /// Directory code generation writes to, each holding one folder per mod name
    pub generated_code_dirs: Vec<PathBuf>,
    /// Identity and produced-file list
    pub metadata: ModMetadata,
    /// Reuse bundles from the previous build when nothing bundle-relevant changed
    pub cache_bundles: bool,
    /// Run the bundle stage at all
    pub build_bundles: bool,
    /// Also build the secondary (Linux) platform
    pub build_linux: bool,
    /// Ask upstream tooling to reprocess scripts before copying them
    pub force_reimport: bool,
    /// File names treated as metadata objects (never hashed)
    pub metadata_files: Vec<String>,
    /// State recorded by the last successful build
    pub state: BuildState,
}

impl BuildSettings {
    pub fn new(mod_path: impl Into<PathBuf>, metadata: ModMetadata) -> Self {
        Self {
            mod_path: mod_path.into(),
            generated_code_dirs: Vec::new(),
            metadata,
            cache_bundles: true,
            build_bundles: true,
            build_linux: false,
            force_reimport: false,
            metadata_files: Vec::new(),
            state: BuildState::new(),
        }
    }

    pub fn mod_name(&self) -> &str {
        &self.metadata.name
    }

    /// Platforms requested by this build
    pub fn targets(&self) -> Vec<BuildTarget> {
        BuildTarget::selected(self.build_linux)
    }
}
