//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{BuildSettings, BuildState, ModMetadata, DEFAULT_GENERATED_CODE_DIRS};
use crate::error::ModpackResult;
use crate::infrastructure::{BUILD_LOCK_NAME, LOCKFILE_NAME};

use super::loader::{self, ConfigWarning, CONFIG_FILE};

/// Mod identity (`[mod]`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModSection {
    #[serde(default)]
    pub guid: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Build switches (`[build]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    #[serde(default = "default_mod_path")]
    pub mod_path: PathBuf,

    #[serde(default = "default_true")]
    pub cache_bundles: bool,

    #[serde(default = "default_true")]
    pub build_bundles: bool,

    #[serde(default)]
    pub build_linux: bool,

    #[serde(default)]
    pub force_reimport: bool,

    #[serde(default = "default_generated_code_dirs")]
    pub generated_code_dirs: Vec<PathBuf>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            mod_path: default_mod_path(),
            cache_bundles: true,
            build_bundles: true,
            build_linux: false,
            force_reimport: false,
            generated_code_dirs: default_generated_code_dirs(),
        }
    }
}

fn default_mod_path() -> PathBuf {
    PathBuf::from("Assets/Mod")
}

fn default_true() -> bool {
    true
}

fn default_generated_code_dirs() -> Vec<PathBuf> {
    DEFAULT_GENERATED_CODE_DIRS.iter().map(PathBuf::from).collect()
}

/// External bundle builder (`[bundler]`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BundlerConfig {
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,
}

/// One external preprocessor (`[[preprocess]]`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreprocessConfig {
    pub name: String,

    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(rename = "mod", default)]
    pub mod_: ModSection,

    #[serde(default)]
    pub build: BuildSection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundler: Option<BundlerConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preprocess: Vec<PreprocessConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ModpackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ModpackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `modpack.toml` from the project root, validate it and apply env overrides
    pub fn load_project(project_root: &Path) -> ModpackResult<(Self, Vec<ConfigWarning>)> {
        let path = project_root.join(CONFIG_FILE);
        let (config, warnings) = loader::load_with_warnings(&path)?;
        let config = loader::with_env_overrides(config);
        config.validate(&path)?;
        Ok((config, warnings))
    }

    /// Apply environment variable overrides (MODPACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Check the fields a build cannot do without
    pub fn validate(&self, file: &Path) -> ModpackResult<()> {
        loader::validate(self, file)
    }

    pub fn metadata(&self) -> ModMetadata {
        let mut metadata = ModMetadata::new(self.mod_.guid.clone(), self.mod_.name.clone());
        metadata.version = self.mod_.version.clone();
        metadata.author = self.mod_.author.clone();
        metadata.description = self.mod_.description.clone();
        metadata
    }

    /// Build the explicit settings value for one pipeline run. Relative paths
    /// are resolved against `project_root`.
    pub fn into_settings(&self, project_root: &Path, state: BuildState) -> BuildSettings {
        let mut settings = BuildSettings::new(project_root.join(&self.build.mod_path), self.metadata());
        settings.generated_code_dirs = self
            .build
            .generated_code_dirs
            .iter()
            .map(|dir| project_root.join(dir))
            .collect();
        settings.cache_bundles = self.build.cache_bundles;
        settings.build_bundles = self.build.build_bundles;
        settings.build_linux = self.build.build_linux;
        settings.force_reimport = self.build.force_reimport;
        settings.metadata_files = metadata_files();
        settings.state = state;
        settings
    }
}

/// Project bookkeeping files that may sit inside the mod tree but are never packaged inputs
pub fn metadata_files() -> Vec<String> {
    [CONFIG_FILE, LOCKFILE_NAME, BUILD_LOCK_NAME]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
