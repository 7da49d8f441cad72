//! Configuration module for modpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MODPACK_*)
//! 3. Project config (`modpack.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE};
pub use types::{
    metadata_files, BuildSection, BundlerConfig, Config, ModSection, PreprocessConfig,
};
