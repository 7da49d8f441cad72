//! modpack - mod packaging build pipeline
//!
//! Packages a mod's source tree (configuration, localization, scripts,
//! native libraries and raw assets) into an install directory plus a
//! `ModManifest.json` listing every produced file. Raw assets are compiled
//! into per-platform bundles by an external bundler; a content-hash ledger
//! decides when the previous bundles can be reused.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BuildReport, ModBuilder};
pub use config::Config;
pub use domain::entities::{BuildSettings, BuildState, ModMetadata};
pub use error::{ModpackError, ModpackResult};
