//! Error types for modpack
//!
//! Library code returns `ModpackError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{BundlerError, FsError, PreprocessError, StateError};
use crate::domain::value_objects::BuildTarget;

/// Result type alias for modpack operations
pub type ModpackResult<T> = Result<T, ModpackError>;

/// Main error type for modpack operations
#[derive(Error, Debug)]
pub enum ModpackError {
    /// Source directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File system port error
    #[error(transparent)]
    Fs(#[from] FsError),

    /// External bundler failed for one platform
    #[error("bundle build failed for {target}: {source}")]
    Bundle {
        target: BuildTarget,
        #[source]
        source: BundlerError,
    },

    /// Bundling is enabled and there is something to bundle, but no bundler is set
    #[error("no bundler configured; set [bundler].command or disable build_bundles")]
    BundlerNotConfigured,

    /// A preprocessor failed while executing
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),

    /// Persisted build state could not be read or written
    #[error(transparent)]
    State(#[from] StateError),

    /// Another build holds the build lock
    #[error("another build is already running (lock held at {lock})")]
    BuildInProgress { lock: PathBuf },

    /// Asset path does not live under the expected root
    #[error("path '{path}' is outside '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Manifest serialization failed
    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}
