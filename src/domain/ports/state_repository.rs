//! BuildStateRepository port - persistence of the hash ledger between builds

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::BuildState;

/// Result type for state operations
pub type StateResult<T> = Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    /// State file could not be parsed or serialized
    #[error("invalid build state: {0}")]
    Parse(String),
    /// State file was written by an incompatible version
    #[error("build state format incompatible (found version {found}, expected {expected}); delete it to force a full rebuild")]
    VersionMismatch { found: u32, expected: u32 },
    /// I/O error
    #[error("build state I/O error: {0}")]
    Io(String),
}

/// Abstract repository for build state persistence
pub trait BuildStateRepository {
    /// Load state, or an empty state when no file exists
    fn load(&self, path: &Path) -> StateResult<BuildState>;

    /// Load state, falling back to an empty state on any error
    fn load_or_new(&self, path: &Path) -> BuildState {
        self.load(path).unwrap_or_default()
    }

    /// Save state, replacing any previous file
    fn save(&self, state: &BuildState, path: &Path) -> StateResult<()>;
}
