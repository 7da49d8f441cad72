//! FileSystem port - abstraction over file I/O operations
//!
//! The pipeline touches the disk only through this trait.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::ContentHash;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File or directory not found
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Any other I/O failure, with the path it happened on
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` that happened on `path`
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem {
    /// Every file (not directory) below `root`, recursively, sorted by path.
    /// Fails if `root` does not exist.
    fn list_files(&self, root: &Path) -> FsResult<Vec<PathBuf>>;

    /// Immediate entries (files and directories) of `dir`, sorted by path
    fn list_dir(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Copy `from` to `to`, creating parent directories and overwriting `to`
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Write text content, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything in it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Content hash (SHA-256), computed by streaming the file
    fn hash(&self, path: &Path) -> FsResult<ContentHash>;
}
