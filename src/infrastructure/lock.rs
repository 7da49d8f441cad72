//! Build-wide lock
//!
//! Holds an exclusive `fs2` lock on a lock file for the duration of a build so
//! that a second build, or any tool honouring the lock, cannot refresh the
//! source tree underneath it. Released when the guard drops.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::{ModpackError, ModpackResult};

/// Default lock file name, placed in the project root
pub const BUILD_LOCK_NAME: &str = ".modpack-build.lock";

#[derive(Debug)]
pub struct BuildLock {
    file: File,
    path: PathBuf,
}

impl BuildLock {
    /// Take the lock without waiting; fails with `BuildInProgress` if held
    pub fn acquire(path: &Path) -> ModpackResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        file.try_lock_exclusive()
            .map_err(|_| ModpackError::BuildInProgress {
                lock: path.to_path_buf(),
            })?;
        debug!(lock = %path.display(), "build lock acquired");
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }
}

impl Drop for BuildLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
        debug!(lock = %self.path.display(), "build lock released");
    }
}
