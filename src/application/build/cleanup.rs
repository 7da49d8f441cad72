//! Scoped cleanup of files preprocessors left in the source tree

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::ports::FileSystem;

/// Deletes tracked temporary files when dropped, whatever the build outcome.
///
/// Only paths inside `root` are ever tracked; files a preprocessor added from
/// elsewhere are left alone.
pub(crate) struct TempFiles<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    root: PathBuf,
    paths: BTreeSet<PathBuf>,
}

impl<'a, FS: FileSystem + ?Sized> TempFiles<'a, FS> {
    pub(crate) fn new(fs: &'a FS, root: &Path) -> Self {
        Self {
            fs,
            root: root.to_path_buf(),
            paths: BTreeSet::new(),
        }
    }

    /// Track every path in `current` that was not part of `original`
    pub(crate) fn track_new<'p>(
        &mut self,
        original: &BTreeSet<PathBuf>,
        current: impl IntoIterator<Item = &'p PathBuf>,
    ) {
        for path in current {
            if !original.contains(path) && path.starts_with(&self.root) {
                debug!(path = %path.display(), "tracking temporary file");
                self.paths.insert(path.clone());
            }
        }
    }

    pub(crate) fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub(crate) fn len(&self) -> usize {
        self.paths.len()
    }
}

impl<FS: FileSystem + ?Sized> Drop for TempFiles<'_, FS> {
    fn drop(&mut self) {
        if !self.paths.is_empty() {
            debug!(count = self.paths.len(), "removing temporary files");
        }
        for path in &self.paths {
            if !self.fs.exists(path) {
                continue;
            }
            if let Err(e) = self.fs.remove_file(path) {
                warn!(path = %path.display(), error = %e, "failed to remove temporary file");
            }
        }
    }
}
