//! AssetList entity - the shrinking set of source files of one build pass
//!
//! Discovery creates it, preprocessors may edit it, and every routing stage
//! removes the assets it claims. Whatever is left at the end is bundled.

use std::path::{Path, PathBuf};

/// Ordered list of absolute asset paths, owned by the running build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetList {
    paths: Vec<PathBuf>,
}

impl AssetList {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Append an asset (ignored if already present)
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.contains(&path) {
            self.paths.push(path);
        }
    }

    /// Replace the whole list
    pub fn replace(&mut self, paths: Vec<PathBuf>) {
        self.paths = paths;
    }

    /// Remove and return every asset matching `claim`, keeping the order of both halves.
    pub fn take_where<F>(&mut self, mut claim: F) -> Vec<PathBuf>
    where
        F: FnMut(&Path) -> bool,
    {
        let (taken, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.paths).into_iter().partition(|p| claim(p));
        self.paths = kept;
        taken
    }
}
