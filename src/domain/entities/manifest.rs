//! Manifest and mod metadata
//!
//! `Manifest` collects the absolute path of every file a build produces.
//! `ModMetadata` is the document written next to those files; its file list is
//! the manifest rewritten relative to the install directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::ledger::normalize_ledger_path;
use crate::error::{ModpackError, ModpackResult};

/// File name of the manifest document at the install root
pub const MANIFEST_FILE: &str = "ModManifest.json";

/// One produced file, relative to the install root with `/` separators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModFile {
    pub path: String,
}

/// Mod identity plus the produced file list.
///
/// Owned by the caller; a build only clears and repopulates `files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModMetadata {
    pub guid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub files: Vec<ModFile>,
}

impl ModMetadata {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            version: None,
            author: None,
            description: None,
            files: Vec::new(),
        }
    }

    /// Replace the file list with `manifest` made relative to `install_root`
    pub fn set_files(&mut self, manifest: &Manifest, install_root: &Path) -> ModpackResult<()> {
        self.files.clear();
        for path in manifest.relative_to(install_root)? {
            self.files.push(ModFile { path });
        }
        Ok(())
    }
}

/// Append-only list of files produced by the current build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    files: Vec<PathBuf>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.files.push(path.into());
    }

    pub fn extend<I: IntoIterator<Item = PathBuf>>(&mut self, paths: I) {
        self.files.extend(paths);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter()
    }

    /// Entries relative to `root`, `/`-separated, in append order
    pub fn relative_to(&self, root: &Path) -> ModpackResult<Vec<String>> {
        self.files
            .iter()
            .map(|file| {
                file.strip_prefix(root)
                    .map(normalize_ledger_path)
                    .map_err(|_| ModpackError::PathEscape {
                        path: file.clone(),
                        root: root.to_path_buf(),
                    })
            })
            .collect()
    }
}
