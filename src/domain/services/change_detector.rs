//! Decides whether bundles from the previous build can be reused

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{normalize_ledger_path, parse_ledger_path, BuildState};
use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::services::classifier::is_hash_tracked;

/// Why cached bundles cannot be reused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    /// Bundle reuse is switched off for this build
    CachingDisabled,
    /// No successful build has produced bundles yet
    FirstBuild,
    /// The requested platform set differs from the last build's
    PlatformsChanged,
    /// An asset has no ledger entry or an empty hash (new, renamed or moved)
    Untracked(PathBuf),
    /// An asset's content hash differs from its ledger entry
    Modified(PathBuf),
    /// A ledger entry's asset is gone from the source tree
    Removed(PathBuf),
    /// The bundle folder no longer matches what the last build left there
    BundleOutputChanged(String),
}

impl fmt::Display for StaleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaleReason::CachingDisabled => write!(f, "bundle caching disabled"),
            StaleReason::FirstBuild => write!(f, "no previous bundle build recorded"),
            StaleReason::PlatformsChanged => write!(f, "platform selection changed"),
            StaleReason::Untracked(p) => write!(f, "{} is new, renamed or moved", p.display()),
            StaleReason::Modified(p) => write!(f, "{} changed", p.display()),
            StaleReason::Removed(p) => write!(f, "{} was removed", p.display()),
            StaleReason::BundleOutputChanged(name) => {
                write!(f, "bundle output {} differs from the last build", name)
            }
        }
    }
}

/// Outcome of change detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheDecision {
    Reuse,
    Rebuild(StaleReason),
}

impl CacheDecision {
    /// True when bundles must be rebuilt
    pub fn is_stale(&self) -> bool {
        matches!(self, CacheDecision::Rebuild(_))
    }
}

/// Compares the current source tree against the recorded `BuildState`
pub struct ChangeDetector<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    state: &'a BuildState,
    metadata_files: &'a [String],
}

impl<'a, FS: FileSystem + ?Sized> ChangeDetector<'a, FS> {
    pub fn new(fs: &'a FS, state: &'a BuildState, metadata_files: &'a [String]) -> Self {
        Self {
            fs,
            state,
            metadata_files,
        }
    }

    /// Check platforms, then every hash-tracked asset, then (when `bundle_dir`
    /// is given) the bundle folder against its recorded contents.
    pub fn detect(
        &self,
        source_root: &Path,
        assets: &[PathBuf],
        build_linux: bool,
        bundle_dir: Option<&Path>,
    ) -> FsResult<CacheDecision> {
        let Some(last_build_linux) = self.state.last_build_linux else {
            return Ok(CacheDecision::Rebuild(StaleReason::FirstBuild));
        };
        if last_build_linux != build_linux {
            return Ok(CacheDecision::Rebuild(StaleReason::PlatformsChanged));
        }

        let mut seen = BTreeSet::new();
        for asset in assets {
            if !is_hash_tracked(asset, self.metadata_files) {
                continue;
            }
            let Ok(relative) = asset.strip_prefix(source_root) else {
                return Ok(CacheDecision::Rebuild(StaleReason::Untracked(asset.clone())));
            };
            let recorded = match self.state.assets.get(relative) {
                Some(hash) if !hash.is_empty() => hash,
                _ => {
                    debug!(asset = %relative.display(), "not found in ledger");
                    return Ok(CacheDecision::Rebuild(StaleReason::Untracked(
                        relative.to_path_buf(),
                    )));
                }
            };
            if !self.fs.hash(asset)?.matches(recorded) {
                debug!(asset = %relative.display(), "content changed");
                return Ok(CacheDecision::Rebuild(StaleReason::Modified(
                    relative.to_path_buf(),
                )));
            }
            seen.insert(normalize_ledger_path(relative));
        }

        if let Some(gone) = self.state.assets.keys().find(|key| !seen.contains(*key)) {
            debug!(asset = gone, "ledger entry without source file");
            return Ok(CacheDecision::Rebuild(StaleReason::Removed(parse_ledger_path(
                gone,
            ))));
        }

        if let Some(bundle_dir) = bundle_dir {
            if let Some(reason) = self.check_bundle_output(bundle_dir)? {
                return Ok(CacheDecision::Rebuild(reason));
            }
        }

        Ok(CacheDecision::Reuse)
    }

    fn check_bundle_output(&self, bundle_dir: &Path) -> FsResult<Option<StaleReason>> {
        let present = if self.fs.is_dir(bundle_dir) {
            self.fs.list_files(bundle_dir)?
        } else {
            Vec::new()
        };

        let present_names: BTreeSet<String> = present
            .iter()
            .filter_map(|p| p.strip_prefix(bundle_dir).ok())
            .map(normalize_ledger_path)
            .collect();
        let recorded_names: BTreeSet<String> =
            self.state.bundles.keys().map(str::to_string).collect();

        if let Some(name) = present_names.symmetric_difference(&recorded_names).next() {
            return Ok(Some(StaleReason::BundleOutputChanged(name.clone())));
        }

        for (name, recorded) in self.state.bundles.entries() {
            let path = bundle_dir.join(parse_ledger_path(name));
            if !self.fs.hash(&path)?.matches(recorded) {
                return Ok(Some(StaleReason::BundleOutputChanged(name.to_string())));
            }
        }

        Ok(None)
    }
}
