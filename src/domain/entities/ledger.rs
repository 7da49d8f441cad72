//! Hash ledger and build state
//!
//! The ledger maps source-relative paths to content hashes and is what the
//! change detector compares against. It is a pure data structure; loading and
//! saving go through `BuildStateRepository`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::value_objects::ContentHash;

/// Normalize a path for ledger storage (always use forward slashes).
pub(crate) fn normalize_ledger_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Parse a normalized ledger path back into a platform path.
pub(crate) fn parse_ledger_path(s: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(s.replace('/', "\\"))
    } else {
        PathBuf::from(s)
    }
}

/// Map of relative path to content hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashLedger {
    entries: BTreeMap<String, ContentHash>,
}

impl HashLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Record a hash. Separators in `path` are normalized.
    pub fn insert(&mut self, path: &Path, hash: ContentHash) {
        self.entries.insert(normalize_ledger_path(path), hash);
    }

    pub fn get(&self, path: &Path) -> Option<&ContentHash> {
        self.entries.get(&normalize_ledger_path(path))
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(&normalize_ledger_path(path))
    }

    /// Stored keys, normalized, in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ContentHash)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Everything a build remembers for the next one.
///
/// Replaced as a whole at the end of a successful build, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildState {
    /// Format version
    version: u32,
    /// Whether the last successful build that produced bundles included the
    /// Linux target. `None` means no bundles have been built yet.
    pub last_build_linux: Option<bool>,
    /// Source assets eligible for change detection
    pub assets: HashLedger,
    /// Files present in the bundle output folder after the last build
    pub bundles: HashLedger,
    /// When the last successful build finished
    pub built_at: Option<DateTime<Utc>>,
}

impl BuildState {
    pub const VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            last_build_linux: None,
            assets: HashLedger::new(),
            bundles: HashLedger::new(),
            built_at: None,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// True once a successful build has produced bundles
    pub fn has_built_bundles(&self) -> bool {
        self.last_build_linux.is_some()
    }
}

impl Default for BuildState {
    fn default() -> Self {
        Self::new()
    }
}
