//! TOML Build State Repository
//!
//! Implements the BuildStateRepository port using TOML format.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{parse_ledger_path, BuildState, HashLedger};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::state_repository::{BuildStateRepository, StateError, StateResult};
use crate::domain::value_objects::ContentHash;
use crate::infrastructure::fs::LocalFs;

/// Default file name of the persisted build state
pub const LOCKFILE_NAME: &str = "modpack.lock";

/// TOML-based build state repository
///
/// Stores state as `modpack.lock` in TOML format.
pub struct TomlLockfileRepository {
    fs: LocalFs,
}

impl TomlLockfileRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for TomlLockfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// TOML representation of the last build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TomlBuild {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    linux: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    finished_at: Option<DateTime<Utc>>,
}

/// TOML representation of the lockfile
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlLockfile {
    version: u32,
    #[serde(default)]
    build: TomlBuild,
    #[serde(default)]
    assets: BTreeMap<String, String>,
    #[serde(default)]
    bundles: BTreeMap<String, String>,
}

fn to_ledger(entries: BTreeMap<String, String>) -> HashLedger {
    let mut ledger = HashLedger::new();
    for (path, hash) in entries {
        ledger.insert(&parse_ledger_path(&path), ContentHash::new(&hash));
    }
    ledger
}

fn from_ledger(ledger: &HashLedger) -> BTreeMap<String, String> {
    ledger
        .entries()
        .map(|(path, hash)| (path.to_string(), hash.to_string()))
        .collect()
}

impl BuildStateRepository for TomlLockfileRepository {
    fn load(&self, path: &Path) -> StateResult<BuildState> {
        if !self.fs.exists(path) {
            return Ok(BuildState::new());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| StateError::Io(e.to_string()))?;
        let toml_lockfile: TomlLockfile =
            toml::from_str(&content).map_err(|e| StateError::Parse(e.to_string()))?;

        if toml_lockfile.version != BuildState::VERSION {
            return Err(StateError::VersionMismatch {
                found: toml_lockfile.version,
                expected: BuildState::VERSION,
            });
        }

        let mut state = BuildState::new();
        state.last_build_linux = toml_lockfile.build.linux;
        state.built_at = toml_lockfile.build.finished_at;
        state.assets = to_ledger(toml_lockfile.assets);
        state.bundles = to_ledger(toml_lockfile.bundles);
        Ok(state)
    }

    fn save(&self, state: &BuildState, path: &Path) -> StateResult<()> {
        let toml_lockfile = TomlLockfile {
            version: state.version(),
            build: TomlBuild {
                linux: state.last_build_linux,
                finished_at: state.built_at,
            },
            assets: from_ledger(&state.assets),
            bundles: from_ledger(&state.bundles),
        };

        let content = toml::to_string_pretty(&toml_lockfile)
            .map_err(|e| StateError::Parse(e.to_string()))?;
        self.fs
            .write(path, &content)
            .map_err(|e| StateError::Io(e.to_string()))?;

        Ok(())
    }
}
