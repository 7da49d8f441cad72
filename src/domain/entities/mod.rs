//! Domain Entities
//!
//! - `AssetList` - source files of the running build, shrunk by routing
//! - `HashLedger` / `BuildState` - what the last successful build recorded
//! - `Manifest` / `ModMetadata` - produced files and the document listing them
//! - `BuildSettings` - caller-supplied settings for one build

mod asset_list;
mod ledger;
mod manifest;
mod settings;

pub use asset_list::AssetList;
pub(crate) use ledger::{normalize_ledger_path, parse_ledger_path};
pub use ledger::{BuildState, HashLedger};
pub use manifest::{Manifest, ModFile, ModMetadata, MANIFEST_FILE};
pub use settings::{BuildSettings, DEFAULT_GENERATED_CODE_DIRS};
