//! Path and extension rules that route assets into categories
//!
//! Classification never opens a file: a category is decided by where the
//! asset lives below the source root and by its extension.

use std::path::{Path, PathBuf};

use crate::domain::entities::AssetList;
use crate::domain::value_objects::AssetCategory;

/// Directory names whose contents never ship
pub const EXCLUDED_DIRS: [&str; 2] = ["Editor", "CodeGen"];

/// Extensions that never enter the hash ledger
pub const UNHASHED_EXTENSIONS: [&str; 3] = ["cs", "dll", "asmdef"];

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

/// True if any directory between `root` and `asset` is named `Editor` or `CodeGen`
pub fn is_in_excluded_dir(asset: &Path, root: &Path) -> bool {
    let Some(parent) = asset.parent() else {
        return false;
    };
    parent
        .ancestors()
        .take_while(|dir| *dir != root)
        .filter_map(|dir| dir.file_name())
        .any(|name| EXCLUDED_DIRS.iter().any(|excluded| name == *excluded))
}

/// Does `category` claim `asset`? Earlier categories must already have run.
pub fn claims(category: AssetCategory, asset: &Path, root: &Path) -> bool {
    let in_reserved_dir = category
        .source_dir()
        .map_or(true, |dir| asset.starts_with(root.join(dir)));
    let extension_matches = category
        .extension()
        .map_or(true, |ext| has_extension(asset, ext));

    match category {
        AssetCategory::Config | AssetCategory::Localization => in_reserved_dir && extension_matches,
        AssetCategory::Script | AssetCategory::Library | AssetCategory::Bundle => {
            extension_matches && !is_in_excluded_dir(asset, root)
        }
    }
}

/// Remove and return every asset `category` claims
pub fn route(category: AssetCategory, assets: &mut AssetList, root: &Path) -> Vec<PathBuf> {
    assets.take_where(|asset| claims(category, asset, root))
}

/// Should `asset` be recorded in the hash ledger and checked for changes?
///
/// Scripts, libraries, assembly definitions and the pipeline's own metadata
/// files are handled elsewhere and must not force a bundle rebuild.
pub fn is_hash_tracked(asset: &Path, metadata_files: &[String]) -> bool {
    if UNHASHED_EXTENSIONS.iter().any(|ext| has_extension(asset, ext)) {
        return false;
    }
    let is_metadata = asset
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| metadata_files.iter().any(|m| m == name));
    !is_metadata
}
