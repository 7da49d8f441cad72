//! Pipeline stages
//!
//! Each stage borrows the asset list exclusively, removes what it claims and
//! appends what it writes to the manifest. Nothing is retained between calls.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::entities::{AssetList, BuildSettings, HashLedger, Manifest};
use crate::domain::ports::{BundleRequest, Bundler, FileSystem, ScriptReimporter};
use crate::domain::services::{is_hash_tracked, route, CacheDecision};
use crate::domain::value_objects::AssetCategory;
use crate::error::{ModpackError, ModpackResult};

/// Upstream bundle build log left in the bundle directory
pub const BUNDLE_BUILD_LOG: &str = "buildlogtep.json";

/// Output subdirectory for code-generation output
pub const GENERATED_DIR: &str = "Generated";

/// `<install>/Bundles`
pub(crate) fn bundle_dir(install_dir: &Path) -> PathBuf {
    install_dir.join(AssetCategory::Bundle.output_dir().unwrap_or("Bundles"))
}

/// Every file under `root`, sorted
pub fn discover<FS: FileSystem + ?Sized>(fs: &FS, root: &Path) -> ModpackResult<AssetList> {
    if !fs.is_dir(root) {
        return Err(ModpackError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }
    Ok(AssetList::new(fs.list_files(root)?))
}

/// Bring the install directory in line with the cache decision.
///
/// In a dedicated subdirectory, reuse keeps only the bundle folder and a
/// rebuild starts from an empty directory. When installing straight into the
/// export path nothing outside the bundle folder is removed.
pub fn reconcile_install_dir<FS: FileSystem + ?Sized>(
    fs: &FS,
    install_dir: &Path,
    decision: &CacheDecision,
    owns_install_dir: bool,
) -> ModpackResult<()> {
    let bundles = bundle_dir(install_dir);

    match (decision, owns_install_dir) {
        (CacheDecision::Reuse, true) => {
            if fs.is_dir(install_dir) {
                for entry in fs.list_dir(install_dir)? {
                    if entry == bundles {
                        continue;
                    }
                    if fs.is_dir(&entry) {
                        fs.remove_dir_all(&entry)?;
                    } else {
                        fs.remove_file(&entry)?;
                    }
                }
            }
        }
        (CacheDecision::Rebuild(_), true) => {
            if fs.exists(install_dir) {
                debug!(dir = %install_dir.display(), "clearing install directory");
                fs.remove_dir_all(install_dir)?;
            }
        }
        (CacheDecision::Rebuild(_), false) => {
            if fs.is_dir(&bundles) {
                fs.remove_dir_all(&bundles)?;
            }
        }
        (CacheDecision::Reuse, false) => {}
    }

    fs.create_dir_all(install_dir)?;
    Ok(())
}

/// Config and localization: copy keeping the path below the source root
pub fn copy_direct<FS: FileSystem + ?Sized>(
    fs: &FS,
    category: AssetCategory,
    assets: &mut AssetList,
    source_root: &Path,
    install_dir: &Path,
    manifest: &mut Manifest,
) -> ModpackResult<usize> {
    let routed = route(category, assets, source_root);
    for asset in &routed {
        let dest = install_dir.join(relative_to(asset, source_root)?);
        fs.copy(asset, &dest)?;
        manifest.push(dest);
    }
    debug!(%category, count = routed.len(), "copied");
    Ok(routed.len())
}

/// Scripts keep their source-relative path under `Scripts/`; generated code
/// for this mod is flattened into `Scripts/Generated/`.
pub fn copy_scripts<FS: FileSystem + ?Sized>(
    fs: &FS,
    reimporter: Option<&dyn ScriptReimporter>,
    settings: &BuildSettings,
    assets: &mut AssetList,
    install_dir: &Path,
    manifest: &mut Manifest,
) -> ModpackResult<usize> {
    let source_root = settings.mod_path.as_path();
    let scripts = route(AssetCategory::Script, assets, source_root);

    if settings.force_reimport && !scripts.is_empty() {
        match reimporter {
            Some(reimporter) => {
                if let Err(e) = reimporter.reimport(&scripts) {
                    warn!(error = %e, "script reimport failed, copying scripts as they are");
                }
            }
            None => debug!("force reimport requested but no reimporter configured"),
        }
    }

    let out = install_dir.join(AssetCategory::Script.output_dir().unwrap_or("Scripts"));
    for script in &scripts {
        // preprocessors may add scripts from outside the source tree
        let dest = match script.strip_prefix(source_root) {
            Ok(relative) => out.join(relative),
            Err(_) => match script.file_name() {
                Some(name) => out.join(name),
                None => continue,
            },
        };
        fs.copy(script, &dest)?;
        manifest.push(dest);
    }

    let mut generated = 0;
    for dir in &settings.generated_code_dirs {
        let mod_dir = dir.join(settings.mod_name());
        if !fs.is_dir(&mod_dir) {
            continue;
        }
        for file in fs.list_files(&mod_dir)? {
            let Some(name) = file.file_name() else {
                continue;
            };
            let dest = out.join(GENERATED_DIR).join(name);
            fs.copy(&file, &dest)?;
            manifest.push(dest);
            generated += 1;
        }
    }

    debug!(scripts = scripts.len(), generated, "copied scripts");
    Ok(scripts.len() + generated)
}

/// Libraries are copied flat under `Libraries/`
pub fn copy_libraries<FS: FileSystem + ?Sized>(
    fs: &FS,
    assets: &mut AssetList,
    source_root: &Path,
    install_dir: &Path,
    manifest: &mut Manifest,
) -> ModpackResult<usize> {
    let out = install_dir.join(AssetCategory::Library.output_dir().unwrap_or("Libraries"));
    let libraries = route(AssetCategory::Library, assets, source_root);
    for library in &libraries {
        let Some(name) = library.file_name() else {
            continue;
        };
        let dest = out.join(name);
        fs.copy(library, &dest)?;
        manifest.push(dest);
    }
    Ok(libraries.len())
}

/// Build bundles for every target, or list the previous output on reuse.
///
/// Returns the number of bundle files appended to the manifest.
pub fn package_bundles<FS: FileSystem + ?Sized>(
    fs: &FS,
    bundler: Option<&dyn Bundler>,
    settings: &BuildSettings,
    eligible: &[PathBuf],
    decision: &CacheDecision,
    install_dir: &Path,
    manifest: &mut Manifest,
) -> ModpackResult<usize> {
    let out = bundle_dir(install_dir);

    if let CacheDecision::Rebuild(reason) = decision {
        if eligible.is_empty() {
            debug!("no bundle-eligible assets");
            return Ok(0);
        }
        let bundler = bundler.ok_or(ModpackError::BundlerNotConfigured)?;
        info!(%reason, assets = eligible.len(), "building bundles");

        fs.create_dir_all(&out)?;
        let log = out.join(BUNDLE_BUILD_LOG);
        let mut count = 0;
        for target in settings.targets() {
            let bundle_name = target.bundle_name(settings.mod_name());
            let request = BundleRequest {
                target,
                bundle_name: &bundle_name,
                output_dir: &out,
                assets: eligible,
            };
            let mut produced: Vec<PathBuf> = bundler
                .build_bundles(&request)
                .map_err(|source| ModpackError::Bundle { target, source })?
                .into_iter()
                .filter(|path| *path != log && is_bundle_output(path, &out))
                .collect();
            produced.sort();
            count += produced.len();
            manifest.extend(produced);

            if fs.exists(&log) {
                if let Err(e) = fs.remove_file(&log) {
                    warn!(error = %e, "could not remove bundle build log");
                }
            }
        }
        return Ok(count);
    }

    if !fs.is_dir(&out) {
        return Ok(0);
    }
    let existing = fs.list_files(&out)?;
    info!(files = existing.len(), "reusing cached bundles");
    let count = existing.len();
    manifest.extend(existing);
    Ok(count)
}

/// Only files inside the bundle folder can be listed again on reuse
fn is_bundle_output(path: &Path, out: &Path) -> bool {
    let inside = path.starts_with(out)
        && !path.components().any(|c| matches!(c, Component::ParentDir));
    if !inside {
        warn!(file = %path.display(), "ignoring bundler output outside the bundle folder");
    }
    inside
}

/// Hash every tracked file under `root`, skipping paths `skip` rejects
pub fn scan_ledger<FS: FileSystem + ?Sized>(
    fs: &FS,
    root: &Path,
    metadata_files: &[String],
    skip: impl Fn(&Path) -> bool,
) -> ModpackResult<HashLedger> {
    let mut ledger = HashLedger::new();
    for file in fs.list_files(root)? {
        if !is_hash_tracked(&file, metadata_files) || skip(&file) {
            continue;
        }
        ledger.insert(relative_to(&file, root)?, fs.hash(&file)?);
    }
    Ok(ledger)
}

/// Hash every file in the bundle folder
pub fn scan_bundles<FS: FileSystem + ?Sized>(
    fs: &FS,
    install_dir: &Path,
) -> ModpackResult<HashLedger> {
    let out = bundle_dir(install_dir);
    let mut ledger = HashLedger::new();
    if !fs.is_dir(&out) {
        return Ok(ledger);
    }
    for file in fs.list_files(&out)? {
        ledger.insert(relative_to(&file, &out)?, fs.hash(&file)?);
    }
    Ok(ledger)
}

fn relative_to<'p>(path: &'p Path, root: &Path) -> ModpackResult<&'p Path> {
    path.strip_prefix(root).map_err(|_| ModpackError::PathEscape {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    })
}
