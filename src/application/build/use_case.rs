//! Build Use Case
//!
//! Orchestrates one packaging run:
//! 1. Discover the source tree and decide whether cached bundles are reusable
//! 2. Reconcile the install directory with that decision
//! 3. Run preprocessors over the asset list
//! 4. Route and copy config, localization, scripts and libraries
//! 5. Build or reuse bundles
//! 6. Write the manifest and record the new build state
//!
//! Temporary files and the build lock are released on every exit path.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, error, info};

use crate::domain::entities::{
    AssetList, BuildSettings, BuildState, HashLedger, Manifest, MANIFEST_FILE,
};
use crate::domain::ports::{Bundler, FileSystem, ProcessorRegistry, ScriptReimporter};
use crate::domain::services::{route, CacheDecision, ChangeDetector, StaleReason};
use crate::domain::value_objects::AssetCategory;
use crate::error::ModpackResult;
use crate::infrastructure::lock::BuildLock;

use super::cleanup::TempFiles;
use super::result::BuildReport;
use super::stages;

/// Build use case - packages a mod source tree into an install directory
///
/// Parameterized by its file system port; bundler, preprocessors and the
/// reimport hint are optional collaborators.
pub struct ModBuilder<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    bundler: Option<Box<dyn Bundler>>,
    registry: ProcessorRegistry,
    reimporter: Option<Box<dyn ScriptReimporter>>,
    lock_path: Option<PathBuf>,
}

impl<FS> ModBuilder<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self {
            file_system,
            bundler: None,
            registry: ProcessorRegistry::new(),
            reimporter: None,
            lock_path: None,
        }
    }

    pub fn with_bundler(mut self, bundler: impl Bundler + 'static) -> Self {
        self.bundler = Some(Box::new(bundler));
        self
    }

    pub fn with_registry(mut self, registry: ProcessorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_reimporter(mut self, reimporter: impl ScriptReimporter + 'static) -> Self {
        self.reimporter = Some(Box::new(reimporter));
        self
    }

    /// Hold an exclusive lock on `path` for the duration of each build
    pub fn with_lock(mut self, path: impl Into<PathBuf>) -> Self {
        self.lock_path = Some(path.into());
        self
    }

    /// Run a build and report success.
    ///
    /// Failures are logged; `settings.state` is left untouched unless the
    /// whole build succeeded.
    pub fn build(
        &self,
        settings: &mut BuildSettings,
        export_path: &Path,
        install_in_subdirectory: bool,
    ) -> bool {
        match self.try_build(settings, export_path, install_in_subdirectory) {
            Ok(report) => {
                info!(
                    files = report.file_count(),
                    reused_bundles = report.reused_bundles(),
                    install = %report.install_dir.display(),
                    "build finished"
                );
                true
            }
            Err(e) => {
                error!(error = %e, "build failed");
                false
            }
        }
    }

    /// Run a build, returning what it produced
    pub fn try_build(
        &self,
        settings: &mut BuildSettings,
        export_path: &Path,
        install_in_subdirectory: bool,
    ) -> ModpackResult<BuildReport> {
        let fs = &self.file_system;
        let source_root = settings.mod_path.clone();
        let install_dir = if install_in_subdirectory {
            export_path.join(settings.mod_name())
        } else {
            export_path.to_path_buf()
        };

        let _lock = self.lock_path.as_deref().map(BuildLock::acquire).transpose()?;
        let discovered = stages::discover(fs, &source_root)?;
        info!(
            source = %source_root.display(),
            assets = discovered.len(),
            "discovered assets"
        );

        let decision = self.decide(settings, &discovered, &install_dir)?;
        match &decision {
            CacheDecision::Reuse => info!("bundles are up to date"),
            CacheDecision::Rebuild(reason) => debug!(%reason, "bundles are stale"),
        }
        stages::reconcile_install_dir(fs, &install_dir, &decision, install_in_subdirectory)?;

        let original: BTreeSet<PathBuf> = discovered.iter().cloned().collect();
        let mut assets = discovered;
        let mut temp_files = TempFiles::new(fs, &source_root);
        let preprocessed = self.preprocess(settings, &install_dir, &mut assets);
        temp_files.track_new(&original, assets.iter());
        let preprocessors = preprocessed?;

        let manifest_path = install_dir.join(MANIFEST_FILE);
        let mut report = BuildReport::new(decision, install_dir.clone(), manifest_path.clone());
        report.preprocessors = preprocessors;

        let mut manifest = Manifest::new();
        report.config_count = stages::copy_direct(
            fs,
            AssetCategory::Config,
            &mut assets,
            &source_root,
            &install_dir,
            &mut manifest,
        )?;
        report.localization_count = stages::copy_direct(
            fs,
            AssetCategory::Localization,
            &mut assets,
            &source_root,
            &install_dir,
            &mut manifest,
        )?;
        report.script_count = stages::copy_scripts(
            fs,
            self.reimporter.as_deref(),
            settings,
            &mut assets,
            &install_dir,
            &mut manifest,
        )?;
        report.library_count =
            stages::copy_libraries(fs, &mut assets, &source_root, &install_dir, &mut manifest)?;

        let eligible = route(AssetCategory::Bundle, &mut assets, &source_root);
        report.excluded_count = assets.len();
        for skipped in assets.iter() {
            debug!(asset = %skipped.display(), "excluded from output");
        }
        if settings.build_bundles {
            report.bundle_count = stages::package_bundles(
                fs,
                self.bundler.as_deref(),
                settings,
                &eligible,
                &report.decision,
                &install_dir,
                &mut manifest,
            )?;
        } else {
            debug!(assets = eligible.len(), "bundling disabled");
        }

        settings.metadata.set_files(&manifest, &install_dir)?;
        let document = serde_json::to_string_pretty(&settings.metadata)?;
        fs.write(&manifest_path, &document)?;

        let assets_ledger = stages::scan_ledger(
            fs,
            &source_root,
            &settings.metadata_files,
            |path| temp_files.contains(path),
        )?;
        let bundles_ledger = if settings.build_bundles {
            stages::scan_bundles(fs, &install_dir)?
        } else {
            HashLedger::new()
        };

        let mut state = BuildState::new();
        // a build without bundles leaves nothing for the next one to reuse
        state.last_build_linux = settings.build_bundles.then_some(settings.build_linux);
        state.assets = assets_ledger;
        state.bundles = bundles_ledger;
        state.built_at = Some(Utc::now());
        settings.state = state;

        Ok(report)
    }

    fn decide(
        &self,
        settings: &BuildSettings,
        assets: &AssetList,
        install_dir: &Path,
    ) -> ModpackResult<CacheDecision> {
        if !settings.cache_bundles || !settings.build_bundles {
            return Ok(CacheDecision::Rebuild(StaleReason::CachingDisabled));
        }
        let bundle_dir = stages::bundle_dir(install_dir);
        let detector = ChangeDetector::new(
            &self.file_system,
            &settings.state,
            &settings.metadata_files,
        );
        Ok(detector.detect(
            &settings.mod_path,
            assets.as_slice(),
            settings.build_linux,
            Some(&bundle_dir),
        )?)
    }

    /// Run every loadable preprocessor in registration order
    fn preprocess(
        &self,
        settings: &BuildSettings,
        install_dir: &Path,
        assets: &mut AssetList,
    ) -> ModpackResult<Vec<String>> {
        let processors = self.registry.instantiate();
        let mut ran = Vec::with_capacity(processors.len());
        for processor in processors {
            debug!(processor = processor.name(), "preprocessing");
            processor.execute(settings, install_dir, assets)?;
            ran.push(processor.name().to_string());
        }
        Ok(ran)
    }
}
