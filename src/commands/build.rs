//! Build command - load the project, run the pipeline, persist state on success

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use modpack::application::ModBuilder;
use modpack::config::{Config, ConfigWarning, CONFIG_FILE};
use modpack::domain::ports::{BuildStateRepository, ProcessorRegistry};
use modpack::infrastructure::{
    register_commands, CommandBundler, LocalFs, TomlLockfileRepository, TouchReimporter,
    BUILD_LOCK_NAME, LOCKFILE_NAME,
};

use super::project_root::discover_project_root;

#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub config: Option<PathBuf>,
    pub export: PathBuf,
    pub flat: bool,
    pub linux: bool,
    pub no_cache: bool,
    pub force_reimport: bool,
}

/// Returns whether the build succeeded; errors are reserved for setup failures
pub fn cmd_build(args: &BuildArgs) -> Result<bool> {
    let (project_root, config_path) = match &args.config {
        Some(path) => {
            let root = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf();
            (root, path.clone())
        }
        None => {
            let cwd = std::env::current_dir().context("cannot read current directory")?;
            let root = discover_project_root(&cwd);
            let path = root.join(CONFIG_FILE);
            (root, path)
        }
    };

    let (config, warnings) = Config::load_with_warnings(&config_path)?;
    log_config_warnings(&warnings);
    let mut config = config.with_env_overrides();
    if args.linux {
        config.build.build_linux = true;
    }
    if args.no_cache {
        config.build.cache_bundles = false;
    }
    if args.force_reimport {
        config.build.force_reimport = true;
    }
    config.validate(&config_path)?;

    let repository = TomlLockfileRepository::new();
    let lockfile = project_root.join(LOCKFILE_NAME);
    let state = match repository.load(&lockfile) {
        Ok(state) => state,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable {}, doing a full rebuild", LOCKFILE_NAME);
            Default::default()
        }
    };
    let mut settings = config.into_settings(&project_root, state);

    let mut registry = ProcessorRegistry::new();
    register_commands(&mut registry, &config.preprocess, &project_root);

    let mut builder = ModBuilder::new(LocalFs::new())
        .with_registry(registry)
        .with_reimporter(TouchReimporter)
        .with_lock(project_root.join(BUILD_LOCK_NAME));
    if let Some(bundler) = &config.bundler {
        let program = resolve_program(&bundler.command, &project_root);
        builder = builder.with_bundler(CommandBundler::new(program, bundler.args.clone()));
    }

    // bundler output is matched against the bundle folder, so anchor it
    let export = std::env::current_dir()
        .context("cannot read current directory")?
        .join(&args.export);
    let succeeded = builder.build(&mut settings, &export, !args.flat);
    if succeeded {
        repository
            .save(&settings.state, &lockfile)
            .with_context(|| format!("failed to write {}", lockfile.display()))?;
    }
    Ok(succeeded)
}

/// Relative commands with a path separator are relative to the project root
fn resolve_program(command: &str, project_root: &Path) -> String {
    let path = Path::new(command);
    if path.is_relative() && (command.contains('/') || command.contains('\\')) {
        project_root.join(path).display().to_string()
    } else {
        command.to_string()
    }
}

fn log_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match &w.suggestion {
            Some(suggestion) => warn!(
                "unknown config key '{}' in {} (did you mean '{}'?)",
                w.key, location, suggestion
            ),
            None => warn!("unknown config key '{}' in {}", w.key, location),
        }
    }
}
