//! Command-line preprocessors declared in `[[preprocess]]`

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::PreprocessConfig;
use crate::domain::entities::{AssetList, BuildSettings};
use crate::domain::ports::{PreprocessError, Preprocessor, ProcessorRegistry};

/// Runs `<command> <args..> --mod <mod path> --install <dir> --assets <list file>`.
///
/// The list file holds the current asset list, one path per line. The command
/// may rewrite it; whatever it contains afterwards becomes the new list.
#[derive(Debug, Clone)]
pub struct CommandPreprocessor {
    name: String,
    program: PathBuf,
    args: Vec<String>,
}

impl CommandPreprocessor {
    /// Resolve a configured preprocessor. Relative commands containing a path
    /// separator are resolved against `project_root` and must exist.
    pub fn resolve(config: &PreprocessConfig, project_root: &Path) -> Result<Self, PreprocessError> {
        let load_error = |message: String| PreprocessError::Load {
            name: config.name.clone(),
            message,
        };

        let command = config.command.trim();
        if command.is_empty() {
            return Err(load_error("empty command".to_string()));
        }

        let program = if command.contains('/') || command.contains('\\') {
            let path = project_root.join(command);
            if !path.is_file() {
                return Err(load_error(format!("{} does not exist", path.display())));
            }
            path
        } else {
            PathBuf::from(command)
        };

        Ok(Self {
            name: config.name.clone(),
            program,
            args: config.args.clone(),
        })
    }
}

impl Preprocessor for CommandPreprocessor {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(
        &self,
        settings: &BuildSettings,
        install_dir: &Path,
        assets: &mut AssetList,
    ) -> Result<(), PreprocessError> {
        let mut list = tempfile::NamedTempFile::new()?;
        for asset in assets.iter() {
            writeln!(list, "{}", asset.display())?;
        }
        list.flush()?;

        debug!(processor = %self.name, "running preprocessor");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg("--mod")
            .arg(&settings.mod_path)
            .arg("--install")
            .arg(install_dir)
            .arg("--assets")
            .arg(list.path())
            .stdin(Stdio::null())
            .status()
            .map_err(|e| PreprocessError::Failed {
                name: self.name.clone(),
                message: format!("could not start {}: {}", self.program.display(), e),
            })?;

        if !status.success() {
            return Err(PreprocessError::Failed {
                name: self.name.clone(),
                message: format!("exited with code {:?}", status.code()),
            });
        }

        let updated = std::fs::read_to_string(list.path())?;
        assets.replace(
            updated
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(PathBuf::from)
                .collect(),
        );
        Ok(())
    }
}

/// Register one factory per configured preprocessor
pub fn register_commands(
    registry: &mut ProcessorRegistry,
    configs: &[PreprocessConfig],
    project_root: &Path,
) {
    for config in configs {
        let config = config.clone();
        let root = project_root.to_path_buf();
        registry.register(config.name.clone(), move || {
            CommandPreprocessor::resolve(&config, &root)
                .map(|p| Box::new(p) as Box<dyn Preprocessor>)
        });
    }
}
