//! Command-line bundler
//!
//! Delegates bundle compilation to an external program. The asset list is
//! handed over in a temporary file, one absolute path per line.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{BundleRequest, Bundler, BundlerError};

/// Runs `<program> <args..> --target <platform> --group <group> --output <dir>
/// --bundle <name> --assets <list file>`.
///
/// Exit status 0 is success. Every non-empty stdout line names a produced
/// file (relative lines are resolved against the output directory). With no
/// stdout the bundle file itself is assumed to be the only output.
#[derive(Debug, Clone)]
pub struct CommandBundler {
    program: String,
    args: Vec<String>,
}

impl CommandBundler {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn produced_files(stdout: &str, request: &BundleRequest<'_>) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let path = Path::new(line);
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    request.output_dir.join(path)
                }
            })
            .collect();

        if files.is_empty() {
            let bundle = request.output_dir.join(request.bundle_name);
            if bundle.is_file() {
                files.push(bundle);
            }
        }
        files
    }
}

impl Bundler for CommandBundler {
    fn build_bundles(&self, request: &BundleRequest<'_>) -> Result<Vec<PathBuf>, BundlerError> {
        std::fs::create_dir_all(request.output_dir)?;

        let mut list = tempfile::NamedTempFile::new()?;
        for asset in request.assets {
            writeln!(list, "{}", asset.display())?;
        }
        list.flush()?;

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg("--target")
            .arg(request.target.platform())
            .arg("--group")
            .arg(request.target.group())
            .arg("--output")
            .arg(request.output_dir)
            .arg("--bundle")
            .arg(request.bundle_name)
            .arg("--assets")
            .arg(list.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        debug!(program = %self.program, target = %request.target, "running bundler");
        let output = cmd
            .output()
            .map_err(|e| BundlerError::Failed(format!("could not start '{}': {}", self.program, e)))?;

        if !output.status.success() {
            return Err(BundlerError::Failed(format!(
                "'{}' exited with code {:?}",
                self.program,
                output.status.code()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(Self::produced_files(&stdout, request))
    }
}
