//! Test environment builder for isolated modpack testing.
//!
//! Provides `TestEnv` - a temp project directory with the canonical source
//! tree, plus helpers to run the `modpack` CLI inside it.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::rc::Rc;

use modpack::domain::ports::{BundleRequest, Bundler, BundlerError};
use tempfile::TempDir;

use super::fixtures::SOURCE_TREE;

/// Result of running a modpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    modpack_bin: PathBuf,
}

impl TestEnv {
    /// Empty project
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create temp dir"),
            modpack_bin: PathBuf::from(env!("CARGO_BIN_EXE_modpack")),
        }
    }

    /// Project with `config` as modpack.toml and the canonical source tree
    pub fn with_config(config: &str) -> Self {
        let env = Self::new();
        env.write_project_file("modpack.toml", config);
        for (path, content) in SOURCE_TREE {
            env.write_source_file(path, content);
        }
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Root of the mod source tree (`Assets/Mod`)
    pub fn source_root(&self) -> PathBuf {
        self.project_path("Assets/Mod")
    }

    /// Default install directory (`Build/MyMod`)
    pub fn install_dir(&self) -> PathBuf {
        self.project_path("Build/MyMod")
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(full_path, content).expect("Failed to write file");
    }

    pub fn write_source_file(&self, relative_path: &str, content: &str) {
        self.write_project_file(&format!("Assets/Mod/{}", relative_path), content);
    }

    /// Run modpack from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(&self.modpack_bin);
        cmd.current_dir(cwd).args(args).env("NO_COLOR", "1");
        for key in [
            "MODPACK_BUILD_LINUX",
            "MODPACK_CACHE_BUNDLES",
            "MODPACK_BUILD_BUNDLES",
            "MODPACK_FORCE_REIMPORT",
            "MODPACK_BUNDLER",
            "RUST_LOG",
        ] {
            cmd.env_remove(key);
        }
        let output = cmd.output().expect("Failed to execute modpack");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Parsed `ModManifest.json` file paths from the default install directory
    pub fn manifest_files(&self) -> Vec<String> {
        let text = fs::read_to_string(self.install_dir().join("ModManifest.json"))
            .expect("manifest should exist");
        let document: serde_json::Value = serde_json::from_str(&text).unwrap();
        document["files"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["path"].as_str().unwrap().to_string())
            .collect()
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.project_path(relative_path)).expect("Failed to read file")
    }

    pub fn read_lockfile(&self) -> String {
        fs::read_to_string(self.project_path("modpack.lock")).unwrap_or_default()
    }

    /// Number of bundler invocations logged by the shell bundler
    pub fn bundler_calls(&self) -> usize {
        fs::read_to_string(self.project_path("bundler-calls.log"))
            .map(|s| s.lines().count())
            .unwrap_or(0)
    }
}

/// In-process bundler that writes one file per request and counts calls
#[derive(Clone, Default)]
pub struct FakeBundler {
    pub calls: Rc<Cell<usize>>,
}

impl Bundler for FakeBundler {
    fn build_bundles(&self, request: &BundleRequest<'_>) -> Result<Vec<PathBuf>, BundlerError> {
        self.calls.set(self.calls.get() + 1);
        let bundle = request.output_dir.join(request.bundle_name);
        let listing: Vec<String> = request
            .assets
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        fs::write(&bundle, listing.join("\n"))?;
        Ok(vec![bundle])
    }
}
