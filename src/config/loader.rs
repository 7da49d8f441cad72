//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ModpackError, ModpackResult};

use super::types::{BundlerConfig, Config};

/// Project configuration file name
pub const CONFIG_FILE: &str = "modpack.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ModpackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ModpackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> ModpackResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ModpackError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (MODPACK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Override source is injectable so tests don't touch the process environment
pub(crate) fn with_overrides_from(
    mut config: Config,
    var: impl Fn(&str) -> Option<String>,
) -> Config {
    let flag = |key: &str| var(key).and_then(|v| parse_bool(&v));

    if let Some(v) = flag("MODPACK_BUILD_LINUX") {
        config.build.build_linux = v;
    }
    if let Some(v) = flag("MODPACK_CACHE_BUNDLES") {
        config.build.cache_bundles = v;
    }
    if let Some(v) = flag("MODPACK_BUILD_BUNDLES") {
        config.build.build_bundles = v;
    }
    if let Some(v) = flag("MODPACK_FORCE_REIMPORT") {
        config.build.force_reimport = v;
    }

    // MODPACK_BUNDLER replaces the command, keeping configured args
    if let Some(command) = var("MODPACK_BUNDLER").filter(|c| !c.trim().is_empty()) {
        let args = config
            .bundler
            .take()
            .map(|b| b.args)
            .unwrap_or_default();
        config.bundler = Some(BundlerConfig { command, args });
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn validate(config: &Config, file: &Path) -> ModpackResult<()> {
    let invalid = |message: &str| ModpackError::InvalidConfig {
        file: file.to_path_buf(),
        message: message.to_string(),
    };

    if config.mod_.guid.trim().is_empty() {
        return Err(invalid("[mod] guid is required"));
    }
    if config.mod_.name.trim().is_empty() {
        return Err(invalid("[mod] name is required"));
    }
    if config
        .mod_
        .name
        .chars()
        .any(std::path::is_separator)
    {
        return Err(invalid("[mod] name must not contain path separators"));
    }
    if let Some(bundler) = &config.bundler {
        if bundler.command.trim().is_empty() {
            return Err(invalid("[bundler] command must not be empty"));
        }
    }
    let mut names: Vec<&str> = config.preprocess.iter().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    if names.windows(2).any(|w| w[0] == w[1]) {
        return Err(invalid("[[preprocess]] names must be unique"));
    }
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "mod",
        "guid",
        "name",
        "version",
        "author",
        "description",
        "build",
        "mod_path",
        "cache_bundles",
        "build_bundles",
        "build_linux",
        "force_reimport",
        "generated_code_dirs",
        "bundler",
        "preprocess",
        "command",
        "args",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
