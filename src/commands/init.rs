//! Init command - write a starter modpack.toml

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;
use uuid::Uuid;

use modpack::config::CONFIG_FILE;

fn template(guid: &str, name: &str) -> String {
    format!(
        r#"[mod]
guid = "{guid}"
name = "{name}"
version = "0.1.0"

[build]
mod_path = "Assets/{name}"
cache_bundles = true
build_bundles = true
build_linux = false

# External asset-bundle builder, invoked once per platform.
# [bundler]
# command = "bundle-tool"
# args = []

# [[preprocess]]
# name = "shaders"
# command = "tools/gen-shaders.sh"
"#
    )
}

pub fn cmd_init(dir: &Path, name: Option<String>, force: bool) -> Result<bool> {
    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    let name = match name {
        Some(name) => name,
        None => default_name(dir)?,
    };
    if name.chars().any(std::path::is_separator) || name.trim().is_empty() {
        bail!("invalid mod name '{}'", name);
    }

    fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    let guid = Uuid::new_v4().to_string();
    fs::write(&config_path, template(&guid, &name))
        .with_context(|| format!("cannot write {}", config_path.display()))?;

    info!(mod_name = %name, %guid, "created {}", config_path.display());
    Ok(true)
}

fn default_name(dir: &Path) -> Result<String> {
    let absolute = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(dir)
    };
    absolute
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .last()
        .map(str::to_string)
        .context("cannot derive a mod name from the directory; pass --name")
}
