//! Reference file writer
//!
//! Produces a plain-text listing of the identifiers in an enumeration so mod
//! authors can look values up while writing configuration. The build never
//! reads these files back.

use std::fmt::Write as _;
use std::path::Path;

use serde_json::Value;

use crate::domain::ports::FileSystem;
use crate::error::{ModpackError, ModpackResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub name: String,
    pub value: i64,
}

impl ReferenceEntry {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Parse entries from a JSON object (`{"Name": value}`) or array (`["Name", ..]`,
/// value = index)
pub fn parse_entries(source: &Path, json: &str) -> ModpackResult<Vec<ReferenceEntry>> {
    let invalid = |message: String| ModpackError::InvalidConfig {
        file: source.to_path_buf(),
        message,
    };

    let document: Value = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;
    match document {
        Value::Object(map) => map
            .into_iter()
            .map(|(name, value)| {
                value
                    .as_i64()
                    .map(|v| ReferenceEntry::new(name.clone(), v))
                    .ok_or_else(|| invalid(format!("value of '{}' is not an integer", name)))
            })
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(name) => Ok(ReferenceEntry::new(name, index as i64)),
                other => Err(invalid(format!("entry {} is not a string: {}", index, other))),
            })
            .collect(),
        _ => Err(invalid(
            "expected a JSON object or array of names".to_string(),
        )),
    }
}

/// Render entries sorted by value, then name
pub fn render_reference(title: &str, entries: &[ReferenceEntry]) -> String {
    let mut sorted: Vec<&ReferenceEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.value.cmp(&b.value).then_with(|| a.name.cmp(&b.name)));

    let mut out = String::new();
    let _ = writeln!(out, "# {} reference", title);
    let _ = writeln!(out, "# Generated by modpack. This file is not read by the build.");
    out.push('\n');
    for entry in sorted {
        let _ = writeln!(out, "{} = {}", entry.name, entry.value);
    }
    out
}

pub fn write_reference<FS: FileSystem + ?Sized>(
    fs: &FS,
    path: &Path,
    title: &str,
    entries: &[ReferenceEntry],
) -> ModpackResult<()> {
    fs.write(path, &render_reference(title, entries))?;
    Ok(())
}
