//! Reference command - render an enumeration's identifiers as a text file

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use modpack::infrastructure::{parse_entries, write_reference, LocalFs};

pub fn cmd_reference(input: &Path, output: &Path, title: Option<&str>) -> Result<bool> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("cannot read {}", input.display()))?;
    let entries = parse_entries(input, &json)?;

    let title = match title {
        Some(title) => title.to_string(),
        None => input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Enum")
            .to_string(),
    };

    write_reference(&LocalFs::new(), output, &title, &entries)?;
    info!(entries = entries.len(), "wrote {}", output.display());
    Ok(true)
}
