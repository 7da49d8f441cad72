//! ScriptReimporter port - hint to upstream tooling that scripts must be reprocessed
//!
//! Best effort only: a failed reimport is logged and the build continues.

use std::path::PathBuf;

pub trait ScriptReimporter {
    /// Ask upstream tooling to reprocess `scripts` before they are copied
    fn reimport(&self, scripts: &[PathBuf]) -> std::io::Result<()>;
}
