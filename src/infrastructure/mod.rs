//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `repositories/` - Build state persistence (`modpack.lock`)
//! - `bundler/` - External bundle builder invocation
//! - `preprocess/` - Command-line preprocessors
//! - `lock` - Build-wide file lock
//! - `reimport` - Script reimport hint
//! - `reference` - Reference file writer

pub mod bundler;
pub mod fs;
pub mod lock;
pub mod preprocess;
pub mod reference;
pub mod reimport;
pub mod repositories;

// Re-export for convenience
pub use bundler::CommandBundler;
pub use fs::LocalFs;
pub use lock::{BuildLock, BUILD_LOCK_NAME};
pub use preprocess::{register_commands, CommandPreprocessor};
pub use reference::{parse_entries, render_reference, write_reference, ReferenceEntry};
pub use reimport::TouchReimporter;
pub use repositories::{TomlLockfileRepository, LOCKFILE_NAME};
