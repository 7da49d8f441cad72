//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod lockfile;

pub use lockfile::{TomlLockfileRepository, LOCKFILE_NAME};
