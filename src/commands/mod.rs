//! CLI command implementations

pub mod build;
pub mod init;
mod project_root;
pub mod reference;
