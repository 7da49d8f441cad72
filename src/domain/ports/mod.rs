//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod bundler;
pub mod file_system;
pub mod preprocessor;
pub mod reimporter;
pub mod state_repository;

pub use bundler::{BundleRequest, Bundler, BundlerError};
pub use file_system::{FileSystem, FsError, FsResult};
pub use preprocessor::{PreprocessError, Preprocessor, ProcessorFactory, ProcessorRegistry};
pub use reimporter::ScriptReimporter;
pub use state_repository::{BuildStateRepository, StateError, StateResult};
