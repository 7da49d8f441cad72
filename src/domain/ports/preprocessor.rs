//! Preprocessor port and registry
//!
//! Third parties extend the pipeline by registering a factory in a
//! `ProcessorRegistry` before the build starts. Each build instantiates every
//! registered processor and runs it against the discovered asset list. A
//! factory that fails is logged and skipped; a processor that fails while
//! executing aborts the build.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::entities::{AssetList, BuildSettings};

#[derive(Debug, Error)]
pub enum PreprocessError {
    /// The processor could not be created
    #[error("preprocessor '{name}' could not be loaded: {message}")]
    Load { name: String, message: String },
    /// The processor ran and failed
    #[error("preprocessor '{name}' failed: {message}")]
    Failed { name: String, message: String },
    /// I/O error while running a processor
    #[error("preprocessor I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A preprocessing step run before routing.
///
/// May add, remove or rewrite files on disk and in `assets`. Files it adds to
/// `assets` that were not discovered are deleted again when the build ends.
pub trait Preprocessor {
    fn name(&self) -> &str;

    fn execute(
        &self,
        settings: &BuildSettings,
        install_dir: &Path,
        assets: &mut AssetList,
    ) -> Result<(), PreprocessError>;
}

/// Creates a processor for one build
pub type ProcessorFactory = Box<dyn Fn() -> Result<Box<dyn Preprocessor>, PreprocessError>>;

/// Explicit list of registered processors
#[derive(Default)]
pub struct ProcessorRegistry {
    factories: Vec<(String, ProcessorFactory)>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `name`
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Box<dyn Preprocessor>, PreprocessError> + 'static,
    {
        self.factories.push((name.into(), Box::new(factory)));
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.iter().map(|(name, _)| name.as_str())
    }

    /// Create every processor that can be created; failures are skipped
    pub fn instantiate(&self) -> Vec<Box<dyn Preprocessor>> {
        let mut processors = Vec::with_capacity(self.factories.len());
        for (name, factory) in &self.factories {
            match factory() {
                Ok(processor) => {
                    debug!(processor = %name, "preprocessor loaded");
                    processors.push(processor);
                }
                Err(err) => warn!(processor = %name, "skipping preprocessor: {err}"),
            }
        }
        processors
    }
}

impl std::fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("processors", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
