//! Build Module
//!
//! The mod packaging pipeline.
//!
//! ## Structure
//!
//! - `stages` - Discovery, output reconciliation, per-category packaging, ledger scans
//! - `cleanup` - Scoped removal of preprocessor temp files
//! - `result` - Result types (`BuildReport`)
//! - `use_case` - Core use case logic (`ModBuilder`)
//!
//! ## Usage
//!
//! ```ignore
//! use modpack::application::build::ModBuilder;
//!
//! let builder = ModBuilder::new(LocalFs::new()).with_bundler(bundler);
//! let ok = builder.build(&mut settings, Path::new("out"), true);
//! ```

mod cleanup;
mod result;
pub mod stages;
mod use_case;

pub use result::BuildReport;
pub use use_case::ModBuilder;
