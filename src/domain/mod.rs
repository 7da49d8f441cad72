//! Domain Layer
//!
//! Build pipeline rules without concrete I/O.
//!
//! ## Structure
//!
//! - `entities/` - AssetList, HashLedger/BuildState, Manifest/ModMetadata, BuildSettings
//! - `value_objects/` - ContentHash, BuildTarget, AssetCategory
//! - `services/` - Classifier rules, ChangeDetector
//! - `ports/` - Interfaces the infrastructure layer implements

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
