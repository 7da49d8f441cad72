//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;
mod hash;
mod target;

pub use category::AssetCategory;
pub use hash::ContentHash;
pub use target::BuildTarget;
