//! Domain Services
//!
//! - `classifier` - path/extension routing rules
//! - `change_detector` - cached-bundle reuse decision

pub mod change_detector;
pub mod classifier;

pub use change_detector::{CacheDecision, ChangeDetector, StaleReason};
pub use classifier::{claims, is_hash_tracked, is_in_excluded_dir, route};
