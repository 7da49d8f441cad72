//! Common test utilities for modpack scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the CLI
//! - `FakeBundler`: In-process bundler for library-level tests
//! - Fixtures: Reusable config and source-tree constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
