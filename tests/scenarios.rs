//! Scenario tests for modpack.
//!
//! Scenarios test complete build workflows end-to-end: the library API with
//! an in-process bundler, and the CLI with a shell bundler.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/first_build.rs"]
mod first_build;

#[path = "scenarios/incremental.rs"]
mod incremental;

#[path = "scenarios/cli_build.rs"]
mod cli_build;
