//! Preprocessor Implementations

mod command;

pub use command::{register_commands, CommandPreprocessor};
