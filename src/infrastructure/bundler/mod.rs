//! Bundler Implementations

mod command;

pub use command::CommandBundler;
