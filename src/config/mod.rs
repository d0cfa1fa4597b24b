//! Configuration for the command-line front end.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, OutputConfig};
