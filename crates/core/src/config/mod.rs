//! Configuration file for the `flatmatter` command-line tool.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{ConfigFile, LoggingConfig, OutputConfig, OutputFormat, ResolvedConfig};
