use std::path::PathBuf;

use serde::Deserialize;

use crate::document::ParseOptions;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub parse: ParseOptions,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output format of the command-line tool.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON on one line.
    #[default]
    Json,
    /// Indented JSON.
    Pretty,
    Yaml,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// File the configuration was read from, if any.
    pub source: Option<PathBuf>,
    pub parse: ParseOptions,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}
