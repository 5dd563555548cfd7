//! Ravenfall configuration
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Config file (ravenfall.ron, or the path given with --config)
//! 3. Default values
//! ```
//!
//! # Example file
//!
//! ```ron
//! (
//!     lexer: (indent_width: 4, dedent_at_eof: true),
//!     parser: (multiline: true),
//!     log_level: debug,
//!     output: json,
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::frontend::lexer::LexerConfig;
use crate::frontend::parser::ParserConfig;
use crate::util::logger::LogLevel;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "ravenfall.ron";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Lexer settings
    #[serde(default)]
    pub lexer: LexerConfig,
    /// Parser settings
    #[serde(default)]
    pub parser: ParserConfig,
    /// Log verbosity
    #[serde(default)]
    pub log_level: LogLevel,
    /// Dump format for tokens and AST
    #[serde(default)]
    pub output: OutputFormat,
}

/// How the CLI prints token streams and syntax trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rust `{:#?}` pretty debug output
    #[default]
    Debug,
    /// Pretty JSON
    Json,
    /// Pretty RON
    Ron,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config parse error: {0}")]
    ParseError(#[from] ron::error::SpannedError),
    #[error("Config serialize error: {0}")]
    SerializeError(#[from] ron::Error),
}

/// Load configuration from a RON file
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Parse configuration from RON text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config = ron::from_str(content)?;
    tracing::debug!("Loaded config: {:?}", config);
    Ok(config)
}

/// Load configuration, falling back to defaults if the file doesn't exist
pub fn load_config_or_default(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load_config(path)
}

/// Render configuration as pretty RON
pub fn to_ron_string(config: &Config) -> Result<String, ConfigError> {
    Ok(ron::ser::to_string_pretty(
        config,
        ron::ser::PrettyConfig::default(),
    )?)
}
