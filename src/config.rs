//! Configuration for the `orm-sql` command line tool.
//!
//! Read from `<config_dir>/orm-sql/config.toml`; every key is optional.
//!
//! ```toml
//! format = "json"
//! color = false
//! verbose = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SqlError, SqlResult};

/// How compiled queries are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format
    pub format: OutputFormat,

    /// Colored terminal output
    pub color: bool,

    /// Log compiler activity at debug level
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Create a new configuration builder
    pub fn builder() -> CliConfigBuilder {
        CliConfigBuilder::default()
    }

    /// Default location, `None` when the platform has no config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("orm-sql").join("config.toml"))
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> SqlResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> SqlResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| match e {
            SqlError::Config(msg) => SqlError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn parse(content: &str) -> SqlResult<Self> {
        toml::from_str(content).map_err(|e| SqlError::Config(e.to_string()))
    }
}

/// Builder for CliConfig
#[derive(Debug, Default)]
pub struct CliConfigBuilder {
    config: CliConfig,
}

impl CliConfigBuilder {
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.config.color = color;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CliConfig {
        self.config
    }
}
