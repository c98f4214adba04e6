//! Configuration management for lazyseq
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (LAZYSEQ_* prefix, highest precedence)
//! 2. lazyseq.local.toml (gitignored, local overrides)
//! 3. lazyseq.toml (project config)
//! 4. ~/.config/lazyseq/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main lazyseq configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LazyseqConfig {
    pub display: DisplayConfig,
    pub limits: LimitsConfig,
}

/// How slices are printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Elements skipped before printing.
    pub offset: u64,
    /// Elements printed.
    pub count: u64,
    pub separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            offset: 0,
            count: 15,
            separator: ", ".to_string(),
        }
    }
}

/// Safety ceilings for materialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum number of elements any single command may materialize.
    pub max_materialize: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_materialize: 1_000_000,
        }
    }
}

impl LazyseqConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Read a single TOML file, ignoring every other source
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject settings no command can work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_materialize == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_materialize must be at least 1".to_string(),
            ));
        }
        if self.display.separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "display.separator must not be empty".to_string(),
            ));
        }
        if self.display.count > self.limits.max_materialize {
            return Err(ConfigError::ValidationError(format!(
                "display.count ({}) exceeds limits.max_materialize ({})",
                self.display.count, self.limits.max_materialize
            )));
        }
        Ok(())
    }
}
