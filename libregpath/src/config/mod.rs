//! Library configuration.
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional YAML file, then `REGPATH_`-prefixed environment variables
//! (nested keys use `__`, e.g. `REGPATH_VALIDATION__MAX_NESTING_DEPTH`).

use crate::error::{RegPathError, Result};
use crate::validator::DEFAULT_MAX_NESTING_DEPTH;
use config::{Config as ConfigRs, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};


/// Prefix of environment variables read by [`Config::load`].
pub const ENV_PREFIX: &str = "REGPATH";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub validation: Validation,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    ///
    /// This function is primarily used for testing.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder()
            .add_source(ConfigRs::try_from(&Config::default())?)
            .add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder)
    }

    /// Loads a `Config` from an optional YAML file and the environment.
    ///
    /// A given file must exist. Without a file only defaults and
    /// environment variables apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder().add_source(ConfigRs::try_from(&Config::default())?);

        if let Some(p) = path {
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = Self::from_builder(builder)?;
        tracing::debug!(?path, "Configuration loaded");
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot work.
    pub fn validate(&self) -> Result<()> {
        // Two segments is the shortest valid path, so the bound must exceed it.
        if self.validation.max_nesting_depth < 3 {
            return Err(RegPathError::config(
                format!(
                    "validation.max_nesting_depth must be at least 3, got {}",
                    self.validation.max_nesting_depth
                ),
                None,
            ));
        }
        Ok(())
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config: Self = builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                RegPathError::config_with_source(
                    "Failed to deserialize configuration",
                    None::<&str>,
                    e,
                )
            })?;
        config.validate()?;
        Ok(config)
    }
}

/// Path validation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Validation {
    /// Paths must have fewer segments than this.
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,

    /// Custom name pattern replacing the built-in container name rule.
    #[serde(default)]
    pub name_pattern: Option<String>,
}

impl Default for Validation {
    fn default() -> Self {
        Self {
            max_nesting_depth: default_max_nesting_depth(),
            name_pattern: None,
        }
    }
}

fn default_max_nesting_depth() -> usize {
    DEFAULT_MAX_NESTING_DEPTH
}

/// Project catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CatalogSettings {
    /// Catalog file used when none is given explicitly.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
