//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Config file values
//! 3. Environment variables (`REGPATH_` prefix, read by libregpath)
//! 4. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::config;
use crate::format::ColorChoice;
use libregpath::{Config, PathResolverBuilder};
use std::path::Path;

/// Verbosity levels selected with repeated `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Warnings and errors only
    Normal,
    /// `-v`: informational events
    Verbose,
    /// `-vv`: resolution details
    VeryVerbose,
    /// `-vvv`: every lookup
    Trace,
}

impl VerbosityLevel {
    /// Map the number of `-v` flags to a level
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }

    /// Log filter directive for this level
    pub fn as_filter(&self) -> &'static str {
        match self {
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "info",
            VerbosityLevel::VeryVerbose => "debug",
            VerbosityLevel::Trace => "trace",
        }
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// Resolved color choice
    pub color: ColorChoice,
    /// Requested verbosity
    pub verbosity: VerbosityLevel,
}

impl AppContext {
    /// Create a context from already resolved parts
    pub fn new(config: Config, color: ColorChoice, verbosity: VerbosityLevel) -> Self {
        Self {
            config,
            color,
            verbosity,
        }
    }

    /// Build context with precedence: defaults > config file > env vars > CLI flags
    ///
    /// `config_required` is set when the config path was given explicitly;
    /// a missing file is then an error instead of falling back to defaults.
    pub fn build(
        config_path: &Path,
        config_required: bool,
        cli_color: ColorChoice,
        verbosity: VerbosityLevel,
        max_depth: Option<usize>,
    ) -> Result<Self, String> {
        // 1-3. Defaults, config file and environment are layered by libregpath
        let mut config = config::load_config(config_path, config_required)?;

        // 4. Apply CLI flag overrides (highest priority)
        if let Some(depth) = max_depth {
            config.validation.max_nesting_depth = depth;
            config.validate().map_err(|e| e.to_string())?;
        }

        Ok(Self::new(config, cli_color, verbosity))
    }

    /// Resolver builder carrying the validation settings of this context
    pub fn resolver_builder(&self) -> Result<PathResolverBuilder, String> {
        PathResolverBuilder::new()
            .with_config(&self.config)
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
