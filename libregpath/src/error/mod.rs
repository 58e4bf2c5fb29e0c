//! Error types for regpath
//!
//! Resolution itself only ever fails with [`RegPathError::InvalidPath`].
//! A missing project or repository is reported through boolean fields
//! of [`crate::Resolution`], not through errors. The remaining variants
//! cover the ambient concerns: configuration, custom name patterns and
//! catalog files.

use thiserror::Error;


/// Main error type for regpath operations
#[derive(Error, Debug)]
pub enum RegPathError {
    /// The path failed validation and cannot be decomposed
    #[error("Invalid registry path: '{path}'")]
    InvalidPath { path: String },

    /// A custom name pattern could not be compiled
    #[error("Invalid name pattern '{pattern}': {source}")]
    Syntax {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration errors (invalid config file, bad values)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Catalog errors (unreadable file, parse failure, duplicate projects)
    #[error("Catalog error: {message}")]
    Catalog {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for regpath operations
pub type Result<T> = std::result::Result<T, RegPathError>;

impl RegPathError {
    /// Creates a new invalid path error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregpath::error::RegPathError;
    ///
    /// let err = RegPathError::invalid_path("onlyonesegment");
    /// assert!(matches!(err, RegPathError::InvalidPath { .. }));
    /// ```
    pub fn invalid_path<S: Into<String>>(path: S) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Creates a new syntax error for a pattern that failed to compile.
    pub fn syntax<S: Into<String>>(pattern: S, source: regex::Error) -> Self {
        Self::Syntax {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregpath::error::RegPathError;
    ///
    /// let err = RegPathError::config("max_nesting_depth must be at least 3", None);
    /// assert!(matches!(err, RegPathError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new catalog error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregpath::error::RegPathError;
    ///
    /// let err = RegPathError::catalog("duplicate project 'group/proj'", Some("catalog.toml"));
    /// assert!(matches!(err, RegPathError::Catalog { .. }));
    /// ```
    pub fn catalog<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Catalog {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new catalog error with a source error.
    pub fn catalog_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Catalog {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Returns `true` if this error reports a path that failed validation.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }
}

impl From<config::ConfigError> for RegPathError {
    fn from(err: config::ConfigError) -> Self {
        RegPathError::config_with_source("Failed to build configuration", None::<&str>, err)
    }
}
