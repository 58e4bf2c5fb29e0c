//! Path validation.
//!
//! A path is valid when the name syntax rule accepts it, it has more than
//! one segment, and its segment count stays below the maximum nesting
//! depth.

use crate::path::RegistryPath;
use crate::syntax::{NameSyntaxRule, PatternRule};
use std::fmt;


/// Namespace depth bound applied when none is configured.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 20;

/// Checks raw paths against a syntax rule and a depth bound.
pub struct Validator {
    rule: Box<dyn NameSyntaxRule + Send + Sync>,
    max_nesting_depth: usize,
}

impl Validator {
    /// Creates a validator from a rule and a maximum nesting depth.
    ///
    /// Paths must have strictly fewer segments than `max_nesting_depth`.
    pub fn new<R>(rule: R, max_nesting_depth: usize) -> Self
    where
        R: NameSyntaxRule + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(rule), max_nesting_depth)
    }

    /// Creates a validator from an already boxed rule.
    pub fn from_boxed(
        rule: Box<dyn NameSyntaxRule + Send + Sync>,
        max_nesting_depth: usize,
    ) -> Self {
        Self {
            rule,
            max_nesting_depth,
        }
    }

    /// Returns the configured maximum nesting depth.
    pub fn max_nesting_depth(&self) -> usize {
        self.max_nesting_depth
    }

    /// Returns `true` if `path` can be decomposed into project candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregpath::{RegistryPath, Validator};
    ///
    /// let validator = Validator::default();
    /// assert!(validator.is_valid(&RegistryPath::new("group/proj")));
    /// assert!(!validator.is_valid(&RegistryPath::new("onlyonesegment")));
    /// ```
    pub fn is_valid(&self, path: &RegistryPath) -> bool {
        let depth = path.depth();
        self.rule.matches(path.as_str()) && depth > 1 && depth < self.max_nesting_depth
    }

    /// Validates a raw string without keeping its decomposition.
    pub fn is_valid_str(&self, path: &str) -> bool {
        self.is_valid(&RegistryPath::new(path))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(PatternRule::default(), DEFAULT_MAX_NESTING_DEPTH)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("max_nesting_depth", &self.max_nesting_depth)
            .finish_non_exhaustive()
    }
}
