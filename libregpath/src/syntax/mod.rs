//! Name syntax rules for registry paths.
//!
//! A rule decides which raw path strings are syntactically acceptable
//! (character set, separators). The validator treats it as an opaque
//! boolean test.

use crate::error::{RegPathError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;


/// Pattern accepted for container repository names.
///
/// Segments are lowercase alphanumerics joined by `.`, `_`, `__` or runs
/// of `-`. `/` separates path segments, so empty segments never match.
pub const CONTAINER_REPOSITORY_NAME_PATTERN: &str = r"^[a-z0-9]+((?:[._/]|__|[-]+)[a-z0-9]+)*$";

/// A predicate over raw path strings.
pub trait NameSyntaxRule {
    /// Returns `true` if `path` is syntactically acceptable.
    fn matches(&self, path: &str) -> bool;
}

impl<F> NameSyntaxRule for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, path: &str) -> bool {
        self(path)
    }
}

/// A [`NameSyntaxRule`] backed by a regular expression.
#[derive(Debug, Clone)]
pub struct PatternRule(Regex);

impl PatternRule {
    /// Compiles `pattern` into a rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregpath::syntax::{NameSyntaxRule, PatternRule};
    ///
    /// let rule = PatternRule::new(r"^[A-Za-z/]+$").unwrap();
    /// assert!(rule.matches("Group/Image"));
    /// assert!(PatternRule::new("[unclosed").is_err());
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(PatternRule)
            .map_err(|e| RegPathError::syntax(pattern, e))
    }

    /// Returns the source pattern of this rule.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for PatternRule {
    fn default() -> Self {
        // The built-in pattern is a constant and always compiles.
        PatternRule(Regex::new(CONTAINER_REPOSITORY_NAME_PATTERN).unwrap())
    }
}

impl NameSyntaxRule for PatternRule {
    fn matches(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

impl FromStr for PatternRule {
    type Err = RegPathError;

    fn from_str(s: &str) -> Result<Self> {
        PatternRule::new(s)
    }
}

impl fmt::Display for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
