//! High-level API for regpath.
//!
//! [`PathResolver`] bundles a [`Validator`] with a [`ProjectResolver`] and
//! exposes the three operations hosts need: validation, decomposition into
//! project candidates, and resolution.
//!
//! # Examples
//!
//! ```
//! use libregpath::{Catalog, PathResolver};
//!
//! let catalog = Catalog::from_toml_str(r#"
//! [[projects]]
//! full_path = "group/subgroup/proj"
//! repositories = ["img/name"]
//! "#).unwrap();
//!
//! let resolver = PathResolver::new(catalog);
//! let resolution = resolver.resolve("group/subgroup/proj/img/name").unwrap();
//!
//! assert_eq!(resolution.repository_name(), Some("img/name"));
//! assert!(resolution.has_repository());
//! assert!(!resolution.is_root());
//! ```

use crate::config::Config;
use crate::error::Result;
use crate::path::RegistryPath;
use crate::project::ProjectResolver;
use crate::resolve::{self, Resolution};
use crate::syntax::{NameSyntaxRule, PatternRule};
use crate::validator::{DEFAULT_MAX_NESTING_DEPTH, Validator};

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Validates, decomposes and resolves registry paths.
///
/// Every call builds its own [`RegistryPath`], so candidate caches are never
/// shared between resolutions.
#[derive(Debug)]
pub struct PathResolver<R> {
    validator: Validator,
    projects: R,
}

impl<R: ProjectResolver> PathResolver<R> {
    /// Creates a resolver with the default name rule and nesting depth.
    pub fn new(projects: R) -> Self {
        Self {
            validator: Validator::default(),
            projects,
        }
    }

    /// Returns the validator in use.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Returns the project resolver in use.
    pub fn projects(&self) -> &R {
        &self.projects
    }

    /// Returns `true` if `path` is well formed and within the depth bound.
    pub fn is_valid(&self, path: &str) -> bool {
        self.validator.is_valid_str(path)
    }

    /// Returns the project candidates of `path`, longest first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegPathError::InvalidPath`] for invalid paths.
    pub fn components(&self, path: &str) -> Result<Vec<String>> {
        RegistryPath::new(path)
            .components(&self.validator)
            .map(<[String]>::to_vec)
    }

    /// Resolves `path` to a project and repository name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegPathError::InvalidPath`] for invalid paths.
    pub fn resolve(&self, path: &str) -> Result<Resolution<R::Project>> {
        self.resolve_path(&RegistryPath::new(path))
    }

    /// Resolves an already wrapped path, reusing its cached candidates.
    pub fn resolve_path(&self, path: &RegistryPath) -> Result<Resolution<R::Project>> {
        resolve::resolve(path, &self.validator, &self.projects)
    }
}

/// Builder for [`PathResolver`].
///
/// # Examples
///
/// ```
/// use libregpath::{Catalog, PathResolverBuilder};
///
/// let resolver = PathResolverBuilder::new()
///     .max_nesting_depth(4)
///     .build(Catalog::default());
///
/// assert!(resolver.is_valid("a/b/c"));
/// assert!(!resolver.is_valid("a/b/c/d"));
/// ```
pub struct PathResolverBuilder {
    rule: Option<Box<dyn NameSyntaxRule + Send + Sync>>,
    max_nesting_depth: usize,
}

impl PathResolverBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            rule: None,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    /// Set the maximum nesting depth.
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Replace the name syntax rule.
    pub fn name_rule<N>(mut self, rule: N) -> Self
    where
        N: NameSyntaxRule + Send + Sync + 'static,
    {
        self.rule = Some(Box::new(rule));
        self
    }

    /// Replace the name syntax rule with a regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegPathError::Syntax`] if the pattern does not compile.
    pub fn name_pattern(self, pattern: &str) -> Result<Self> {
        Ok(self.name_rule(PatternRule::new(pattern)?))
    }

    /// Apply validation settings from a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegPathError::Config`] if the settings fail
    /// [`Config::validate`], or [`crate::RegPathError::Syntax`] for a bad
    /// name pattern.
    pub fn with_config(self, config: &Config) -> Result<Self> {
        config.validate()?;
        let builder = self.max_nesting_depth(config.validation.max_nesting_depth);
        match config.validation.name_pattern.as_deref() {
            Some(pattern) => builder.name_pattern(pattern),
            None => Ok(builder),
        }
    }

    /// Build the resolver around `projects`.
    pub fn build<R: ProjectResolver>(self, projects: R) -> PathResolver<R> {
        let rule: Box<dyn NameSyntaxRule + Send + Sync> = match self.rule {
            Some(rule) => rule,
            None => Box::new(PatternRule::default()),
        };
        let validator = Validator::from_boxed(rule, self.max_nesting_depth);
        PathResolver {
            validator,
            projects,
        }
    }
}

impl Default for PathResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
