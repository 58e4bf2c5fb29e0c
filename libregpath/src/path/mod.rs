//! Registry path decomposition.
//!
//! A [`RegistryPath`] wraps the raw path reported by a registry and its
//! segments. Its project candidates are the prefixes of at least two
//! segments, longest first:
//!
//! ```text
//! group/subgroup/proj/img ->
//!   group/subgroup/proj/img
//!   group/subgroup/proj
//!   group/subgroup
//! ```

use crate::error::{RegPathError, Result};
use crate::validator::Validator;
use std::cell::OnceCell;
use std::fmt;

#[cfg(test)]
mod tests;

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Shortest prefix that can still name a project.
const MIN_CANDIDATE_SEGMENTS: usize = 2;

/// An image repository path as reported by a registry.
///
/// The candidate list is computed on first use and cached for the
/// lifetime of this value. Build one `RegistryPath` per resolution.
#[derive(Debug, Clone)]
pub struct RegistryPath {
    raw: String,
    segments: Vec<String>,
    components: OnceCell<Vec<String>>,
}

impl RegistryPath {
    /// Wraps a raw path string. No validation happens here.
    pub fn new<S: Into<String>>(raw: S) -> Self {
        let raw = raw.into();
        let segments = raw.split(SEPARATOR).map(str::to_string).collect();
        Self {
            raw,
            segments,
            components: OnceCell::new(),
        }
    }

    /// Returns the raw path.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the segments of the raw path, empty artifacts included.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns the project candidates of this path, longest first.
    ///
    /// Validity is checked on every call; the candidates themselves are
    /// computed once.
    ///
    /// # Errors
    ///
    /// Returns [`RegPathError::InvalidPath`] if `validator` rejects the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use libregpath::{RegistryPath, Validator};
    ///
    /// let path = RegistryPath::new("group/proj/image");
    /// let components = path.components(&Validator::default()).unwrap();
    /// assert_eq!(components, ["group/proj/image", "group/proj"]);
    /// ```
    pub fn components(&self, validator: &Validator) -> Result<&[String]> {
        if !validator.is_valid(self) {
            return Err(RegPathError::invalid_path(self.raw.as_str()));
        }

        Ok(self.components.get_or_init(|| prefixes(&self.segments)))
    }
}

/// Joins every prefix of `segments` with at least two segments, longest first.
fn prefixes(segments: &[String]) -> Vec<String> {
    (MIN_CANDIDATE_SEGMENTS..=segments.len())
        .rev()
        .map(|length| segments[..length].join("/"))
        .collect()
}

impl fmt::Display for RegistryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for RegistryPath {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for RegistryPath {}

impl From<&str> for RegistryPath {
    fn from(raw: &str) -> Self {
        RegistryPath::new(raw)
    }
}

impl From<String> for RegistryPath {
    fn from(raw: String) -> Self {
        RegistryPath::new(raw)
    }
}
