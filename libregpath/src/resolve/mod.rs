//! Project and repository resolution.
//!
//! Resolution validates a path, asks a [`ProjectResolver`] for the most
//! specific project among the first [`PROJECT_LOOKUP_DEPTH`] candidates and
//! derives the repository name from what remains of the path.
//!
//! ```text
//! some/group/my_project/my/image ->
//!   project:    some/group/my_project
//!   repository: my/image
//! ```

use crate::error::Result;
use crate::path::{RegistryPath, SEPARATOR};
use crate::project::{ProjectRef, ProjectResolver};
use crate::validator::Validator;
use serde::Serialize;


/// Number of candidates offered to the project lookup, most specific first.
pub const PROJECT_LOOKUP_DEPTH: usize = 3;

/// Terminal state of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    /// None of the looked-up candidates is a project.
    NoProjectMatch,
    /// The path names the project itself.
    RootRepository,
    /// The path names a repository below the project.
    NestedRepository,
}

/// Outcome of resolving one registry path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<P> {
    path: String,
    project: Option<P>,
    is_root: bool,
    repository_name: Option<String>,
    has_repository: bool,
}

impl<P> Resolution<P> {
    fn unmatched(path: &str) -> Self {
        Self {
            path: path.to_string(),
            project: None,
            is_root: false,
            repository_name: None,
            has_repository: false,
        }
    }

    /// The resolved path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The matched project, if any.
    pub fn project(&self) -> Option<&P> {
        self.project.as_ref()
    }

    /// Consumes the resolution, returning the matched project.
    pub fn into_project(self) -> Option<P> {
        self.project
    }

    /// `true` if one of the looked-up candidates is a project.
    pub fn has_project(&self) -> bool {
        self.project.is_some()
    }

    /// `true` if the matched project owns a repository with the derived name.
    pub fn has_repository(&self) -> bool {
        self.has_repository
    }

    /// `true` if the path equals the matched project's full path.
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Repository name relative to the project.
    ///
    /// `None` without a project, `Some("")` for the root repository.
    pub fn repository_name(&self) -> Option<&str> {
        self.repository_name.as_deref()
    }

    /// Terminal state derived from the match and root flags.
    pub fn state(&self) -> ResolutionState {
        match (&self.project, self.is_root) {
            (None, _) => ResolutionState::NoProjectMatch,
            (Some(_), true) => ResolutionState::RootRepository,
            (Some(_), false) => ResolutionState::NestedRepository,
        }
    }
}

impl<P: ProjectRef> Resolution<P> {
    /// Returns a serializable view of this resolution.
    pub fn summary(&self) -> ResolutionSummary {
        ResolutionSummary {
            path: self.path.clone(),
            project: self.project.as_ref().map(|p| p.full_path().to_string()),
            repository_name: self.repository_name.clone(),
            has_project: self.has_project(),
            has_repository: self.has_repository,
            is_root: self.is_root,
            state: self.state(),
        }
    }
}

/// Serializable view of a [`Resolution`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    pub path: String,
    pub project: Option<String>,
    pub repository_name: Option<String>,
    pub has_project: bool,
    pub has_repository: bool,
    pub is_root: bool,
    pub state: ResolutionState,
}

/// Strips `project_path` and one following separator from the start of `path`.
///
/// A path equal to the project path leaves an empty name. A path that does
/// not start with `project_path` at a segment boundary is returned unchanged.
///
/// # Examples
///
/// ```
/// use libregpath::resolve::repository_name;
///
/// assert_eq!(repository_name("group/proj/img/name", "group/proj"), "img/name");
/// assert_eq!(repository_name("group/proj", "group/proj"), "");
/// ```
pub fn repository_name<'a>(path: &'a str, project_path: &str) -> &'a str {
    match path.strip_prefix(project_path) {
        Some("") => "",
        Some(rest) => rest.strip_prefix(SEPARATOR).unwrap_or(path),
        None => path,
    }
}

/// Resolves `path` against `projects`.
///
/// # Errors
///
/// Returns [`crate::RegPathError::InvalidPath`] if `validator` rejects the
/// path. A missing project or repository is not an error.
pub fn resolve<R>(
    path: &RegistryPath,
    validator: &Validator,
    projects: &R,
) -> Result<Resolution<R::Project>>
where
    R: ProjectResolver + ?Sized,
{
    let components = path.components(validator)?;
    let lookup = &components[..components.len().min(PROJECT_LOOKUP_DEPTH)];
    tracing::debug!(path = %path, candidates = ?lookup, "Resolving registry path");

    let Some(project) = projects.find_project_by_any_full_path(lookup) else {
        tracing::debug!(path = %path, "No project matched");
        return Ok(Resolution::unmatched(path.as_str()));
    };

    let project_path = project.full_path();
    let is_root = path.as_str() == project_path;
    let name = repository_name(path.as_str(), project_path).to_string();
    let has_repository = projects.project_has_repository_named(&project, &name);
    tracing::debug!(
        path = %path,
        project = project_path,
        repository = %name,
        is_root,
        has_repository,
        "Project matched"
    );

    Ok(Resolution {
        path: path.as_str().to_string(),
        project: Some(project),
        is_root,
        repository_name: Some(name),
        has_repository,
    })
}
