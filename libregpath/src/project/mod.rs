//! Project lookup interface.
//!
//! The hosting system decides which paths name existing projects and which
//! repositories a project owns. Resolution only talks to it through
//! [`ProjectResolver`], so any backend (a database, an API client, the
//! in-memory [`crate::catalog::Catalog`]) can be plugged in.


/// A reference to an existing project.
pub trait ProjectRef {
    /// Full path of the project, e.g. `group/subgroup/proj`.
    fn full_path(&self) -> &str;
}

impl<T: ProjectRef + ?Sized> ProjectRef for &T {
    fn full_path(&self) -> &str {
        (**self).full_path()
    }
}

/// Looks up projects and their repositories.
pub trait ProjectResolver {
    /// The project reference returned by lookups.
    type Project: ProjectRef;

    /// Returns the project whose full path equals one of `candidates`.
    ///
    /// Candidates are ordered from most to least specific. Implementations
    /// must try them in that order and return the first match.
    fn find_project_by_any_full_path(&self, candidates: &[String]) -> Option<Self::Project>;

    /// Returns `true` if `project` owns a repository called `name`.
    ///
    /// `name` is empty for the project's root repository.
    fn project_has_repository_named(&self, project: &Self::Project, name: &str) -> bool;
}

impl<T: ProjectResolver + ?Sized> ProjectResolver for &T {
    type Project = T::Project;

    fn find_project_by_any_full_path(&self, candidates: &[String]) -> Option<Self::Project> {
        (**self).find_project_by_any_full_path(candidates)
    }

    fn project_has_repository_named(&self, project: &Self::Project, name: &str) -> bool {
        (**self).project_has_repository_named(project, name)
    }
}

/// A bare project reference holding only a full path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectPath(pub String);

impl ProjectRef for ProjectPath {
    fn full_path(&self) -> &str {
        &self.0
    }
}

impl ProjectRef for String {
    fn full_path(&self) -> &str {
        self
    }
}

impl ProjectRef for str {
    fn full_path(&self) -> &str {
        self
    }
}
