//! In-memory project catalog.
//!
//! A [`Catalog`] lists projects and the repositories they own. It is loaded
//! from a TOML or JSON file and implements [`ProjectResolver`], which makes
//! it the default backend for hosts without access to the hosting system.
//!
//! ```toml
//! [[projects]]
//! full_path = "group/subgroup/proj"
//! repositories = ["", "img/name"]
//! ```

use crate::error::{RegPathError, Result};
use crate::project::{ProjectRef, ProjectResolver};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;


/// A project entry of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogProject {
    /// Full path of the project.
    pub full_path: String,
    /// Repository names relative to the project. `""` is the root repository.
    #[serde(default)]
    pub repositories: Vec<String>,
}

impl CatalogProject {
    /// Creates a project entry.
    pub fn new<S: Into<String>>(full_path: S, repositories: Vec<String>) -> Self {
        Self {
            full_path: full_path.into(),
            repositories,
        }
    }

    /// Returns `true` if this project owns a repository called `name`.
    pub fn has_repository(&self, name: &str) -> bool {
        self.repositories.iter().any(|r| r == name)
    }
}

impl ProjectRef for CatalogProject {
    fn full_path(&self) -> &str {
        &self.full_path
    }
}

/// On-disk layout of a catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<CatalogProject>,
}

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(CatalogFormat::Toml),
            "json" => Some(CatalogFormat::Json),
            _ => None,
        }
    }
}

/// A set of projects indexed by full path.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<CatalogProject>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from project entries.
    ///
    /// # Errors
    ///
    /// Fails if two entries share the same full path.
    pub fn from_projects(projects: Vec<CatalogProject>) -> Result<Self> {
        let mut index = HashMap::with_capacity(projects.len());
        for (position, project) in projects.iter().enumerate() {
            if index.insert(project.full_path.clone(), position).is_some() {
                return Err(RegPathError::catalog(
                    format!("Duplicate project '{}'", project.full_path),
                    None,
                ));
            }
        }

        Ok(Self { projects, index })
    }

    /// Parses a catalog from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(s).map_err(|e| {
            RegPathError::catalog_with_source("Failed to parse TOML catalog", None, e)
        })?;
        Self::from_projects(file.projects)
    }

    /// Parses a catalog from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(s).map_err(|e| {
            RegPathError::catalog_with_source("Failed to parse JSON catalog", None, e)
        })?;
        Self::from_projects(file.projects)
    }

    /// Loads a catalog file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        let format = CatalogFormat::from_path(path).ok_or_else(|| {
            RegPathError::catalog(
                "Unsupported catalog format (expected .toml or .json)".to_string(),
                Some(shown.clone()),
            )
        })?;

        let contents = fs::read_to_string(path).map_err(|e| {
            RegPathError::catalog_with_source(
                "Failed to read catalog file".to_string(),
                Some(shown.clone()),
                e,
            )
        })?;

        let catalog = match format {
            CatalogFormat::Toml => Self::from_toml_str(&contents),
            CatalogFormat::Json => Self::from_json_str(&contents),
        }
        .map_err(|e| with_catalog_path(e, &shown))?;

        tracing::debug!(path = %shown, projects = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Returns the project with this exact full path.
    pub fn get(&self, full_path: &str) -> Option<&CatalogProject> {
        self.index.get(full_path).map(|&i| &self.projects[i])
    }

    /// Returns all projects in file order.
    pub fn projects(&self) -> &[CatalogProject] {
        &self.projects
    }

    /// Returns the number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if the catalog has no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn with_catalog_path(err: RegPathError, path: &str) -> RegPathError {
    match err {
        RegPathError::Catalog {
            message,
            path: None,
            source,
        } => RegPathError::Catalog {
            message,
            path: Some(path.to_string()),
            source,
        },
        other => other,
    }
}

impl ProjectResolver for Catalog {
    type Project = CatalogProject;

    fn find_project_by_any_full_path(&self, candidates: &[String]) -> Option<CatalogProject> {
        candidates.iter().find_map(|candidate| {
            tracing::trace!(candidate = %candidate, "Looking up project");
            self.get(candidate).cloned()
        })
    }

    fn project_has_repository_named(&self, project: &CatalogProject, name: &str) -> bool {
        self.get(&project.full_path)
            .is_some_and(|known| known.has_repository(name))
    }
}
