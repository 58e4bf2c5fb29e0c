use crate::context::AppContext;
use crate::format::Formattable;
use libregpath::resolve::PROJECT_LOOKUP_DEPTH;
use libregpath::{Catalog, RegistryPath, ResolutionState, ResolutionSummary};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::settings::Style;
use tabled::{Table, Tabled};

pub mod handlers;

/// Result of a path validity check
#[derive(Debug, Serialize)]
pub struct ValidityReport {
    /// Path as given
    pub path: String,
    /// Whether the path can be resolved
    pub valid: bool,
    /// Number of segments in the path
    pub depth: usize,
    /// Configured depth bound
    pub max_nesting_depth: usize,
}

impl Formattable for ValidityReport {
    fn format_pretty(&self) -> String {
        let verdict = if self.valid { "valid" } else { "invalid" };
        format!(
            "{}: {} ({} segments, limit {})",
            self.path, verdict, self.depth, self.max_nesting_depth
        )
    }
}

/// One project candidate of a path
#[derive(Debug, Serialize, Tabled)]
pub struct CandidateRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    #[tabled(rename = "CANDIDATE")]
    pub candidate: String,
    /// Whether resolution offers this candidate to the project lookup
    #[tabled(rename = "LOOKED UP")]
    pub looked_up: bool,
}

/// Candidate list of a path, longest first
#[derive(Debug, Serialize)]
pub struct ComponentsReport {
    pub path: String,
    pub components: Vec<CandidateRow>,
}

impl Formattable for ComponentsReport {
    fn format_pretty(&self) -> String {
        let mut table = Table::new(&self.components);
        table.with(Style::sharp());
        table.to_string()
    }
}

impl Formattable for ResolutionSummary {
    fn format_pretty(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Path: {}\n", self.path));

        match self.state {
            ResolutionState::NoProjectMatch => {
                output.push_str("Project: ✗ No project matched\n");
                return output;
            }
            ResolutionState::RootRepository => {
                output.push_str(&format!(
                    "Project: {}\n",
                    self.project.as_deref().unwrap_or_default()
                ));
                output.push_str("Repository: (project root)\n");
            }
            ResolutionState::NestedRepository => {
                output.push_str(&format!(
                    "Project: {}\n",
                    self.project.as_deref().unwrap_or_default()
                ));
                output.push_str(&format!(
                    "Repository: {}\n",
                    self.repository_name.as_deref().unwrap_or_default()
                ));
            }
        }

        if self.has_repository {
            output.push_str("Status: ✓ Repository exists\n");
        } else {
            output.push_str("Status: ○ Repository not registered\n");
        }

        output
    }
}

/// Check whether a path is valid under the context's settings
pub fn check_path(ctx: &AppContext, path: &str) -> Result<ValidityReport, String> {
    let resolver = ctx.resolver_builder()?.build(Catalog::default());
    Ok(ValidityReport {
        path: path.to_string(),
        valid: resolver.is_valid(path),
        depth: RegistryPath::new(path).depth(),
        max_nesting_depth: resolver.validator().max_nesting_depth(),
    })
}

/// List the project candidates of a path
pub fn list_components(ctx: &AppContext, path: &str) -> Result<ComponentsReport, String> {
    let resolver = ctx.resolver_builder()?.build(Catalog::default());
    let components = resolver.components(path).map_err(|e| e.to_string())?;

    Ok(ComponentsReport {
        path: path.to_string(),
        components: components
            .into_iter()
            .enumerate()
            .map(|(i, candidate)| CandidateRow {
                rank: i + 1,
                candidate,
                looked_up: i < PROJECT_LOOKUP_DEPTH,
            })
            .collect(),
    })
}

/// Pick the catalog file: explicit argument first, then configuration
pub fn catalog_path(ctx: &AppContext, explicit: Option<&Path>) -> Result<PathBuf, String> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| ctx.config.catalog.path.clone())
        .ok_or_else(|| {
            "No catalog configured. Pass --catalog or set catalog.path in the config file."
                .to_string()
        })
}

/// Resolve a path against a catalog file
pub fn resolve_path(
    ctx: &AppContext,
    path: &str,
    catalog: Option<&Path>,
) -> Result<ResolutionSummary, String> {
    let catalog_file = catalog_path(ctx, catalog)?;
    let catalog = Catalog::load(&catalog_file).map_err(|e| match std::error::Error::source(&e) {
        Some(cause) => format!("{}: {}", e, cause),
        None => e.to_string(),
    })?;
    tracing::info!(catalog = %catalog_file.display(), projects = catalog.len(), "Catalog loaded");

    let resolver = ctx.resolver_builder()?.build(catalog);
    let resolution = resolver.resolve(path).map_err(|e| e.to_string())?;
    Ok(resolution.summary())
}

#[cfg(test)]
mod tests;
