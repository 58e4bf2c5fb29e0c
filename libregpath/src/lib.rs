//! regpath - Registry Path Resolution Library
//!
//! Container registries report image repositories as flat paths such as
//! `group/subgroup/proj/img/name`. When projects live inside nested
//! namespaces, any prefix of that path could be the project. regpath
//! decomposes the path into candidate project paths, picks the most
//! specific existing project, and derives the repository name from the
//! remainder.
//!
//! # Quick Start
//!
//! ```
//! use libregpath::{Catalog, PathResolver};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::from_toml_str(r#"
//!         [[projects]]
//!         full_path = "group/subgroup/proj"
//!         repositories = ["img/name"]
//!     "#)?;
//!     let resolver = PathResolver::new(catalog);
//!
//!     let resolution = resolver.resolve("group/subgroup/proj/img/name")?;
//!     assert_eq!(resolution.repository_name(), Some("img/name"));
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`PathResolver`] - Main entry point: validate, decompose, resolve
//! - [`PathResolverBuilder`] - Builder for custom rules and depth bounds
//! - [`RegistryPath`] - A path and its cached project candidates
//! - [`ProjectResolver`] - Interface to the system that knows the projects
//! - [`Catalog`] - File-backed in-memory [`ProjectResolver`]
//! - [`Resolution`] - Outcome of a resolution

#![warn(clippy::all)]

/// Returns the libregpath crate version.
///
/// # Examples
///
/// ```
/// let version = libregpath::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API (main entry point)
mod resolver;
pub use resolver::{PathResolver, PathResolverBuilder};

pub use catalog::{Catalog, CatalogProject};
pub use config::Config;
pub use error::{RegPathError, Result};
pub use path::RegistryPath;
pub use project::{ProjectRef, ProjectResolver};
pub use resolve::{Resolution, ResolutionState, ResolutionSummary};
pub use syntax::{NameSyntaxRule, PatternRule};
pub use validator::Validator;

pub mod catalog;
pub mod config;
pub mod error;
pub mod path;
pub mod project;
pub mod resolve;
pub mod syntax;
pub mod validator;
