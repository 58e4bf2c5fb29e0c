//! Basic usage example for the regpath library.
//!
//! This example resolves a handful of registry paths against a small
//! in-memory catalog.
//!
//! Run with: cargo run --example basic_usage

use libregpath::{Catalog, PathResolver, ProjectRef};

const CATALOG: &str = r#"
[[projects]]
full_path = "some/group/my_project"
repositories = ["my/image"]

[[projects]]
full_path = "group/proj"
repositories = [""]
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("regpath Library - Basic Usage Example\n");

    let resolver = PathResolver::new(Catalog::from_toml_str(CATALOG)?);

    for path in [
        "some/group/my_project/my/image",
        "group/proj",
        "unknown/group/image",
        "onlyonesegment",
    ] {
        if !resolver.is_valid(path) {
            println!("✗ {}: invalid path\n", path);
            continue;
        }

        println!("{}", path);
        for candidate in resolver.components(path)? {
            println!("  candidate: {}", candidate);
        }

        let resolution = resolver.resolve(path)?;
        match resolution.project() {
            Some(project) => println!(
                "✓ project: {}, repository: '{}' (exists: {})\n",
                project.full_path(),
                resolution.repository_name().unwrap_or_default(),
                resolution.has_repository()
            ),
            None => println!("✗ no project among the first candidates\n"),
        }
    }

    Ok(())
}
