use super::*;
use crate::catalog::{Catalog, CatalogProject};
use crate::error::RegPathError;
use crate::resolve::ResolutionState;

fn catalog() -> Catalog {
    Catalog::from_projects(vec![
        CatalogProject::new("group/subgroup/proj", vec!["img/name".to_string()]),
        CatalogProject::new("group/proj", vec![String::new()]),
    ])
    .unwrap()
}

#[test]
fn test_path_resolver_new_uses_defaults() {
    let resolver = PathResolver::new(catalog());
    assert_eq!(resolver.validator().max_nesting_depth(), 20);
    assert_eq!(resolver.projects().len(), 2);
}

#[test]
fn test_is_valid() {
    let resolver = PathResolver::new(catalog());
    assert!(resolver.is_valid("group/proj"));
    assert!(!resolver.is_valid("onlyonesegment"));
}

#[test]
fn test_components_example() {
    let resolver = PathResolver::new(catalog());
    let components = resolver.components("group/subgroup/proj/img/name").unwrap();
    assert_eq!(
        &components[..3],
        [
            "group/subgroup/proj/img/name",
            "group/subgroup/proj/img",
            "group/subgroup/proj",
        ]
    );
}

#[test]
fn test_components_invalid() {
    let resolver = PathResolver::new(catalog());
    assert!(matches!(
        resolver.components("onlyonesegment"),
        Err(RegPathError::InvalidPath { .. })
    ));
}

#[test]
fn test_resolve_nested_example() {
    let resolver = PathResolver::new(catalog());
    let resolution = resolver.resolve("group/subgroup/proj/img/name").unwrap();

    assert_eq!(resolution.project().unwrap().full_path, "group/subgroup/proj");
    assert_eq!(resolution.repository_name(), Some("img/name"));
    assert!(!resolution.is_root());
    assert!(resolution.has_repository());
}

#[test]
fn test_resolve_root_example() {
    let resolver = PathResolver::new(catalog());
    let resolution = resolver.resolve("group/proj").unwrap();

    assert!(resolution.is_root());
    assert_eq!(resolution.repository_name(), Some(""));
    assert!(resolution.has_repository());
    assert_eq!(resolution.state(), ResolutionState::RootRepository);
}

#[test]
fn test_resolve_invalid_example() {
    let resolver = PathResolver::new(catalog());
    assert!(resolver.resolve("onlyonesegment").is_err());
}

#[test]
fn test_resolve_path_reuses_wrapped_path() {
    let resolver = PathResolver::new(catalog());
    let path = RegistryPath::new("group/proj/image");
    let first = resolver.resolve_path(&path).unwrap();
    let second = resolver.resolve_path(&path).unwrap();
    assert_eq!(first, second);
    assert!(!first.has_repository());
}

#[test]
fn test_borrowed_resolver() {
    let catalog = catalog();
    let resolver = PathResolver::new(&catalog);
    assert!(resolver.resolve("group/proj").unwrap().has_project());
}

#[test]
fn test_builder_depth() {
    let resolver = PathResolverBuilder::new()
        .max_nesting_depth(3)
        .build(catalog());
    assert!(resolver.is_valid("group/proj"));
    assert!(!resolver.is_valid("group/proj/image"));
}

#[test]
fn test_builder_custom_rule() {
    let resolver = PathResolverBuilder::new()
        .name_rule(|path: &str| path.chars().all(|c| c.is_ascii_uppercase() || c == '/'))
        .build(Catalog::default());
    assert!(resolver.is_valid("GROUP/PROJ"));
    assert!(!resolver.is_valid("group/proj"));
}

#[test]
fn test_builder_invalid_pattern() {
    let result = PathResolverBuilder::new().name_pattern("(unclosed");
    assert!(matches!(result, Err(RegPathError::Syntax { .. })));
}

#[test]
fn test_builder_with_config() {
    let config = Config::from_yaml_str(
        r#"
validation:
  max_nesting_depth: 4
  name_pattern: "^[a-z]+(/[a-z]+)*$"
"#,
    )
    .unwrap();

    let resolver = PathResolverBuilder::new()
        .with_config(&config)
        .unwrap()
        .build(Catalog::default());

    assert_eq!(resolver.validator().max_nesting_depth(), 4);
    assert!(resolver.is_valid("abc/def"));
    assert!(!resolver.is_valid("abc/d3f"));
    assert!(!resolver.is_valid("a/b/c/d"));
}

#[test]
fn test_builder_with_config_rejects_shallow_depth() {
    let mut config = Config::default();
    config.validation.max_nesting_depth = 0;

    let result = PathResolverBuilder::new().with_config(&config);
    assert!(matches!(result, Err(RegPathError::Config { .. })));
}
