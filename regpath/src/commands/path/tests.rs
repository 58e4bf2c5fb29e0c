use super::*;
use crate::context::VerbosityLevel;
use crate::format::ColorChoice;
use libregpath::Config;
use std::io::Write;

const CATALOG: &str = r#"
[[projects]]
full_path = "group/subgroup/proj"
repositories = ["img/name"]

[[projects]]
full_path = "group/proj"
repositories = [""]
"#;

fn ctx() -> AppContext {
    AppContext::new(Config::default(), ColorChoice::Never, VerbosityLevel::Normal)
}

fn catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

#[test]
fn test_check_valid_path() {
    let report = check_path(&ctx(), "group/proj").unwrap();
    assert!(report.valid);
    assert_eq!(report.depth, 2);
    assert_eq!(report.max_nesting_depth, 20);
    assert!(report.format_pretty().starts_with("group/proj: valid"));
}

#[test]
fn test_check_invalid_path() {
    let report = check_path(&ctx(), "onlyonesegment").unwrap();
    assert!(!report.valid);
    assert!(report.format_pretty().contains("invalid"));
}

#[test]
fn test_check_uses_context_depth() {
    let mut config = Config::default();
    config.validation.max_nesting_depth = 3;
    let ctx = AppContext::new(config, ColorChoice::Never, VerbosityLevel::Normal);

    assert!(!check_path(&ctx, "a/b/c").unwrap().valid);
}

#[test]
fn test_list_components_marks_lookup_window() {
    let report = list_components(&ctx(), "group/subgroup/proj/img/name").unwrap();

    let candidates: Vec<&str> = report
        .components
        .iter()
        .map(|row| row.candidate.as_str())
        .collect();
    assert_eq!(
        candidates,
        [
            "group/subgroup/proj/img/name",
            "group/subgroup/proj/img",
            "group/subgroup/proj",
            "group/subgroup",
        ]
    );
    let looked_up: Vec<bool> = report.components.iter().map(|row| row.looked_up).collect();
    assert_eq!(looked_up, [true, true, true, false]);
    assert_eq!(report.components[0].rank, 1);
}

#[test]
fn test_list_components_invalid_path() {
    let err = list_components(&ctx(), "onlyonesegment").unwrap_err();
    assert!(err.contains("onlyonesegment"));
}

#[test]
fn test_components_pretty_is_a_table() {
    let report = list_components(&ctx(), "group/proj").unwrap();
    let output = report.format_pretty();
    assert!(output.contains("CANDIDATE"));
    assert!(output.contains("group/proj"));
}

#[test]
fn test_catalog_path_prefers_explicit() {
    let mut config = Config::default();
    config.catalog.path = Some(PathBuf::from("/from/config.toml"));
    let ctx = AppContext::new(config, ColorChoice::Never, VerbosityLevel::Normal);

    assert_eq!(
        catalog_path(&ctx, Some(Path::new("/explicit.toml"))).unwrap(),
        PathBuf::from("/explicit.toml")
    );
    assert_eq!(
        catalog_path(&ctx, None).unwrap(),
        PathBuf::from("/from/config.toml")
    );
}

#[test]
fn test_catalog_path_missing() {
    let err = catalog_path(&ctx(), None).unwrap_err();
    assert!(err.contains("No catalog configured"));
}

#[test]
fn test_resolve_nested() {
    let file = catalog_file();
    let summary = resolve_path(&ctx(), "group/subgroup/proj/img/name", Some(file.path())).unwrap();

    assert_eq!(summary.project.as_deref(), Some("group/subgroup/proj"));
    assert_eq!(summary.repository_name.as_deref(), Some("img/name"));
    assert!(summary.has_repository);
    assert!(summary.format_pretty().contains("Repository: img/name"));
}

#[test]
fn test_resolve_root() {
    let file = catalog_file();
    let summary = resolve_path(&ctx(), "group/proj", Some(file.path())).unwrap();

    assert!(summary.is_root);
    assert_eq!(summary.repository_name.as_deref(), Some(""));
    assert!(summary.format_pretty().contains("(project root)"));
}

#[test]
fn test_resolve_unknown_project() {
    let file = catalog_file();
    let summary = resolve_path(&ctx(), "other/group/image", Some(file.path())).unwrap();

    assert!(!summary.has_project);
    assert!(summary.format_pretty().contains("No project matched"));
}

#[test]
fn test_resolve_invalid_path() {
    let file = catalog_file();
    let err = resolve_path(&ctx(), "onlyonesegment", Some(file.path())).unwrap_err();
    assert!(err.contains("Invalid registry path"));
}

#[test]
fn test_resolve_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let err = resolve_path(&ctx(), "group/proj", Some(&missing)).unwrap_err();
    assert!(err.contains("Failed to read catalog file"));
}

#[test]
fn test_resolution_summary_json() {
    let file = catalog_file();
    let summary = resolve_path(&ctx(), "group/proj", Some(file.path())).unwrap();
    let json = crate::format::format_output(&summary, crate::format::OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["state"], "root_repository");
    assert_eq!(value["is_root"], true);
}
