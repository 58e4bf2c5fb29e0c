use super::*;

#[test]
fn test_load_config_missing_file_gives_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    let config = load_config(&config_path, false).unwrap();
    assert!(config.validation.name_pattern.is_none());
}

#[test]
fn test_load_config_missing_required_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("typo.yaml");

    let err = load_config(&config_path, true).unwrap_err();
    assert!(err.contains("Config file not found"));
    assert!(err.contains("typo.yaml"));
}

#[test]
fn test_load_config_required_file_is_read() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "validation:\n  max_nesting_depth: 7\n").unwrap();

    let config = load_config(&config_path, true).unwrap();
    assert_eq!(config.validation.max_nesting_depth, 7);
}

#[test]
fn test_save_then_load_round_trip_of_custom_values() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    let mut config = Config::default();
    config.validation.max_nesting_depth = 9;
    config.catalog.path = Some(PathBuf::from("/srv/catalog.toml"));
    save_config(&config, &config_path).unwrap();

    let loaded = load_config(&config_path, false).unwrap();
    assert_eq!(loaded.validation.max_nesting_depth, 9);
    assert_eq!(loaded.catalog.path, Some(PathBuf::from("/srv/catalog.toml")));
}

#[test]
fn test_load_config_invalid_file_reports_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "validation: { max_nesting_depth: deep }").unwrap();

    let err = load_config(&config_path, false).unwrap_err();
    assert!(err.contains("config.yaml"));
}

#[test]
fn test_save_config_creates_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("subdir").join("config.yaml");

    assert!(save_config(&Config::default(), &config_path).is_ok());
    assert!(config_path.exists());
}

#[test]
fn test_init_config_writes_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    init_config(&config_path).unwrap();
    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("max_nesting_depth: 20"));
}

#[test]
fn test_init_config_refuses_to_overwrite() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    init_config(&config_path).unwrap();
    let result = init_config(&config_path);
    assert!(result.unwrap_err().contains("already exists"));
}
