use super::*;

#[test]
fn test_segments_split_on_separator() {
    let path = RegistryPath::new("group/subgroup/proj");
    assert_eq!(path.segments(), ["group", "subgroup", "proj"]);
    assert_eq!(path.depth(), 3);
    assert_eq!(path.as_str(), "group/subgroup/proj");
}

#[test]
fn test_segments_keep_empty_artifacts() {
    let path = RegistryPath::new("group//proj/");
    assert_eq!(path.segments(), ["group", "", "proj", ""]);
}

#[test]
fn test_empty_path_has_one_empty_segment() {
    let path = RegistryPath::new("");
    assert_eq!(path.segments(), [""]);
}

#[test]
fn test_components_five_segments() {
    let path = RegistryPath::new("group/subgroup/proj/img/name");
    let components = path.components(&Validator::default()).unwrap();
    assert_eq!(
        components,
        [
            "group/subgroup/proj/img/name",
            "group/subgroup/proj/img",
            "group/subgroup/proj",
            "group/subgroup",
        ]
    );
}

#[test]
fn test_components_two_segments_yield_the_path_itself() {
    let path = RegistryPath::new("group/proj");
    let components = path.components(&Validator::default()).unwrap();
    assert_eq!(components, ["group/proj"]);
}

#[test]
fn test_components_count_and_order_for_every_valid_depth() {
    let validator = Validator::default();
    for depth in 2..validator.max_nesting_depth() {
        let raw = (0..depth)
            .map(|i| format!("n{}", i))
            .collect::<Vec<_>>()
            .join("/");
        let path = RegistryPath::new(raw.as_str());
        let components = path.components(&validator).unwrap();

        assert_eq!(components.len(), depth - 1);
        assert_eq!(components[0], raw);
        for pair in components.windows(2) {
            let longer = pair[0].split('/').count();
            let shorter = pair[1].split('/').count();
            assert_eq!(longer, shorter + 1);
            assert!(pair[0].starts_with(&pair[1]));
        }
        assert_eq!(components.last().unwrap().split('/').count(), 2);
    }
}

#[test]
fn test_components_invalid_path_fails() {
    let validator = Validator::default();
    for raw in ["onlyonesegment", "", "group//proj", "Group/Proj"] {
        let path = RegistryPath::new(raw);
        let err = path.components(&validator).unwrap_err();
        assert!(matches!(err, RegPathError::InvalidPath { ref path } if path == raw));
    }
}

#[test]
fn test_components_are_cached() {
    let validator = Validator::default();
    let path = RegistryPath::new("a/b/c");
    let first = path.components(&validator).unwrap().as_ptr();
    let second = path.components(&validator).unwrap().as_ptr();
    assert_eq!(first, second);
}

#[test]
fn test_components_rechecks_validity_after_caching() {
    let path = RegistryPath::new("a/b/c");
    assert!(path.components(&Validator::default()).is_ok());

    let strict = Validator::new(crate::syntax::PatternRule::default(), 3);
    assert!(path.components(&strict).is_err());
}

#[test]
fn test_display_and_equality() {
    let a = RegistryPath::from("group/proj");
    let b = RegistryPath::from("group/proj".to_string());
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "group/proj");
}
