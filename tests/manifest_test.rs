use stamp::manifest::rewrite_manifest;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_name_and_description_are_rewritten() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join("package.json"),
        r#"{"name":"template","description":"template","version":"1.0.0"}"#,
    )
    .unwrap();

    rewrite_manifest(root, "acme-app");

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "acme-app");
    assert_eq!(manifest["description"], "acme-app");
    // Other fields are untouched
    assert_eq!(manifest["version"], "1.0.0");
}

#[test]
fn test_absent_fields_are_not_invented() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("package.json"), r#"{"version":"1.0.0"}"#).unwrap();

    rewrite_manifest(root, "acme-app");

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert!(manifest.get("name").is_none());
    assert!(manifest.get("description").is_none());
}

#[test]
fn test_missing_manifest_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();

    rewrite_manifest(temp_dir.path(), "acme-app");

    assert!(!temp_dir.path().join("package.json").exists());
}

#[test]
fn test_malformed_manifest_is_tolerated() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("package.json"), "not json {").unwrap();

    // Logged as a warning, never a panic or an error
    rewrite_manifest(root, "acme-app");

    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        "not json {"
    );
}
