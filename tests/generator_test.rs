use stamp::config::ProjectConfig;
use stamp::error::Error;
use stamp::generator::generate;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config() -> ProjectConfig {
    ProjectConfig::new(
        None,
        "acme-app".to_string(),
        "Order Management".to_string(),
        "8080",
        true, // skip install
        true, // skip git
    )
    .unwrap()
}

fn make_template(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("node_modules/junk")).unwrap();
    fs::write(
        root.join("package.json"),
        r#"{"name":"template","description":"template","version":"0.1.0"}"#,
    )
    .unwrap();
    fs::write(root.join("gitignore"), "node_modules\n").unwrap();
    fs::write(
        root.join("src/main.js"),
        "mount('{{DOMAIN_NAME}}', '{{DOMAIN_NAME_SLUG}}', {{DOMAIN_PORT}});",
    )
    .unwrap();
    fs::write(root.join("src/logo.png"), [0x89, 0x50, 0xff, 0x00]).unwrap();
    fs::write(root.join("node_modules/junk/index.js"), "junk").unwrap();
}

#[test]
fn test_end_to_end_generation() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let target = temp_dir.path().join("acme-app");
    make_template(&template);

    let reports = generate(&config(), &template, &target).unwrap();
    assert!(reports.is_empty()); // both external steps skipped

    // Manifest name/description rewritten, other fields intact
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(target.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "acme-app");
    assert_eq!(manifest["description"], "acme-app");
    assert_eq!(manifest["version"], "0.1.0");

    // Reserved ignore file renamed, content intact
    assert!(!target.join("gitignore").exists());
    assert_eq!(
        fs::read_to_string(target.join(".gitignore")).unwrap(),
        "node_modules\n"
    );

    // Placeholders substituted everywhere
    assert_eq!(
        fs::read_to_string(target.join("src/main.js")).unwrap(),
        "mount('orderManagement', '/order-management', 8080);"
    );

    // Binary asset byte-identical, build artifacts never copied
    assert_eq!(fs::read(target.join("src/logo.png")).unwrap(), vec![0x89, 0x50, 0xff, 0x00]);
    assert!(!target.join("node_modules").exists());

    // The template tree itself is untouched
    assert!(template.join("gitignore").exists());
    assert_eq!(
        fs::read_to_string(template.join("src/main.js")).unwrap(),
        "mount('{{DOMAIN_NAME}}', '{{DOMAIN_NAME_SLUG}}', {{DOMAIN_PORT}});"
    );
}

#[test]
fn test_existing_target_aborts_before_any_write() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("template");
    let target = temp_dir.path().join("acme-app");
    make_template(&template);
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("precious.txt"), "keep me").unwrap();

    match generate(&config(), &template, &target) {
        Err(Error::TargetExistsError { .. }) => {}
        other => panic!("Expected TargetExistsError, got {:?}", other.err()),
    }

    // Zero writes under the existing target
    let entries: Vec<_> = fs::read_dir(&target).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(target.join("precious.txt")).unwrap(), "keep me");
}
