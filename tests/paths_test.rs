use stamp::error::Error;
use stamp::paths::{ensure_target_absent, resolve_target_dir_in};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_resolve_without_output_folder() {
    let base = Path::new("/work");
    assert_eq!(
        resolve_target_dir_in(base, None, "acme-app"),
        Path::new("/work/acme-app")
    );
}

#[test]
fn test_resolve_with_output_folder() {
    let base = Path::new("/work");
    assert_eq!(
        resolve_target_dir_in(base, Some("apps"), "acme-app"),
        Path::new("/work/apps/acme-app")
    );
}

#[test]
fn test_blank_output_folder_is_ignored() {
    let base = Path::new("/work");
    assert_eq!(
        resolve_target_dir_in(base, Some("   "), "acme-app"),
        Path::new("/work/acme-app")
    );
}

#[test]
fn test_absolute_output_folder_wins() {
    let base = Path::new("/work");
    assert_eq!(
        resolve_target_dir_in(base, Some("/elsewhere"), "acme-app"),
        Path::new("/elsewhere/acme-app")
    );
}

#[test]
fn test_ensure_target_absent() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("not-there");
    assert!(ensure_target_absent(&missing).is_ok());

    match ensure_target_absent(temp_dir.path()) {
        Err(Error::TargetExistsError { target }) => {
            assert_eq!(target, temp_dir.path().display().to_string());
        }
        other => panic!("Expected TargetExistsError, got {:?}", other.err()),
    }

    // An existing file at the target path is a collision too
    let file = temp_dir.path().join("occupied");
    std::fs::write(&file, "x").unwrap();
    assert!(ensure_target_absent(&file).is_err());
}
