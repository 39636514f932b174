use std::io;

use stamp::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::TargetExistsError { target: "/tmp/app".to_string() };
    assert_eq!(err.to_string(), "Directory already exists: /tmp/app.");

    let err = Error::ValidationError("Port must be a number".to_string());
    assert_eq!(err.to_string(), "Validation error: Port must be a number.");

    let err = Error::CommandError {
        name: "install dependencies".to_string(),
        reason: "'npm ci' exited with exit status: 1".to_string(),
    };
    assert!(err.to_string().contains("install dependencies"));
}
