//! Error handling for the stamp application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for stamp operations.
///
/// Only fatal conditions are represented here; recoverable per-file and
/// external-step failures are logged at their call sites and never
/// surface as an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The target directory already exists; the single hard precondition
    /// of the whole pipeline
    #[error("Directory already exists: {target}.")]
    TargetExistsError { target: String },

    /// Represents errors locating or reading the template tree
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents validation failures in user input or flag values
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors raised by the interactive prompt layer
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// An external command step marked fatal did not succeed
    #[error("Command step '{name}' failed: {reason}.")]
    CommandError { name: String, reason: String },
}

/// Convenience type alias for Results with stamp's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
