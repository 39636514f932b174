//! Stamp is a project generator: it copies a local template tree into a new
//! target directory, stamps configuration values over placeholder tokens,
//! and runs the usual post-generation chores (dependency install, git init).

/// Command-line interface module for the stamp application
pub mod cli;

/// Validated project configuration and its derived values
/// (domain slug, camel-cased domain, placeholder replacements)
pub mod config;

/// Common constants: placeholder tokens, text-file allow-list,
/// reserved filenames
pub mod constants;

/// Recursive template tree copying with name-based exclusions
pub mod copier;

/// Error types and handling for the stamp application
pub mod error;

/// Pipeline orchestration: copy, normalize, substitute, rewrite, run steps
pub mod generator;

pub mod logger;

/// Manifest (package.json) name/description rewrite
pub mod manifest;

/// Post-copy renaming of reserved template filenames
pub mod normalize;

/// Target path resolution and the existing-target precondition
pub mod paths;

/// User input and interaction handling
pub mod prompt;

/// External command steps (install, git) with per-step failure policy
pub mod runner;

/// Placeholder substitution across the generated tree
pub mod substitute;

/// Template directory location
pub mod template;
