//! Pipeline orchestration.
//! Runs the generation stages in their fixed order: precondition check,
//! tree copy, reserved-file rename, placeholder substitution, manifest
//! rewrite, external steps. There is no rollback; a fatal mid-pipeline
//! failure leaves the partially written target for the user to inspect.

use std::path::Path;

use crate::config::ProjectConfig;
use crate::copier::copy_tree;
use crate::error::Result;
use crate::manifest::rewrite_manifest;
use crate::normalize::normalize_reserved_files;
use crate::paths::ensure_target_absent;
use crate::runner::{build_steps, run_steps, StepReport};
use crate::substitute::substitute_tree;

/// Generates a project at `target_dir` from `template_dir`.
///
/// The target must not exist beforehand; on success it is the caller-owned
/// deliverable. The template tree is never mutated.
///
/// # Errors
/// * `Error::TargetExistsError` before any write when the target exists
/// * `Error::IoError` from the copy stage
/// * `Error::CommandError` only for steps marked fatal (none by default)
pub fn generate(
    config: &ProjectConfig,
    template_dir: &Path,
    target_dir: &Path,
) -> Result<Vec<StepReport>> {
    ensure_target_absent(target_dir)?;

    println!("Copying template files...");
    copy_tree(template_dir, target_dir, &[])?;

    normalize_reserved_files(target_dir);

    println!("Configuring project files...");
    substitute_tree(target_dir, &config.replacements())?;
    rewrite_manifest(target_dir, &config.project_name);

    run_steps(&build_steps(config, target_dir))
}
