//! Target path resolution.
//! Computes the output directory for a generation run and enforces the
//! pipeline's single hard precondition: the target must not exist yet.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Computes the target directory from an explicit base directory.
///
/// `base' = base/output_folder` when an output folder is given (empty
/// strings count as absent), otherwise `base` itself; the target is
/// `base'/project_name`.
pub fn resolve_target_dir_in(
    base: &Path,
    output_folder: Option<&str>,
    project_name: &str,
) -> PathBuf {
    let base = match output_folder {
        Some(folder) if !folder.trim().is_empty() => base.join(folder),
        _ => base.to_path_buf(),
    };
    base.join(project_name)
}

/// Computes the target directory relative to the current working directory.
pub fn resolve_target_dir(output_folder: Option<&str>, project_name: &str) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(Error::IoError)?;
    Ok(resolve_target_dir_in(&cwd, output_folder, project_name))
}

/// Fails when the target already exists on the filesystem.
///
/// Must run before any filesystem mutation. No side effects.
///
/// # Errors
/// * `Error::TargetExistsError` if `target` exists
pub fn ensure_target_absent(target: &Path) -> Result<()> {
    if target.exists() {
        return Err(Error::TargetExistsError {
            target: target.display().to_string(),
        });
    }
    Ok(())
}
