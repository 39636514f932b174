//! Template directory location.
//! The template ships next to the installed executable; an explicit flag
//! overrides that for development and tests.

use std::path::{Path, PathBuf};

use crate::constants::TEMPLATE_DIR_NAME;
use crate::error::{Error, Result};

/// Returns the template directory for this run.
///
/// # Errors
/// * `Error::TemplateError` when the resolved directory does not exist
pub fn locate_template_dir(flag: Option<&Path>) -> Result<PathBuf> {
    let dir = match flag {
        Some(dir) => dir.to_path_buf(),
        None => {
            let exe = std::env::current_exe().map_err(Error::IoError)?;
            match exe.parent() {
                Some(parent) => parent.join(TEMPLATE_DIR_NAME),
                None => PathBuf::from(TEMPLATE_DIR_NAME),
            }
        }
    };

    if !dir.is_dir() {
        return Err(Error::TemplateError(format!(
            "template directory does not exist: {}",
            dir.display()
        )));
    }
    Ok(dir)
}
