//! Recursive template tree copying.
//! Copies a directory subtree verbatim, skipping excluded names and the
//! transient build-artifact directory at every depth. File contents are
//! streamed by `fs::copy`; the whole tree is never held in memory.

use log::debug;
use std::fs;
use std::path::Path;

use crate::constants::BUILD_ARTIFACT_DIR;
use crate::error::{Error, Result};

/// Copies `src` into `dst`, recursing through directories.
///
/// Exclusions are matched by exact entry name at each directory level, so
/// an excluded name is skipped wherever it occurs in the tree. The
/// build-artifact directory is always excluded. A non-existent `src` is a
/// silent no-op, which lets optional template files be absent.
///
/// # Errors
/// * `Error::IoError` on any filesystem failure; copy errors are fatal
pub fn copy_tree(src: &Path, dst: &Path, exclude: &[String]) -> Result<()> {
    if !src.exists() {
        debug!("Copy source does not exist, skipping: {}", src.display());
        return Ok(());
    }

    if src.is_dir() {
        if !dst.exists() {
            fs::create_dir_all(dst).map_err(Error::IoError)?;
        }
        for entry in fs::read_dir(src).map_err(Error::IoError)? {
            let entry = entry.map_err(Error::IoError)?;
            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if name_str == BUILD_ARTIFACT_DIR || exclude.iter().any(|e| *e == name_str) {
                debug!("Excluding entry: {}", entry.path().display());
                continue;
            }
            copy_tree(&entry.path(), &dst.join(&name), exclude)?;
        }
    } else {
        fs::copy(src, dst).map_err(Error::IoError)?;
    }

    Ok(())
}
