//! Manifest rewrite.
//! Points the generated package descriptor at the new project: the `name`
//! and `description` fields of `package.json` become the project name. The
//! manifest is optional; a template without one generates fine.

use log::warn;
use std::fs;
use std::path::Path;

use crate::constants::MANIFEST_FILE;

fn rewrite(path: &Path, project_name: &str) -> std::io::Result<()> {
    let raw = fs::read_to_string(path)?;
    let mut manifest: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let mut modified = false;
    if let Some(fields) = manifest.as_object_mut() {
        for key in ["name", "description"] {
            if fields.contains_key(key) {
                fields.insert(key.to_string(), serde_json::Value::String(project_name.into()));
                modified = true;
            }
        }
    }

    if modified {
        let mut pretty = serde_json::to_string_pretty(&manifest)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        pretty.push('\n');
        fs::write(path, pretty)?;
    }
    Ok(())
}

/// Rewrites the manifest at the target root when one exists.
///
/// Only fields already present are touched; key order is preserved. A
/// missing manifest is a no-op, and a malformed or unwritable one is
/// logged as a warning without failing the run.
pub fn rewrite_manifest(target_root: &Path, project_name: &str) {
    let path = target_root.join(MANIFEST_FILE);
    if !path.exists() {
        return;
    }
    if let Err(e) = rewrite(&path, project_name) {
        warn!("Could not rewrite {}: {}", path.display(), e);
    }
}
