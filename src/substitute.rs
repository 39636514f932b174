//! Placeholder substitution across the generated tree.
//! Walks the target directory and replaces literal placeholder tokens in
//! text-like files. Binary assets are protected by an extension allow-list,
//! and a single unreadable or unwritable file never aborts the pass.

use log::{debug, warn};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::ReplacementMap;
use crate::constants::TEXT_EXTENSIONS;
use crate::error::Result;

/// Returns whether a file is eligible for text substitution.
///
/// Files with an allow-listed extension are eligible, as are extensionless
/// files (Dockerfile, LICENSE and similar carry tokens too).
pub fn is_text_like(path: &Path) -> bool {
    match path.extension() {
        None => true,
        Some(ext) => match ext.to_str() {
            Some(ext) => TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
            None => false,
        },
    }
}

/// Replaces every occurrence of each token in `content`.
///
/// Tokens are literal strings, never interpreted as patterns. Returns the
/// rewritten content and whether anything matched, so callers can skip the
/// write when nothing changed.
pub fn apply_replacements(content: &str, replacements: &ReplacementMap) -> (String, bool) {
    let mut content = content.to_string();
    let mut modified = false;
    for (token, value) in replacements {
        if content.contains(token.as_str()) {
            content = content.replace(token.as_str(), value);
            modified = true;
        }
    }
    (content, modified)
}

fn substitute_file(path: &Path, replacements: &ReplacementMap) -> std::io::Result<()> {
    let content = fs::read_to_string(path)?;
    let (content, modified) = apply_replacements(&content, replacements);
    if modified {
        fs::write(path, content)?;
        debug!("Substituted placeholders in {}", path.display());
    }
    Ok(())
}

/// Performs a depth-first substitution pass over `root`.
///
/// Every directory is entered (no exclusions at this stage; the whole
/// generated tree is in scope). Non-text-like files are left untouched.
/// Per-file read, decode, or write failures are logged with the path and
/// cause, and the walk continues to the next entry.
pub fn substitute_tree(root: &Path, replacements: &ReplacementMap) -> Result<()> {
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Could not walk entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_text_like(entry.path()) {
            continue;
        }
        if let Err(e) = substitute_file(entry.path(), replacements) {
            warn!("Could not process file {}: {}", entry.path().display(), e);
        }
    }
    Ok(())
}
